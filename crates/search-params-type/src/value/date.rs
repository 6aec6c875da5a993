//! ISO-8601 text form of dates.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Renders an instant as an ISO-8601 UTC timestamp.
///
/// Millisecond-precision instants use the familiar `.mmmZ` form; finer
/// instants keep all nine fractional digits so the text stays lossless.
/// Years outside `0000..=9999` use the signed six-digit expanded form
/// (`-000001-01-01T00:00:00.000Z`).
pub fn format_iso(date: OffsetDateTime) -> String {
    // An instant at the edge of the supported range may have no UTC
    // counterpart; it keeps its own offset.
    let (local, suffix) = match to_utc(date) {
        Some(utc) => (utc, "Z".to_owned()),
        None => (date, format_offset(date.offset())),
    };
    let nanos = local.nanosecond();
    let fraction = if nanos % 1_000_000 == 0 {
        format!("{:03}", nanos / 1_000_000)
    } else {
        format!("{nanos:09}")
    };
    format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{}{}",
        format_year(local.year()),
        u8::from(local.month()),
        local.day(),
        local.hour(),
        local.minute(),
        local.second(),
        fraction,
        suffix
    )
}

/// Parses an RFC 3339 timestamp (any offset), its expanded-year variant, or
/// a bare `YYYY-MM-DD` date, normalizing the result to UTC.
pub fn parse_iso(text: &str) -> Option<OffsetDateTime> {
    let text = text.trim();
    let parsed = match text.as_bytes().first() {
        Some(b'+' | b'-') => parse_expanded(text),
        _ => OffsetDateTime::parse(text, &Rfc3339).ok(),
    };
    if let Some(date) = parsed {
        return Some(to_utc(date).unwrap_or(date));
    }
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// Same instant in UTC, or `None` when that falls outside the supported
/// calendar range.
fn to_utc(date: OffsetDateTime) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(date.unix_timestamp_nanos()).ok()
}

fn format_year(year: i32) -> String {
    if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+07}")
    }
}

fn format_offset(offset: UtcOffset) -> String {
    let (hours, minutes, _) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    format!("{sign}{:02}:{:02}", hours.unsigned_abs(), minutes.unsigned_abs())
}

/// `±YYYYYY-MM-DDTHH:MM:SS[.f](Z|±HH:MM)`. The year is swapped for a stand-in
/// of the same leap-ness so the remainder parses as RFC 3339.
fn parse_expanded(text: &str) -> Option<OffsetDateTime> {
    let year_text = text.get(..7)?;
    if !year_text[1..].bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_text.parse().ok()?;
    let stand_in = if time::util::is_leap_year(year) { 2000 } else { 2001 };
    let parsed = OffsetDateTime::parse(&format!("{stand_in}{}", text.get(7..)?), &Rfc3339).ok()?;
    Date::from_calendar_date(year, parsed.month(), parsed.day())
        .ok()
        .map(|date| date.with_time(parsed.time()).assume_offset(parsed.offset()))
}
