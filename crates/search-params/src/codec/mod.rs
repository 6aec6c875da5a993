//! Value codec: kind-directed conversion between one native value and its
//! wire string.
//!
//! | kind          | encode                       | decode                   |
//! |---------------|------------------------------|--------------------------|
//! | string, enum  | identity                     | identity                 |
//! | number        | shortest decimal, `Infinity` | parse, reject NaN        |
//! | boolean       | `t` / `f`                    | `t` or `true` is true    |
//! | date          | ISO-8601 UTC                 | RFC 3339 or `YYYY-MM-DD` |
//! | bigint        | decimal                      | parse decimal            |
//! | anything else | JSON, then base64url         | base64url, then JSON     |

mod opaque;

use search_params_type::{format_iso, parse_iso, BigInt, TypeNode, Value};

use crate::error::CodecErrorKind;

/// Wire-level classification of a schema node.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind<'a> {
    String,
    /// Enums, string literals and unions made only of strings.
    Enum,
    Number,
    Boolean,
    Date,
    BigInt,
    /// Multi-valued field; one wire entry per element of the given type.
    Array(&'a TypeNode),
    Opaque,
}

impl<'a> FieldKind<'a> {
    pub fn of(ty: &'a TypeNode) -> Self {
        match ty {
            TypeNode::Str(_) => Self::String,
            TypeNode::Enum(_) => Self::Enum,
            TypeNode::Con(t) if matches!(t.value, Value::String(_)) => Self::Enum,
            TypeNode::Or(t) if !t.types.is_empty() && t.types.iter().all(is_string_valued) => {
                Self::Enum
            }
            TypeNode::Num(_) => Self::Number,
            TypeNode::Bool(_) => Self::Boolean,
            TypeNode::Date(_) => Self::Date,
            TypeNode::BigInt(_) => Self::BigInt,
            TypeNode::Arr(t) => Self::Array(&t.type_),
            TypeNode::Any(_) | TypeNode::Con(_) | TypeNode::Obj(_) | TypeNode::Or(_) => {
                Self::Opaque
            }
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

fn is_string_valued(ty: &TypeNode) -> bool {
    matches!(FieldKind::of(ty), FieldKind::String | FieldKind::Enum)
}

/// Renders one value of type `ty` as its wire string.
///
/// The value is expected to have already passed validation against `ty`. A
/// scalar kind paired with a value of another kind is a caller error; the
/// value's plain `Display` form is emitted in that case.
pub fn encode(ty: &TypeNode, value: &Value) -> String {
    match (FieldKind::of(ty), value) {
        (FieldKind::String | FieldKind::Enum, Value::String(s)) => s.clone(),
        (FieldKind::Number, Value::Number(_)) => value.to_string(),
        (FieldKind::Boolean, Value::Bool(b)) => (if *b { "t" } else { "f" }).to_owned(),
        (FieldKind::Date, Value::Date(d)) => format_iso(*d),
        (FieldKind::BigInt, Value::BigInt(n)) => n.to_string(),
        (FieldKind::Array(_) | FieldKind::Opaque, _) => opaque::encode(value),
        (_, other) => other.to_string(),
    }
}

/// Parses one wire string as a value of type `ty`.
///
/// Only the wire form is checked here; constraints such as enum membership
/// are the validator's job.
pub fn decode(ty: &TypeNode, raw: &str) -> Result<Value, CodecErrorKind> {
    match FieldKind::of(ty) {
        FieldKind::String | FieldKind::Enum => Ok(Value::String(raw.to_owned())),
        FieldKind::Number => decode_number(raw).map(Value::Number),
        FieldKind::Boolean => Ok(Value::Bool(raw == "t" || raw == "true")),
        FieldKind::Date => parse_iso(raw)
            .map(Value::Date)
            .ok_or_else(|| CodecErrorKind::InvalidDate(raw.to_owned())),
        FieldKind::BigInt => decode_bigint(raw).map(Value::BigInt),
        FieldKind::Array(_) | FieldKind::Opaque => opaque::decode(ty, raw),
    }
}

fn decode_number(raw: &str) -> Result<f64, CodecErrorKind> {
    let text = raw.trim();
    let parsed = match text {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        // Rust also reads `inf` and `nan`; only the spellings above count.
        _ => text.parse::<f64>().ok().filter(|n| n.is_finite()),
    };
    parsed.ok_or_else(|| CodecErrorKind::InvalidNumber(raw.to_owned()))
}

fn decode_bigint(raw: &str) -> Result<BigInt, CodecErrorKind> {
    raw.trim()
        .parse::<BigInt>()
        .map_err(|_| CodecErrorKind::InvalidBigInt(raw.to_owned()))
}
