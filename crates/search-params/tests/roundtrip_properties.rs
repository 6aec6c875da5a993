//! Property tests: anything valid survives encode/decode, and fields equal
//! to their default never reach the wire.

use proptest::prelude::*;
use search_params::{
    decode, encode, lenient_decode, BigInt, KeyType, ObjType, OffsetDateTime, Record,
    SearchParams, TypeBuilder, Value,
};

const FIELDS: [&str; 12] = [
    "name", "count", "flag", "mode", "tags", "scores", "when", "stamps", "id", "limit", "pick",
    "point",
];

fn schema() -> ObjType {
    let t = TypeBuilder::new();
    ObjType::new(vec![
        KeyType::new("name", t.str()),
        KeyType::new("count", t.num()),
        KeyType::new("flag", t.bool()),
        KeyType::new("mode", t.Enum(["a", "b", "c"])),
        KeyType::new("tags", t.Array(t.str())),
        KeyType::new("scores", t.Array(t.num())),
        KeyType::new("when", t.date()),
        KeyType::new("stamps", t.Array(t.date())),
        KeyType::new("id", t.bigint()),
        KeyType::new("limit", t.Nullable(t.num())),
        KeyType::new("pick", t.Or(vec![t.num(), t.date()])),
        KeyType::new(
            "point",
            t.Object(vec![
                KeyType::new("x", t.num()),
                KeyType::new("label", t.str()),
                KeyType::new("at", t.date()),
                KeyType::new("big", t.bigint()),
            ]),
        ),
    ])
}

/// Every `f64` the validator accepts: all but NaN, infinities included.
fn number() -> impl Strategy<Value = Value> {
    any::<f64>()
        .prop_filter("NaN is not a number", |n| !n.is_nan())
        .prop_map(Value::from)
}

/// Instants across the whole supported calendar, at nanosecond precision.
fn date() -> impl Strategy<Value = Value> {
    const MIN_NANOS: i128 = -377_705_116_800 * 1_000_000_000;
    const MAX_NANOS: i128 = 253_402_300_799 * 1_000_000_000 + 999_999_999;
    prop_oneof![
        (MIN_NANOS..=MAX_NANOS),
        // Whole milliseconds take the short `.mmmZ` form.
        (MIN_NANOS / 1_000_000..=MAX_NANOS / 1_000_000).prop_map(|ms| ms * 1_000_000),
    ]
    .prop_map(|nanos| {
        Value::from(OffsetDateTime::from_unix_timestamp_nanos(nanos).expect("in range"))
    })
}

fn bigint() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i128>().prop_map(BigInt::from),
        "-?[1-9][0-9]{0,80}".prop_map(|s| s.parse::<BigInt>().expect("decimal")),
    ]
    .prop_map(Value::from)
}

prop_compose! {
    fn arb_point()(
        x in number(),
        label in "\\PC*",
        at in date(),
        big in bigint(),
    ) -> Value {
        let mut point = Record::new();
        point.insert("x".into(), x);
        point.insert("label".into(), Value::from(label));
        point.insert("at".into(), at);
        point.insert("big".into(), big);
        Value::from(point)
    }
}

prop_compose! {
    fn arb_record()(
        name in ".*",
        count in number(),
        flag in any::<bool>(),
        mode in prop::sample::select(vec!["a", "b", "c"]),
        tags in prop::collection::vec(".*", 1..4),
        scores in prop::collection::vec(number(), 1..4),
        when in date(),
        stamps in prop::collection::vec(date(), 1..3),
        id in bigint(),
        limit in prop_oneof![Just(Value::Null), number()],
        pick in prop_oneof![number(), date()],
        point in arb_point(),
    ) -> Record {
        let mut record = Record::new();
        record.insert("name".into(), Value::from(name));
        record.insert("count".into(), count);
        record.insert("flag".into(), Value::from(flag));
        record.insert("mode".into(), Value::from(mode));
        record.insert("tags".into(), Value::from(tags));
        record.insert("scores".into(), Value::Array(scores));
        record.insert("when".into(), when);
        record.insert("stamps".into(), Value::Array(stamps));
        record.insert("id".into(), id);
        record.insert("limit".into(), limit);
        record.insert("pick".into(), pick);
        record.insert("point".into(), point);
        record
    }
}

proptest! {
    #[test]
    fn generated_records_are_valid(record in arb_record()) {
        prop_assert!(schema().validate(&record).is_ok());
    }

    #[test]
    fn valid_records_round_trip_through_text(record in arb_record()) {
        let s = schema();
        let wire = encode(&s, &record, None).to_string();
        let back = decode(&s, &SearchParams::parse(&wire), None).unwrap();
        prop_assert_eq!(back, record);
    }

    #[test]
    fn fields_equal_to_defaults_are_omitted(record in arb_record(), other in arb_record()) {
        let s = schema();
        let out = encode(&s, &record, Some(&other));
        for (key, value) in &record {
            prop_assert_eq!(out.has(key), *value != other[key.as_str()]);
        }
        let back = decode(&s, &out, Some(&other)).unwrap();
        prop_assert_eq!(back, record);
    }

    #[test]
    fn lenient_decode_of_garbage_yields_valid_records(
        pairs in prop::collection::vec((prop::sample::select(FIELDS.to_vec()), ".*"), 0..8),
        defaults in arb_record(),
    ) {
        let s = schema();
        let params: SearchParams = pairs.into_iter().collect();
        let out = lenient_decode(&s, &params, &defaults);
        prop_assert!(s.validate(&out).is_ok());
    }
}
