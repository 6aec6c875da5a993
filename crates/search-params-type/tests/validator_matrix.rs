//! Validator behavior per node kind: accepted values, issue codes and paths.

use regex::Regex;
use search_params_type::type_def::{ArrType, BigIntType, DateType, NumType, StrType};
use search_params_type::{
    record, validate, BigInt, IssueCode, KeyType, ObjType, PathSegment, TypeBuilder, TypeNode,
    ValidatorOptions, Value,
};
use time::macros::datetime;

fn t() -> TypeBuilder {
    TypeBuilder::new()
}

fn codes(ty: &TypeNode, value: &Value) -> Vec<&'static str> {
    match validate(ty, value) {
        Ok(_) => Vec::new(),
        Err(err) => err.issues.iter().map(|i| i.code.as_str()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

#[test]
fn scalar_kinds_reject_other_kinds() {
    let cases: Vec<(TypeNode, Value, &str)> = vec![
        (t().bool(), Value::from("true"), "boolean"),
        (t().num(), Value::from("1"), "number"),
        (t().str(), Value::from(1), "string"),
        (t().date(), Value::from("2020-01-01"), "date"),
        (t().bigint(), Value::from(1), "bigint"),
    ];
    for (ty, value, expected) in cases {
        let err = validate(&ty, &value).unwrap_err();
        match &err.issues[0].code {
            IssueCode::InvalidType { expected: e, received } => {
                assert_eq!(*e, expected);
                assert_eq!(*received, value.kind_name());
            }
            other => panic!("unexpected code {other:?} for {expected}"),
        }
    }
}

#[test]
fn any_accepts_everything() {
    for value in [Value::Null, Value::from(1), Value::from(vec!["a"]), Value::from(record! {})] {
        assert!(validate(&t().any(), &value).is_ok());
    }
}

#[test]
fn number_bounds() {
    let ty: TypeNode = NumType::new().gt(0.0).lte(10.0).into();
    assert!(codes(&ty, &Value::from(10)).is_empty());
    assert_eq!(codes(&ty, &Value::from(0)), ["too_small"]);
    assert_eq!(codes(&ty, &Value::from(10.5)), ["too_big"]);
    assert_eq!(codes(&t().int(), &Value::from(1.5)), ["not_integer"]);
    assert_eq!(codes(&t().num(), &Value::Number(f64::NAN)), ["invalid_type"]);
}

#[test]
fn string_length_counts_characters() {
    let ty: TypeNode = StrType::new().min(2).max(3).into();
    assert!(codes(&ty, &Value::from("\u{1F30D}\u{1F30D}")).is_empty());
    assert_eq!(codes(&ty, &Value::from("a")), ["too_small"]);
    assert_eq!(codes(&ty, &Value::from("abcd")), ["too_big"]);
}

#[test]
fn string_pattern() {
    let ty: TypeNode = StrType::new().pattern(Regex::new("^[a-z]+$").unwrap()).into();
    assert!(codes(&ty, &Value::from("abc")).is_empty());
    assert_eq!(codes(&ty, &Value::from("ABC")), ["invalid_string"]);
}

#[test]
fn date_and_bigint_bounds() {
    let dates: TypeNode = DateType::new()
        .min(datetime!(2020-01-01 0:00 UTC))
        .max(datetime!(2020-12-31 0:00 UTC))
        .into();
    assert!(codes(&dates, &Value::from(datetime!(2020-06-01 0:00 UTC))).is_empty());
    assert_eq!(codes(&dates, &Value::from(datetime!(2019-06-01 0:00 UTC))), ["too_small"]);
    assert_eq!(codes(&dates, &Value::from(datetime!(2021-06-01 0:00 UTC))), ["too_big"]);

    let ids: TypeNode = BigIntType::new().min(1).into();
    assert!(codes(&ids, &Value::from(BigInt::from(1))).is_empty());
    assert_eq!(codes(&ids, &Value::from(BigInt::from(0))), ["too_small"]);
}

// ---------------------------------------------------------------------------
// Enums, literals and unions
// ---------------------------------------------------------------------------

#[test]
fn enum_membership() {
    let ty = t().Enum(["RED", "GREEN"]);
    assert!(codes(&ty, &Value::from("RED")).is_empty());
    let err = validate(&ty, &Value::from("PINK")).unwrap_err();
    assert_eq!(
        err.issues[0].code,
        IssueCode::InvalidEnumValue {
            options: vec!["RED".into(), "GREEN".into()]
        }
    );
}

#[test]
fn literals_compare_structurally() {
    assert!(codes(&t().Const("user"), &Value::from("user")).is_empty());
    assert_eq!(codes(&t().Const("user"), &Value::from("admin")), ["invalid_literal"]);
    assert!(codes(&t().Const(1), &Value::from(1.0)).is_empty());
    assert!(codes(&t().nil(), &Value::Null).is_empty());
}

#[test]
fn unions_and_nullable() {
    let ty = t().Nullable(t().num());
    assert!(codes(&ty, &Value::Null).is_empty());
    assert!(codes(&ty, &Value::from(2)).is_empty());
    assert_eq!(codes(&ty, &Value::from("2")), ["invalid_union"]);
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[test]
fn array_bounds_and_element_paths() {
    let ty: TypeNode = ArrType::new(t().num()).min(1).max(2).into();
    assert_eq!(codes(&ty, &Value::from(Vec::<Value>::new())), ["too_small"]);
    assert_eq!(codes(&ty, &Value::from(vec![1, 2, 3])), ["too_big"]);

    let err = validate(&ty, &Value::from(vec![Value::from(1), Value::from("x")])).unwrap_err();
    assert_eq!(err.issues[0].path, vec![PathSegment::Index(1)]);
}

#[test]
fn object_defaults_optionals_and_required() {
    let ty = ObjType::new(vec![
        KeyType::new("a", t().str()).with_default("hi"),
        KeyType::new_opt("b", t().num()),
        KeyType::new("c", t().bool()),
    ]);
    let err = ty.validate(&record! {}).unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.issues[0].code, IssueCode::Required);
    assert_eq!(err.fields(), ["c"]);

    let out = ty.validate(&record! { "c" => true }).unwrap();
    assert_eq!(out, record! { "a" => "hi", "c" => true });
}

#[test]
fn nested_issue_paths() {
    let ty = ObjType::new(vec![KeyType::new(
        "user",
        t().Object(vec![KeyType::new("tags", t().Array(t().str()))]),
    )]);
    let err = ty
        .validate(&record! { "user" => record! { "tags" => vec![Value::from("a"), Value::from(2)] } })
        .unwrap_err();
    assert_eq!(err.issues[0].path_string(), "user.tags.1");
    assert!(err.issues[0].is_for_field("user"));
}

#[test]
fn unknown_keys_are_stripped_or_rejected() {
    let ty = ObjType::new(vec![KeyType::new("a", t().num())]);
    let input = record! { "a" => 1, "zzz" => 2 };
    assert_eq!(ty.validate(&input).unwrap(), record! { "a" => 1 });

    let strict = ValidatorOptions {
        reject_unknown_keys: true,
        ..Default::default()
    };
    let err = ty.validate_with(&input, &strict).unwrap_err();
    assert_eq!(
        err.issues[0].code,
        IssueCode::UnrecognizedKeys {
            keys: vec!["zzz".into()]
        }
    );
}

#[test]
fn abort_early_stops_at_the_first_issue() {
    let ty = ObjType::new(vec![KeyType::new("a", t().num()), KeyType::new("b", t().num())]);
    let input = record! { "a" => "x", "b" => "y" };
    assert_eq!(ty.validate(&input).unwrap_err().issues.len(), 2);

    let options = ValidatorOptions {
        abort_early: true,
        ..Default::default()
    };
    let err = ty.validate_with(&input, &options).unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.fields(), ["a"]);
}

// ---------------------------------------------------------------------------
// Schema composition
// ---------------------------------------------------------------------------

#[test]
fn composed_schemas_validate_like_hand_written_ones() {
    let base = ObjType::new(vec![KeyType::new("id", t().num())]).prop("name", t().str());
    let audit = ObjType::new(vec![]).field(KeyType::new_opt("note", t().str()));
    let composed = base.extend(audit).opt("tag", t().str()).omit("name");

    let names: Vec<&str> = composed.keys.iter().map(|k| k.key.as_str()).collect();
    assert_eq!(names, ["id", "note", "tag"]);
    assert!(composed.get_field("name").is_none());

    let node = TypeNode::from(composed);
    let obj = node.as_obj().unwrap();
    assert_eq!(obj.validate(&record! { "id" => 1 }).unwrap(), record! { "id" => 1 });
    assert!(t().num().as_obj().is_none());

    let err = obj.validate(&record! { "id" => "x", "note" => 3 }).unwrap_err();
    let first = err.first().unwrap();
    assert!(first.is_for_field("id"));
    assert_eq!(first.code.as_str(), "invalid_type");
    assert_eq!(err.issues().len(), 2);
}
