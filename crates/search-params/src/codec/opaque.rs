//! Fallback wire form: UTF-8 JSON text in unpadded base64url.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use search_params_type::{parse_iso, validate, BigInt, Record, TypeNode, Value};

use crate::error::CodecErrorKind;

/// URL-safe alphabet; writes no padding and accepts input with or without it.
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub(super) fn encode(value: &Value) -> String {
    let json = value.to_json().to_string();
    BASE64_URL.encode(json.as_bytes())
}

pub(super) fn decode(ty: &TypeNode, raw: &str) -> Result<Value, CodecErrorKind> {
    let bytes = BASE64_URL.decode(raw.trim())?;
    let json: serde_json::Value = serde_json::from_slice(&bytes)?;
    Ok(lift(ty, &json))
}

/// Converts parsed JSON back to a native value, using the type to restore
/// kinds JSON cannot express. Text that does not fit the expected kind is
/// kept as-is and left for the validator to reject.
fn lift(ty: &TypeNode, json: &serde_json::Value) -> Value {
    match (ty, json) {
        (TypeNode::Date(_), serde_json::Value::String(s)) => {
            parse_iso(s).map_or_else(|| Value::String(s.clone()), Value::Date)
        }
        (TypeNode::Num(_), serde_json::Value::String(s)) => match s.as_str() {
            "Infinity" => Value::Number(f64::INFINITY),
            "-Infinity" => Value::Number(f64::NEG_INFINITY),
            _ => Value::String(s.clone()),
        },
        (TypeNode::BigInt(_), serde_json::Value::String(s)) => s
            .parse::<BigInt>()
            .map_or_else(|_| Value::String(s.clone()), Value::BigInt),
        (TypeNode::BigInt(_), serde_json::Value::Number(n)) => n
            .to_string()
            .parse::<BigInt>()
            .map_or_else(|_| Value::from_json(json), Value::BigInt),
        (TypeNode::Arr(t), serde_json::Value::Array(items)) => {
            Value::Array(items.iter().map(|item| lift(&t.type_, item)).collect())
        }
        (TypeNode::Obj(t), serde_json::Value::Object(map)) => {
            let mut out = Record::with_capacity(map.len());
            for (key, item) in map {
                let value = match t.get_field(key) {
                    Some(field) => lift(&field.val, item),
                    None => Value::from_json(item),
                };
                out.insert(key.clone(), value);
            }
            Value::Object(out)
        }
        (TypeNode::Or(t), _) => t
            .types
            .iter()
            .find_map(|member| {
                let value = lift(member, json);
                validate(member, &value).is_ok().then_some(value)
            })
            .unwrap_or_else(|| Value::from_json(json)),
        _ => Value::from_json(json),
    }
}
