//! Bridge between [`Value`] and `serde_json::Value`.

use serde_json::{Map, Number};

use super::{format_iso, Record, Value};

/// Largest integer magnitude an `f64` represents without gaps (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Value {
    /// Converts to JSON. Dates become ISO strings and bigints decimal
    /// strings. Infinities become the strings `Infinity` and `-Infinity`;
    /// NaN becomes `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::BigInt(n) => serde_json::Value::String(n.to_string()),
            Self::Date(d) => serde_json::Value::String(format_iso(*d)),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Self::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, value) in map {
                    out.insert(key.clone(), value.to_json());
                }
                serde_json::Value::Object(out)
            }
        }
    }

    /// Plain conversion from JSON. Every JSON number becomes a `Number`;
    /// schema-guided lifting of strings into dates or bigints is the
    /// caller's concern.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Array(items) => {
                Self::Array(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), Value::from_json(value)))
                    .collect::<Record>(),
            ),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.is_infinite() {
        return serde_json::Value::String(Value::Number(n).to_string());
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use num_bigint::BigInt;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(Value::from(30).to_json().to_string(), "30");
        assert_eq!(Value::from(-2.5).to_json().to_string(), "-2.5");
        assert_eq!(Value::from(f64::NAN).to_json(), json!(null));
        assert_eq!(Value::from(f64::INFINITY).to_json(), json!("Infinity"));
        assert_eq!(Value::from(f64::NEG_INFINITY).to_json(), json!("-Infinity"));
    }

    #[test]
    fn non_json_kinds_become_strings() {
        let value = Value::from(record! {
            "id" => BigInt::from(9_007_199_254_740_993_i64),
            "at" => datetime!(2023-06-15 12:00 UTC),
        });
        assert_eq!(
            value.to_json(),
            json!({"id": "9007199254740993", "at": "2023-06-15T12:00:00.000Z"})
        );
    }

    #[test]
    fn from_json_keeps_key_order() {
        let value = Value::from_json(&json!({"z": 1, "a": [true, null]}));
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
        assert_eq!(value.get("a"), Some(&Value::from(vec![Value::Bool(true), Value::Null])));
    }
}
