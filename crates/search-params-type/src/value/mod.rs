//! Native value model shared by the schema and the search-params codec.
//!
//! A [`Value`] is what a decoded record holds: the JSON kinds plus
//! arbitrary-precision integers and UTC instants, which have no faithful JSON
//! counterpart.

mod date;
mod deep_equal;
mod json;

pub use date::{format_iso, parse_iso};
pub use deep_equal::deep_equal;

use std::fmt;

use indexmap::IndexMap;
use num_bigint::BigInt;
use time::OffsetDateTime;

/// Insertion-ordered mapping from field name to value.
pub type Record = IndexMap<String, Value>;

/// A native, schema-typed value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    Date(OffsetDateTime),
    String(String),
    Array(Vec<Value>),
    Object(Record),
}

impl Value {
    /// Short name of the value's kind, as reported in validation issues.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(n) if n.is_nan() => "nan",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::Date(_) => "date",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Self::BigInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<OffsetDateTime> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key when the value is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

/// Plain textual form: strings verbatim, scalars in their canonical text,
/// containers as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_nan() => f.write_str("NaN"),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::Date(d) => f.write_str(&format_iso(*d)),
            Self::String(s) => f.write_str(s),
            Self::Array(_) | Self::Object(_) => write!(f, "{}", self.to_json()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Self::BigInt(n)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(d: OffsetDateTime) -> Self {
        Self::Date(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Record> for Value {
    fn from(map: Record) -> Self {
        Self::Object(map)
    }
}

/// Builds a [`Record`] from `key => value` pairs.
///
/// ```
/// use search_params_type::{record, Value};
///
/// let r = record! { "name" => "Ada", "age" => 36 };
/// assert_eq!(r["age"], Value::Number(36.0));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        record
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::Number(f64::NAN).kind_name(), "nan");
        assert_eq!(Value::from(BigInt::from(1)).kind_name(), "bigint");
        assert_eq!(Value::from(vec!["a"]).kind_name(), "array");
    }

    #[test]
    fn display_plain_forms() {
        assert_eq!(Value::from("a b").to_string(), "a b");
        assert_eq!(Value::from(30).to_string(), "30");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(
            Value::from(datetime!(2023-06-15 12:00 UTC)).to_string(),
            "2023-06-15T12:00:00.000Z"
        );
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1,2]");
    }

    #[test]
    fn record_macro_preserves_order() {
        let r = record! { "b" => 1, "a" => "x" };
        let keys: Vec<&str> = r.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert!(record! {}.is_empty());
    }
}
