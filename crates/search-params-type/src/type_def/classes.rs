//! Schema node classes and their constraint setters.
//!
//! Each struct is one schema node kind together with its constraints.
//! Constraints are set builder-style and checked by the validator.

use num_bigint::BigInt;
use regex::Regex;
use time::OffsetDateTime;

use super::TypeNode;
use crate::value::Value;

// -------------------------------------------------------------------------
// AnyType

/// Accepts every value unchanged.
#[derive(Debug, Clone, Default)]
pub struct AnyType;

impl AnyType {
    pub fn new() -> Self {
        Self
    }
    pub fn kind(&self) -> &'static str {
        "any"
    }
}

// -------------------------------------------------------------------------
// BoolType

#[derive(Debug, Clone, Default)]
pub struct BoolType;

impl BoolType {
    pub fn new() -> Self {
        Self
    }
    pub fn kind(&self) -> &'static str {
        "bool"
    }
}

// -------------------------------------------------------------------------
// NumType

#[derive(Debug, Clone, Default)]
pub struct NumType {
    pub gt: Option<f64>,
    pub gte: Option<f64>,
    pub lt: Option<f64>,
    pub lte: Option<f64>,
    pub int: bool,
}

impl NumType {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn gt(mut self, v: f64) -> Self {
        self.gt = Some(v);
        self
    }
    pub fn gte(mut self, v: f64) -> Self {
        self.gte = Some(v);
        self
    }
    pub fn lt(mut self, v: f64) -> Self {
        self.lt = Some(v);
        self
    }
    pub fn lte(mut self, v: f64) -> Self {
        self.lte = Some(v);
        self
    }
    /// Shorthand for `gte`.
    pub fn min(self, v: f64) -> Self {
        self.gte(v)
    }
    /// Shorthand for `lte`.
    pub fn max(self, v: f64) -> Self {
        self.lte(v)
    }
    pub fn int(mut self) -> Self {
        self.int = true;
        self
    }
    pub fn kind(&self) -> &'static str {
        "num"
    }
}

// -------------------------------------------------------------------------
// StrType

#[derive(Debug, Clone, Default)]
pub struct StrType {
    /// Minimum length in characters.
    pub min: Option<usize>,
    /// Maximum length in characters.
    pub max: Option<usize>,
    pub pattern: Option<Regex>,
}

impl StrType {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn min(mut self, v: usize) -> Self {
        self.min = Some(v);
        self
    }
    pub fn max(mut self, v: usize) -> Self {
        self.max = Some(v);
        self
    }
    pub fn pattern(mut self, re: Regex) -> Self {
        self.pattern = Some(re);
        self
    }
    pub fn kind(&self) -> &'static str {
        "str"
    }
}

// -------------------------------------------------------------------------
// DateType

#[derive(Debug, Clone, Default)]
pub struct DateType {
    pub min: Option<OffsetDateTime>,
    pub max: Option<OffsetDateTime>,
}

impl DateType {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn min(mut self, v: OffsetDateTime) -> Self {
        self.min = Some(v);
        self
    }
    pub fn max(mut self, v: OffsetDateTime) -> Self {
        self.max = Some(v);
        self
    }
    pub fn kind(&self) -> &'static str {
        "date"
    }
}

// -------------------------------------------------------------------------
// BigIntType

#[derive(Debug, Clone, Default)]
pub struct BigIntType {
    pub min: Option<BigInt>,
    pub max: Option<BigInt>,
}

impl BigIntType {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn min(mut self, v: impl Into<BigInt>) -> Self {
        self.min = Some(v.into());
        self
    }
    pub fn max(mut self, v: impl Into<BigInt>) -> Self {
        self.max = Some(v.into());
        self
    }
    pub fn kind(&self) -> &'static str {
        "bigint"
    }
}

// -------------------------------------------------------------------------
// EnumType

/// A closed set of string values.
#[derive(Debug, Clone, Default)]
pub struct EnumType {
    pub values: Vec<String>,
}

impl EnumType {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
    pub fn kind(&self) -> &'static str {
        "enum"
    }
}

// -------------------------------------------------------------------------
// ConType

/// A single literal value.
#[derive(Debug, Clone)]
pub struct ConType {
    pub value: Value,
}

impl ConType {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
    pub fn kind(&self) -> &'static str {
        "con"
    }
}

// -------------------------------------------------------------------------
// ArrType

#[derive(Debug, Clone)]
pub struct ArrType {
    pub type_: Box<TypeNode>,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl ArrType {
    pub fn new(type_: impl Into<TypeNode>) -> Self {
        Self {
            type_: Box::new(type_.into()),
            min: None,
            max: None,
        }
    }
    pub fn min(mut self, v: usize) -> Self {
        self.min = Some(v);
        self
    }
    pub fn max(mut self, v: usize) -> Self {
        self.max = Some(v);
        self
    }
    pub fn kind(&self) -> &'static str {
        "arr"
    }
}

// -------------------------------------------------------------------------
// KeyType

/// One declared field of an object.
#[derive(Debug, Clone)]
pub struct KeyType {
    pub key: String,
    pub val: Box<TypeNode>,
    pub optional: bool,
    /// Substituted when the field is absent.
    pub default: Option<Value>,
}

impl KeyType {
    pub fn new(key: impl Into<String>, val: impl Into<TypeNode>) -> Self {
        Self {
            key: key.into(),
            val: Box::new(val.into()),
            optional: false,
            default: None,
        }
    }
    pub fn new_opt(key: impl Into<String>, val: impl Into<TypeNode>) -> Self {
        Self {
            optional: true,
            ..Self::new(key, val)
        }
    }
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
    pub fn kind(&self) -> &'static str {
        "key"
    }
}

// -------------------------------------------------------------------------
// ObjType

/// An object with a fixed, ordered set of fields. Used as the record schema.
#[derive(Debug, Clone, Default)]
pub struct ObjType {
    pub keys: Vec<KeyType>,
}

impl ObjType {
    pub fn new(keys: Vec<KeyType>) -> Self {
        Self { keys }
    }
    pub fn prop(mut self, key: impl Into<String>, val: impl Into<TypeNode>) -> Self {
        self.keys.push(KeyType::new(key, val));
        self
    }
    pub fn opt(mut self, key: impl Into<String>, val: impl Into<TypeNode>) -> Self {
        self.keys.push(KeyType::new_opt(key, val));
        self
    }
    pub fn field(mut self, key: KeyType) -> Self {
        self.keys.push(key);
        self
    }
    pub fn extend(mut self, other: ObjType) -> Self {
        self.keys.extend(other.keys);
        self
    }
    pub fn omit(mut self, key: &str) -> Self {
        self.keys.retain(|k| k.key != key);
        self
    }
    pub fn get_field(&self, key: &str) -> Option<&KeyType> {
        self.keys.iter().find(|k| k.key == key)
    }
    pub fn kind(&self) -> &'static str {
        "obj"
    }
}

// -------------------------------------------------------------------------
// OrType

/// A union; a value matches when any member accepts it.
#[derive(Debug, Clone, Default)]
pub struct OrType {
    pub types: Vec<TypeNode>,
}

impl OrType {
    pub fn new(types: Vec<TypeNode>) -> Self {
        Self { types }
    }
    pub fn kind(&self) -> &'static str {
        "or"
    }
}
