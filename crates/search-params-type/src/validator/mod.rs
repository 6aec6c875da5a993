//! Value validation against type nodes.
//!
//! Validation produces a cleaned copy of the input: undeclared object keys
//! are stripped and absent fields with a declared default are filled in.

mod types;

pub use types::{Issue, IssueCode, PathSegment, ValidationError, ValidatorOptions};

use crate::type_def::{ArrType, KeyType, NumType, ObjType, StrType, TypeNode};
use crate::value::{deep_equal, Record, Value};

/// Validates `value` against `ty` with default options.
pub fn validate(ty: &TypeNode, value: &Value) -> Result<Value, ValidationError> {
    validate_with(ty, value, &ValidatorOptions::default())
}

pub fn validate_with(
    ty: &TypeNode,
    value: &Value,
    options: &ValidatorOptions,
) -> Result<Value, ValidationError> {
    let mut v = Validator::new(options);
    let out = v.node(ty, value);
    v.finish(out)
}

impl ObjType {
    /// Validates a whole record, returning the cleaned record.
    pub fn validate(&self, record: &Record) -> Result<Record, ValidationError> {
        self.validate_with(record, &ValidatorOptions::default())
    }

    pub fn validate_with(
        &self,
        record: &Record,
        options: &ValidatorOptions,
    ) -> Result<Record, ValidationError> {
        let mut v = Validator::new(options);
        let out = v.object(self, record);
        v.finish(out)
    }
}

impl KeyType {
    /// Validates this field in isolation. `None` means the field is absent;
    /// the result is `None` when an optional field stays absent.
    pub fn validate(&self, value: Option<&Value>) -> Result<Option<Value>, ValidationError> {
        self.validate_with(value, &ValidatorOptions::default())
    }

    pub fn validate_with(
        &self,
        value: Option<&Value>,
        options: &ValidatorOptions,
    ) -> Result<Option<Value>, ValidationError> {
        let mut v = Validator::new(options);
        let out = v.key(self, value);
        v.finish(out)
    }
}

struct Validator<'a> {
    options: &'a ValidatorOptions,
    path: Vec<PathSegment>,
    issues: Vec<Issue>,
}

impl<'a> Validator<'a> {
    fn new(options: &'a ValidatorOptions) -> Self {
        Self {
            options,
            path: Vec::new(),
            issues: Vec::new(),
        }
    }

    fn finish<T>(self, out: T) -> Result<T, ValidationError> {
        if self.issues.is_empty() {
            Ok(out)
        } else {
            Err(ValidationError::new(self.issues))
        }
    }

    fn stopped(&self) -> bool {
        self.options.abort_early && !self.issues.is_empty()
    }

    fn report(&mut self, code: IssueCode, message: impl Into<String>) {
        self.issues.push(Issue::new(self.path.clone(), code, message));
    }

    fn invalid_type(&mut self, expected: &'static str, value: &Value) {
        let received = value.kind_name();
        self.report(
            IssueCode::InvalidType { expected, received },
            format!("expected {expected}, received {received}"),
        );
    }

    fn node(&mut self, ty: &TypeNode, value: &Value) -> Value {
        match ty {
            TypeNode::Any(_) => {}
            TypeNode::Bool(_) => {
                if !matches!(value, Value::Bool(_)) {
                    self.invalid_type("boolean", value);
                }
            }
            TypeNode::Num(t) => self.num(t, value),
            TypeNode::Str(t) => self.str(t, value),
            TypeNode::Date(t) => match value {
                Value::Date(d) => {
                    if let Some(min) = t.min.filter(|min| d < min) {
                        self.report(
                            IssueCode::TooSmall {
                                minimum: crate::value::format_iso(min),
                                inclusive: true,
                            },
                            "date is too early",
                        );
                    }
                    if let Some(max) = t.max.filter(|max| d > max) {
                        self.report(
                            IssueCode::TooBig {
                                maximum: crate::value::format_iso(max),
                                inclusive: true,
                            },
                            "date is too late",
                        );
                    }
                }
                _ => self.invalid_type("date", value),
            },
            TypeNode::BigInt(t) => match value {
                Value::BigInt(n) => {
                    if let Some(min) = t.min.as_ref().filter(|min| n < *min) {
                        self.report(
                            IssueCode::TooSmall {
                                minimum: min.to_string(),
                                inclusive: true,
                            },
                            format!("bigint must be greater than or equal to {min}"),
                        );
                    }
                    if let Some(max) = t.max.as_ref().filter(|max| n > *max) {
                        self.report(
                            IssueCode::TooBig {
                                maximum: max.to_string(),
                                inclusive: true,
                            },
                            format!("bigint must be less than or equal to {max}"),
                        );
                    }
                }
                _ => self.invalid_type("bigint", value),
            },
            TypeNode::Enum(t) => {
                if !value.as_str().is_some_and(|s| t.contains(s)) {
                    self.report(
                        IssueCode::InvalidEnumValue {
                            options: t.values.clone(),
                        },
                        format!("expected one of {}, received {value}", t.values.join(" | ")),
                    );
                }
            }
            TypeNode::Con(t) => {
                if !deep_equal(&t.value, value) {
                    self.report(
                        IssueCode::InvalidLiteral,
                        format!("expected literal {}", t.value),
                    );
                }
            }
            TypeNode::Arr(t) => return self.arr(t, value),
            TypeNode::Obj(t) => {
                return match value {
                    Value::Object(map) => Value::Object(self.object(t, map)),
                    _ => {
                        self.invalid_type("object", value);
                        value.clone()
                    }
                }
            }
            TypeNode::Or(t) => {
                for member in &t.types {
                    let mut sub = Validator::new(self.options);
                    sub.path = self.path.clone();
                    let out = sub.node(member, value);
                    if sub.issues.is_empty() {
                        return out;
                    }
                }
                self.report(IssueCode::InvalidUnion, "no union member matched");
            }
        }
        value.clone()
    }

    fn num(&mut self, t: &NumType, value: &Value) {
        let n = match value {
            Value::Number(n) if !n.is_nan() => *n,
            _ => return self.invalid_type("number", value),
        };
        if t.int && n.fract() != 0.0 {
            self.report(IssueCode::NotInteger, "expected integer, received float");
        }
        if let Some(gt) = t.gt.filter(|gt| n <= *gt) {
            self.report(
                IssueCode::TooSmall {
                    minimum: gt.to_string(),
                    inclusive: false,
                },
                format!("number must be greater than {gt}"),
            );
        }
        if let Some(gte) = t.gte.filter(|gte| n < *gte) {
            self.report(
                IssueCode::TooSmall {
                    minimum: gte.to_string(),
                    inclusive: true,
                },
                format!("number must be greater than or equal to {gte}"),
            );
        }
        if let Some(lt) = t.lt.filter(|lt| n >= *lt) {
            self.report(
                IssueCode::TooBig {
                    maximum: lt.to_string(),
                    inclusive: false,
                },
                format!("number must be less than {lt}"),
            );
        }
        if let Some(lte) = t.lte.filter(|lte| n > *lte) {
            self.report(
                IssueCode::TooBig {
                    maximum: lte.to_string(),
                    inclusive: true,
                },
                format!("number must be less than or equal to {lte}"),
            );
        }
    }

    fn str(&mut self, t: &StrType, value: &Value) {
        let s = match value {
            Value::String(s) => s,
            _ => return self.invalid_type("string", value),
        };
        let len = s.chars().count();
        if let Some(min) = t.min.filter(|min| len < *min) {
            self.report(
                IssueCode::TooSmall {
                    minimum: min.to_string(),
                    inclusive: true,
                },
                format!("string must contain at least {min} character(s)"),
            );
        }
        if let Some(max) = t.max.filter(|max| len > *max) {
            self.report(
                IssueCode::TooBig {
                    maximum: max.to_string(),
                    inclusive: true,
                },
                format!("string must contain at most {max} character(s)"),
            );
        }
        if let Some(re) = t.pattern.as_ref().filter(|re| !re.is_match(s)) {
            self.report(
                IssueCode::InvalidString,
                format!("string does not match /{}/", re.as_str()),
            );
        }
    }

    fn arr(&mut self, t: &ArrType, value: &Value) -> Value {
        let items = match value {
            Value::Array(items) => items,
            _ => {
                self.invalid_type("array", value);
                return value.clone();
            }
        };
        if let Some(min) = t.min.filter(|min| items.len() < *min) {
            self.report(
                IssueCode::TooSmall {
                    minimum: min.to_string(),
                    inclusive: true,
                },
                format!("array must contain at least {min} element(s)"),
            );
        }
        if let Some(max) = t.max.filter(|max| items.len() > *max) {
            self.report(
                IssueCode::TooBig {
                    maximum: max.to_string(),
                    inclusive: true,
                },
                format!("array must contain at most {max} element(s)"),
            );
        }
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if self.stopped() {
                break;
            }
            self.path.push(PathSegment::Index(index));
            out.push(self.node(&t.type_, item));
            self.path.pop();
        }
        Value::Array(out)
    }

    fn object(&mut self, t: &ObjType, map: &Record) -> Record {
        let mut out = Record::with_capacity(t.keys.len());
        for key in &t.keys {
            if self.stopped() {
                return out;
            }
            self.path.push(PathSegment::Key(key.key.clone()));
            let value = self.key(key, map.get(&key.key));
            self.path.pop();
            if let Some(value) = value {
                out.insert(key.key.clone(), value);
            }
        }
        if self.options.reject_unknown_keys {
            let unknown: Vec<String> = map
                .keys()
                .filter(|name| t.get_field(name).is_none())
                .cloned()
                .collect();
            if !unknown.is_empty() {
                let message = format!("unrecognized key(s): {}", unknown.join(", "));
                self.report(IssueCode::UnrecognizedKeys { keys: unknown }, message);
            }
        }
        out
    }

    fn key(&mut self, key: &KeyType, value: Option<&Value>) -> Option<Value> {
        match value {
            Some(value) => Some(self.node(&key.val, value)),
            None => {
                if let Some(default) = &key.default {
                    return Some(default.clone());
                }
                if !key.optional {
                    self.report(IssueCode::Required, "required");
                }
                None
            }
        }
    }
}
