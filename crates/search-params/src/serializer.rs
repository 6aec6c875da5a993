//! Serializer facade: decoding with validation, lenient recovery and
//! default-aware encoding.

use std::sync::Arc;

use search_params_type::{ObjType, Record, ValidationError, ValidatorOptions};
use tracing::debug;

use crate::error::Result;
use crate::params::SearchParams;
use crate::shape;

/// Decodes `params` into a record validated against `schema`.
///
/// `defaults` are merged in before validation, so they fill absent fields.
/// The first codec failure (in schema key order) is reported as
/// [`Error::Codec`](crate::Error::Codec); schema rejections as
/// [`Error::Validation`](crate::Error::Validation).
pub fn decode(schema: &ObjType, params: &SearchParams, defaults: Option<&Record>) -> Result<Record> {
    decode_with(schema, params, defaults, &ValidatorOptions::default())
}

/// Like [`decode`], but every failure is reported as a [`ValidationError`].
///
/// Codec failures become issues on the failing field's path
/// (`invalid_type` for numbers and bigints, `invalid_date` for dates,
/// `custom` for undecodable opaque payloads). When any field fails to decode,
/// the error lists every such field and schema validation is not attempted.
pub fn try_decode(
    schema: &ObjType,
    params: &SearchParams,
    defaults: Option<&Record>,
) -> std::result::Result<Record, ValidationError> {
    try_decode_with(schema, params, defaults, &ValidatorOptions::default())
}

/// Decodes `params`, falling back to `defaults` field by field.
///
/// The whole record is decoded and validated first. If that fails, each
/// field is decoded and validated on its own; a field that fails either step
/// takes its value from `defaults` (or stays absent when `defaults` has
/// none). Never fails.
pub fn lenient_decode(schema: &ObjType, params: &SearchParams, defaults: &Record) -> Record {
    lenient_decode_with(schema, params, defaults, &ValidatorOptions::default())
}

/// Encodes a record as search params, omitting fields equal to their
/// default.
///
/// `record` must already be valid for `schema`; see [`shape::flatten`].
pub fn encode(schema: &ObjType, record: &Record, defaults: Option<&Record>) -> SearchParams {
    shape::flatten(schema, record, defaults)
}

fn decode_with(
    schema: &ObjType,
    params: &SearchParams,
    defaults: Option<&Record>,
    options: &ValidatorOptions,
) -> Result<Record> {
    let shape = shape::build(schema, params, defaults)?;
    Ok(schema.validate_with(&shape, options)?)
}

fn try_decode_with(
    schema: &ObjType,
    params: &SearchParams,
    defaults: Option<&Record>,
    options: &ValidatorOptions,
) -> std::result::Result<Record, ValidationError> {
    let (shape, errors) = shape::build_all(schema, params, defaults);
    if !errors.is_empty() {
        let issues = if options.abort_early {
            errors.iter().take(1).map(|e| e.to_issue()).collect()
        } else {
            errors.iter().map(|e| e.to_issue()).collect()
        };
        return Err(ValidationError::new(issues));
    }
    schema.validate_with(&shape, options)
}

fn lenient_decode_with(
    schema: &ObjType,
    params: &SearchParams,
    defaults: &Record,
    options: &ValidatorOptions,
) -> Record {
    let err = match decode_with(schema, params, Some(defaults), options) {
        Ok(record) => return record,
        Err(err) => err,
    };
    debug!(error = %err, "whole-record decode failed, recovering field by field");

    let mut out = Record::with_capacity(schema.keys.len());
    for key in &schema.keys {
        let fallback = defaults.get(&key.key);
        let candidate = match shape::decode_field(key, params) {
            Ok(Some(value)) => Some(value),
            Ok(None) => fallback.cloned(),
            Err(err) => {
                debug!(field = %key.key, error = %err, "using default for undecodable field");
                if let Some(value) = fallback {
                    out.insert(key.key.clone(), value.clone());
                }
                continue;
            }
        };
        match key.validate_with(candidate.as_ref(), options) {
            Ok(Some(value)) => {
                out.insert(key.key.clone(), value);
            }
            Ok(None) => {}
            Err(err) => {
                debug!(field = %key.key, error = %err, "using default for invalid field");
                if let Some(value) = fallback {
                    out.insert(key.key.clone(), value.clone());
                }
            }
        }
    }
    out
}

/// A schema bound together with optional default data and validator options.
///
/// Cloning is cheap; the schema is shared.
///
/// ```
/// use search_params::{record, KeyType, ObjType, SearchParamsSerializer, TypeBuilder};
///
/// let t = TypeBuilder::new();
/// let serializer = SearchParamsSerializer::new(ObjType::new(vec![
///     KeyType::new("name", t.str()),
///     KeyType::new("hobbies", t.Array(t.str())),
/// ]));
///
/// let data = record! { "name" => "John Doe", "hobbies" => vec!["reading", "cycling"] };
/// let params = serializer.encode(&data);
/// assert_eq!(params.to_string(), "name=John+Doe&hobbies=reading&hobbies=cycling");
/// assert_eq!(serializer.decode(&params).unwrap(), data);
/// ```
#[derive(Debug, Clone)]
pub struct SearchParamsSerializer {
    schema: Arc<ObjType>,
    defaults: Option<Record>,
    options: ValidatorOptions,
}

impl SearchParamsSerializer {
    pub fn new(schema: impl Into<Arc<ObjType>>) -> Self {
        Self {
            schema: schema.into(),
            defaults: None,
            options: ValidatorOptions::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: Record) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn schema(&self) -> &ObjType {
        &self.schema
    }

    pub fn defaults(&self) -> Option<&Record> {
        self.defaults.as_ref()
    }

    /// See [`decode`].
    pub fn decode(&self, params: &SearchParams) -> Result<Record> {
        decode_with(&self.schema, params, self.defaults.as_ref(), &self.options)
    }

    /// See [`try_decode`].
    pub fn try_decode(&self, params: &SearchParams) -> std::result::Result<Record, ValidationError> {
        try_decode_with(&self.schema, params, self.defaults.as_ref(), &self.options)
    }

    /// See [`lenient_decode`]. Uses `defaults` when given, otherwise the
    /// bound defaults; with neither, failing fields are left absent.
    pub fn lenient_decode(&self, params: &SearchParams, defaults: Option<&Record>) -> Record {
        let empty = Record::new();
        let defaults = defaults.or(self.defaults.as_ref()).unwrap_or(&empty);
        lenient_decode_with(&self.schema, params, defaults, &self.options)
    }

    /// See [`encode`].
    pub fn encode(&self, record: &Record) -> SearchParams {
        shape::flatten(&self.schema, record, self.defaults.as_ref())
    }
}
