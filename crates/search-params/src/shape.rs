//! Shape builder: schema-directed walk between [`SearchParams`] and a
//! loosely-typed [`Record`].
//!
//! Building never validates; the result only has the right shape (one value
//! per scalar field, a sequence per array field) for the validator to check.

use search_params_type::{deep_equal, KeyType, ObjType, Record, Value};
use tracing::trace;

use crate::codec::{self, FieldKind};
use crate::error::CodecError;
use crate::params::SearchParams;

/// Builds a candidate record from `params`, seeded with `defaults`.
///
/// Only fields declared by the schema are looked up. A scalar field takes
/// the last occurrence of its key; an array field takes every occurrence in
/// order. A field whose key does not occur keeps its default, if any.
///
/// Fails with the first codec error in schema key order.
pub fn build(
    schema: &ObjType,
    params: &SearchParams,
    defaults: Option<&Record>,
) -> Result<Record, CodecError> {
    let (record, errors) = build_all(schema, params, defaults);
    match errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(record),
    }
}

/// Like [`build`], but decodes every field and reports all codec errors.
/// Failed fields are left at their default.
pub(crate) fn build_all(
    schema: &ObjType,
    params: &SearchParams,
    defaults: Option<&Record>,
) -> (Record, Vec<CodecError>) {
    let mut record = defaults.cloned().unwrap_or_default();
    let mut errors = Vec::new();
    for key in &schema.keys {
        match decode_field(key, params) {
            Ok(Some(value)) => {
                record.insert(key.key.clone(), value);
            }
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
    }
    trace!(fields = record.len(), errors = errors.len(), "built search params shape");
    (record, errors)
}

/// Decodes the wire values of one field; `None` when its key is absent.
pub fn decode_field(key: &KeyType, params: &SearchParams) -> Result<Option<Value>, CodecError> {
    let raw = params.get_all(&key.key);
    let Some(last) = raw.last() else {
        return Ok(None);
    };
    let value = match FieldKind::of(&key.val) {
        FieldKind::Array(elem) => {
            let mut items = Vec::with_capacity(raw.len());
            for (index, item) in raw.iter().enumerate() {
                let value = codec::decode(elem, item)
                    .map_err(|kind| CodecError::new(&key.key, kind).at(index))?;
                items.push(value);
            }
            Value::Array(items)
        }
        _ => codec::decode(&key.val, last).map_err(|kind| CodecError::new(&key.key, kind))?,
    };
    Ok(Some(value))
}

/// Flattens a record into search params, in the record's key order.
///
/// A field equal (by [`deep_equal`]) to its baseline is omitted. The baseline
/// is the entry in `defaults` when present, otherwise the schema field's
/// declared default. Array fields append one pair per element. Keys the
/// schema does not declare are written in their plain text form.
///
/// The record must already satisfy the schema; this is not re-checked.
pub fn flatten(schema: &ObjType, record: &Record, defaults: Option<&Record>) -> SearchParams {
    let mut params = SearchParams::new();
    for (name, value) in record {
        let field = schema.get_field(name);
        let baseline = defaults
            .and_then(|d| d.get(name))
            .or_else(|| field.and_then(|f| f.default.as_ref()));
        if baseline.is_some_and(|b| deep_equal(value, b)) {
            continue;
        }
        let Some(field) = field else {
            params.append(name, value.to_string());
            continue;
        };
        match (FieldKind::of(&field.val), value) {
            (FieldKind::Array(elem), Value::Array(items)) => {
                for item in items {
                    params.append(name, codec::encode(elem, item));
                }
            }
            (FieldKind::Array(elem), single) => params.append(name, codec::encode(elem, single)),
            _ => params.append(name, codec::encode(&field.val, value)),
        }
    }
    params
}
