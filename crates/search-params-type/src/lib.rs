//! search-params-type - values and schemas for typed search params.
//!
//! Provides the native [`Value`] model (JSON kinds plus bigints and dates),
//! [`deep_equal`], schema [`type_def`] nodes with a [`TypeBuilder`], and the
//! [`validator`] that turns a loosely-typed [`Record`] into a checked one or a
//! structured [`ValidationError`].

pub mod type_def;
pub mod validator;
pub mod value;

pub use type_def::{KeyType, ObjType, TypeBuilder, TypeNode};
pub use validator::{
    validate, validate_with, Issue, IssueCode, PathSegment, ValidationError, ValidatorOptions,
};
pub use value::{deep_equal, format_iso, parse_iso, Record, Value};

pub use num_bigint::BigInt;
pub use time::OffsetDateTime;
