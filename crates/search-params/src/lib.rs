//! search-params - typed records to and from URL search params.
//!
//! A record schema ([`ObjType`]) drives both directions:
//!
//! - [`encode`] flattens a validated [`Record`] into [`SearchParams`], one
//!   pair per scalar field and one pair per array element, omitting fields
//!   equal to their default.
//! - [`decode`] / [`try_decode`] build a record from search params and
//!   validate it; [`lenient_decode`] falls back to defaults field by field
//!   instead of failing.
//!
//! Strings and enums travel as-is, booleans as `t`/`f`, numbers, bigints and
//! dates in canonical text, and anything else as base64url-encoded JSON.
//!
//! ```
//! use search_params::{decode, encode, record, KeyType, ObjType, SearchParams, TypeBuilder};
//!
//! let t = TypeBuilder::new();
//! let schema = ObjType::new(vec![
//!     KeyType::new("count", t.num()),
//!     KeyType::new("isActive", t.bool()),
//! ]);
//!
//! let params = encode(&schema, &record! { "count" => 42, "isActive" => true }, None);
//! assert_eq!(params.to_string(), "count=42&isActive=t");
//!
//! let back = decode(&schema, &SearchParams::parse("count=42&isActive=true"), None).unwrap();
//! assert_eq!(back, record! { "count" => 42, "isActive" => true });
//! ```

pub mod codec;
pub mod error;
pub mod params;
pub mod serializer;
pub mod shape;

pub use codec::FieldKind;
pub use error::{CodecError, CodecErrorKind, Error, Result};
pub use params::SearchParams;
pub use serializer::{decode, encode, lenient_decode, try_decode, SearchParamsSerializer};

pub use search_params_type::{
    record, BigInt, Issue, IssueCode, KeyType, ObjType, OffsetDateTime, PathSegment, Record,
    TypeBuilder, TypeNode, ValidationError, ValidatorOptions, Value,
};
