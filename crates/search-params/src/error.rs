//! Error types for search-params encoding and decoding.

use search_params_type::{Issue, IssueCode, PathSegment, ValidationError};
use thiserror::Error;

/// Why a single wire string could not become a native value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecErrorKind {
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("invalid date `{0}`")]
    InvalidDate(String),
    #[error("invalid bigint `{0}`")]
    InvalidBigInt(String),
    #[error("invalid base64url payload: {0}")]
    InvalidBase64(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),
}

impl From<base64::DecodeError> for CodecErrorKind {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidBase64(err.to_string())
    }
}

impl From<serde_json::Error> for CodecErrorKind {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

/// A field's wire value could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot decode field `{field}`{}: {kind}", index_suffix(.index))]
pub struct CodecError {
    pub field: String,
    /// Element position for array fields.
    pub index: Option<usize>,
    pub kind: CodecErrorKind,
}

impl CodecError {
    pub fn new(field: impl Into<String>, kind: CodecErrorKind) -> Self {
        Self {
            field: field.into(),
            index: None,
            kind,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Restates the failure as a validation issue on the field's path.
    pub fn to_issue(&self) -> Issue {
        let mut path = vec![PathSegment::Key(self.field.clone())];
        if let Some(index) = self.index {
            path.push(PathSegment::Index(index));
        }
        let code = match &self.kind {
            CodecErrorKind::InvalidNumber(_) => IssueCode::InvalidType {
                expected: "number",
                received: "string",
            },
            CodecErrorKind::InvalidBigInt(_) => IssueCode::InvalidType {
                expected: "bigint",
                received: "string",
            },
            CodecErrorKind::InvalidDate(_) => IssueCode::InvalidDate,
            CodecErrorKind::InvalidBase64(_) | CodecErrorKind::InvalidJson(_) => IssueCode::Custom,
        };
        Issue::new(path, code, self.kind.to_string())
    }
}

impl From<CodecError> for ValidationError {
    fn from(err: CodecError) -> Self {
        ValidationError::new(vec![err.to_issue()])
    }
}

fn index_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}

/// Failure of a strict decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Folds either failure into a [`ValidationError`].
    pub fn into_validation(self) -> ValidationError {
        match self {
            Self::Codec(err) => err.into(),
            Self::Validation(err) => err,
        }
    }
}

impl From<Error> for ValidationError {
    fn from(err: Error) -> Self {
        err.into_validation()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
