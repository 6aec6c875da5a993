//! Validator output types.

use std::fmt;

use thiserror::Error;

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueCode {
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },
    InvalidLiteral,
    InvalidEnumValue {
        options: Vec<String>,
    },
    InvalidUnion,
    InvalidDate,
    /// String did not match the declared pattern.
    InvalidString,
    NotInteger,
    TooSmall {
        minimum: String,
        inclusive: bool,
    },
    TooBig {
        maximum: String,
        inclusive: bool,
    },
    Required,
    UnrecognizedKeys {
        keys: Vec<String>,
    },
    Custom,
}

impl IssueCode {
    /// Stable machine-readable code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidType { .. } => "invalid_type",
            Self::InvalidLiteral => "invalid_literal",
            Self::InvalidEnumValue { .. } => "invalid_enum_value",
            Self::InvalidUnion => "invalid_union",
            Self::InvalidDate => "invalid_date",
            Self::InvalidString => "invalid_string",
            Self::NotInteger => "not_integer",
            Self::TooSmall { .. } => "too_small",
            Self::TooBig { .. } => "too_big",
            Self::Required => "required",
            Self::UnrecognizedKeys { .. } => "unrecognized_keys",
            Self::Custom => "custom",
        }
    }
}

/// A single rejection at a path inside the validated value.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub path: Vec<PathSegment>,
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    pub fn new(path: Vec<PathSegment>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path,
            code,
            message: message.into(),
        }
    }

    /// Dot-joined path, e.g. `user.tags.1`.
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Whether the issue concerns the named top-level field.
    pub fn is_for_field(&self, field: &str) -> bool {
        matches!(self.path.first(), Some(PathSegment::Key(key)) if key == field)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{} ({})", self.message, self.code.as_str())
        } else {
            write!(
                f,
                "{}: {} ({})",
                self.path_string(),
                self.message,
                self.code.as_str()
            )
        }
    }
}

/// Schema-level rejection of a value, carrying one or more issues.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl ValidationError {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    /// Names of the top-level fields mentioned by any issue, in order.
    pub fn fields(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for issue in &self.issues {
            if let Some(PathSegment::Key(key)) = issue.path.first() {
                if !out.contains(&key.as_str()) {
                    out.push(key);
                }
            }
        }
        out
    }
}

impl From<Issue> for ValidationError {
    fn from(issue: Issue) -> Self {
        Self::new(vec![issue])
    }
}

fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Options for the validator.
#[derive(Debug, Clone, Default)]
pub struct ValidatorOptions {
    /// Stop at the first issue instead of collecting all of them.
    pub abort_early: bool,
    /// Report undeclared object keys instead of stripping them.
    pub reject_unknown_keys: bool,
}
