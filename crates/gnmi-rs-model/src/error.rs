//! Error types for model instantiation and catalog loading.

use gnmi_rs_protocol::Status;
use std::fmt;
use thiserror::Error;

/// Errors returned while instantiating a config struct from a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The node factory could not materialize the root node.
    #[error("cannot create root node: {0}")]
    NodeCreationFailed(Status),
    /// The root node does not support validation and typed field access.
    #[error("root node is not a validated config struct")]
    UnexpectedNodeType,
    /// The JSON seed data could not be decoded into the root node.
    #[error("failed to decode config: {0}")]
    DecodeFailed(#[source] UnmarshalError),
    /// The decoded config violates schema constraints.
    #[error("invalid config: {0}")]
    ValidationFailed(#[source] ValidationError),
}

/// Errors returned by JSON unmarshalers.
#[derive(Debug, Error)]
pub enum UnmarshalError {
    /// The payload is not valid JSON for the target type.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    /// The target node is not of the type the unmarshaler decodes into.
    #[error("target node is not a {expected}")]
    TargetMismatch { expected: &'static str },
    /// Unmarshaler-specific failure.
    #[error("{0}")]
    Other(String),
}

/// A single schema constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Schema path of the offending node.
    pub path: String,
    pub message: String,
}

/// Structural validation failure with one or more violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Build an error from a single violation.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation {
                path: path.into(),
                message: message.into(),
            }],
        }
    }

    /// Turn collected violations into a result; empty means valid.
    pub fn check(violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            let path = if violation.path.is_empty() {
                "/"
            } else {
                violation.path.as_str()
            };
            write!(f, "{path}: {}", violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Errors returned while loading or validating a model catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a catalog file failed.
    #[error("failed to read catalog: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing a catalog file failed.
    #[error("failed to parse catalog: {0}")]
    ParseFailed(#[from] json5::Error),
    /// Converting JSON values failed.
    #[error("failed to decode catalog: {0}")]
    DecodeFailed(#[from] serde_json::Error),
    /// A specific field failed validation.
    #[error("invalid catalog at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// Generic validation failure.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}
