//! Domain error model.

use thiserror::Error;

/// Result type used across the valuation and reporting layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The valuation engine itself never produces one of these. They come from the
/// caller-side checks (input validation, reserve table shape, report recipient)
/// that sit in front of it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Human-readable message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::InvariantViolation(m) | Self::InvalidId(m) => m,
        }
    }
}
