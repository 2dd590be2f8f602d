//! Cross-cutting error types.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. The web crate folds all of them into its
//! response-level `AppError`.

use thiserror::Error;

/// Errors raised by validation and authorization in `safe-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required submission field was missing or blank.
    #[error("Validation error: required field '{field}' is empty")]
    MissingField { field: &'static str },

    /// The admin token was absent, mismatched, or no secret is configured.
    #[error("Authorization failed")]
    Unauthorized,

    /// A record identifier was missing or not an integer.
    #[error("Invalid record id: {0:?}")]
    InvalidRecordId(String),
}
