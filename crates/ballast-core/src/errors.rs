//! Cross-cutting error types for Ballast.
//!
//! Foreign-key misses are never errors: they degrade to zero-valued
//! aggregates. The variants here cover precondition checks at the boundary of
//! the analysis and failures reported by whatever collaborator supplied the
//! snapshot. Configuration errors live in `ballast-config`.

use thiserror::Error;

/// Errors that can be raised by any Ballast crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A caller-supplied argument is out of its accepted range.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// The snapshot source could not be read.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidArgument`].
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
