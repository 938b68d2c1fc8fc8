//! Error taxonomy for the blog list core.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by core rules. Each kind maps to one HTTP status at the
/// boundary, so callers match on the variant rather than the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed or missing required field (400).
    #[error("{0}")]
    Validation(String),

    /// Ownership guard denial (401).
    #[error("Not creator of the blog")]
    Authorization,

    /// Target record absent (404).
    #[error("{0} not found")]
    NotFound(String),

    /// Identifier not in a canonical form (400).
    #[error("malformatted id: {0}")]
    InvalidReference(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }

    pub fn blog_not_found() -> Self {
        CoreError::NotFound("blog".to_string())
    }
}
