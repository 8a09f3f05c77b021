//! Error types for tabdb

use thiserror::Error;

/// Result type alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Error types for adapter operations
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Transaction misuse: begin while active, or commit/rollback while inactive
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Opaque failure reported by the SQL executor (constraint violation,
    /// connectivity loss, ...). Never interpreted or retried by this layer.
    #[error("Executor error: {0}")]
    Executor(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AdapterError {
    /// Create a transaction misuse error
    pub fn transaction(message: impl Into<String>) -> Self {
        Self::Transaction(message.into())
    }

    /// Create an executor passthrough error
    pub fn executor(message: impl Into<String>) -> Self {
        Self::Executor(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a transaction misuse error
    pub fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction(_))
    }

    /// Check if this is an executor failure
    pub fn is_executor(&self) -> bool {
        matches!(self, Self::Executor(_))
    }
}
