//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// The inner strings are user-facing messages; the HTTP layer forwards them
/// verbatim inside the response envelope.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A referenced record does not exist. Carries the record kind
    /// ("User", "Product", "Cart item", "Order").
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Input failed domain validation.
    #[error("{0}")]
    Validation(String),

    /// The caller does not own the referenced record.
    #[error("{0}")]
    Unauthorized(String),

    /// Datastore or other infrastructure failure.
    #[error("{0}")]
    Unexpected(String),
}

impl DomainError {
    /// Validation error from any message-like value.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Infrastructure failure from any displayable error.
    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        Self::Unexpected(err.to_string())
    }
}
