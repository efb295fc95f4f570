//! The uniform response envelope.
//!
//! Every response, success or failure, is
//! `{ success, data?, message?, error?, pagination? }`. Callers branch on
//! the `success` flag, not on the status code alone.

use serde::Serialize;

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    /// 1-indexed page number served.
    pub page: u32,
    /// Page size used.
    pub limit: u32,
    /// Total matches across all pages.
    pub total: u64,
    /// `ceil(total / limit)`.
    pub pages: u64,
}

/// The response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> Envelope<T> {
    /// Success with a payload.
    #[must_use]
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            pagination: None,
        }
    }

    /// Success with a payload and a human-readable message.
    #[must_use]
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::data(data)
        }
    }

    /// Success with a message only — the guest-mode acknowledgment shape.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            pagination: None,
        }
    }

    /// Success with a payload and pagination numbers.
    #[must_use]
    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::data(data)
        }
    }
}

impl Envelope<()> {
    /// Failure with a message and optional underlying detail.
    #[must_use]
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error,
            pagination: None,
        }
    }
}
