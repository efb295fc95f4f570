//! Confirmation-sender doubles.

use std::sync::Mutex;

use async_trait::async_trait;
use threadline_core::notify::{ConfirmationSender, NotifyError, OrderSummary};

/// A sender that records every delivery attempt and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(String, OrderSummary)>>,
}

impl RecordingSender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all (destination, summary) pairs handed to `send`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, OrderSummary)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationSender for RecordingSender {
    async fn send(&self, email: &str, summary: &OrderSummary) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), summary.clone()));
        Ok(())
    }
}

/// A sender that always fails. Checkout must swallow this.
#[derive(Debug, Default)]
pub struct FailingSender;

#[async_trait]
impl ConfirmationSender for FailingSender {
    async fn send(&self, _email: &str, _summary: &OrderSummary) -> Result<(), NotifyError> {
        Err(NotifyError("smtp connection refused".to_string()))
    }
}
