//! Order confirmation seam.
//!
//! Delivery itself (SMTP, push, whatever) is an external collaborator; the
//! domain only hands a rendered-ready summary across this trait. Send
//! failures are reported as values and never abort a checkout.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::order::Order;
use crate::product::Size;

/// A confirmation could not be delivered. Checkout logs and swallows this.
#[derive(Debug, Error)]
#[error("confirmation delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Everything a confirmation message needs about an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// The confirmed order.
    pub order_id: Uuid,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// One entry per order line.
    pub lines: Vec<SummaryLine>,
    /// Order total.
    pub total_price: Decimal,
}

/// One purchased line as it appears in the confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// Product name at checkout time.
    pub name: String,
    /// Chosen size.
    pub size: Size,
    /// Ordered quantity.
    pub quantity: i32,
    /// Unit price at checkout time.
    pub price: Decimal,
}

impl OrderSummary {
    /// Build a summary from a persisted order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.id,
            order_date: order.order_date,
            lines: order
                .items
                .iter()
                .map(|item| SummaryLine {
                    name: item.name.clone(),
                    size: item.size,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            total_price: order.total_price,
        }
    }
}

/// Delivers order confirmations to a destination address.
#[async_trait]
pub trait ConfirmationSender: Send + Sync {
    /// Attempt delivery. A `NotifyError` is a report, not an abort signal.
    async fn send(&self, email: &str, summary: &OrderSummary) -> Result<(), NotifyError>;
}
