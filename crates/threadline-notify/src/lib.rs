//! Threadline Notify — order confirmation rendering.
//!
//! Actual delivery (SMTP or otherwise) is an external collaborator behind
//! the `ConfirmationSender` trait. The implementation shipped here renders
//! the confirmation text and emits it through `tracing`, which is what
//! non-production deployments run with.

use std::fmt::Write as _;

use async_trait::async_trait;
use threadline_core::notify::{ConfirmationSender, NotifyError, OrderSummary};
use tracing::info;

/// Render the plain-text confirmation body for an order.
#[must_use]
pub fn render_confirmation(summary: &OrderSummary) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "Thank you for your order!");
    let _ = writeln!(body);
    let _ = writeln!(body, "Order ID: {}", summary.order_id);
    let _ = writeln!(body, "Order Date: {}", summary.order_date.format("%Y-%m-%d"));
    let _ = writeln!(body);
    let _ = writeln!(body, "Items Purchased:");
    for line in &summary.lines {
        let _ = writeln!(
            body,
            "- {} (Size: {}, Qty: {}) - ${}",
            line.name, line.size, line.quantity, line.price
        );
    }
    let _ = writeln!(body);
    let _ = writeln!(body, "Total Price: ${}", summary.total_price);
    let _ = writeln!(body);
    let _ = writeln!(body, "We'll send you another email when your order ships.");
    body
}

/// A sender that logs the rendered confirmation instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSender;

#[async_trait]
impl ConfirmationSender for LogSender {
    async fn send(&self, email: &str, summary: &OrderSummary) -> Result<(), NotifyError> {
        let body = render_confirmation(summary);
        info!(order_id = %summary.order_id, to = email, %body, "order confirmation");
        Ok(())
    }
}
