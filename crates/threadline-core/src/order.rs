//! Order records — immutable cart snapshots with a lifecycle status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::product::{Size, UnknownToken};

/// A placed order. Line items are a snapshot captured at checkout and are
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Denormalized line-item snapshot, in cart order.
    pub items: Vec<OrderItem>,
    /// Always `Σ(line.price × line.quantity)` at creation time.
    pub total_price: Decimal,
    /// Checkout timestamp.
    pub order_date: DateTime<Utc>,
    /// Lifecycle status; every order starts out `Pending`.
    pub status: OrderStatus,
}

/// One line of an order: a copy of the product data as it was at checkout,
/// immune to later product changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The product the snapshot was taken from.
    pub product_id: Uuid,
    /// Product name at checkout time.
    pub name: String,
    /// Unit price at checkout time.
    pub price: Decimal,
    /// Ordered quantity.
    pub quantity: i32,
    /// Chosen size.
    pub size: Size,
}

impl OrderItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order lifecycle states. Only the initial `Pending` state is ever assigned
/// by this system; transitions belong to fulfillment, which is out of scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        };
        f.write_str(s)
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            other => Err(UnknownToken(other.to_string())),
        }
    }
}
