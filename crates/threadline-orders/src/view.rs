//! Order views — orders with user and product details expanded.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use threadline_core::error::DomainError;
use threadline_core::order::{Order, OrderStatus};
use threadline_core::product::{Product, Size};
use threadline_core::repository::ProductRepository;
use threadline_core::user::User;
use uuid::Uuid;

/// The owning user, trimmed to what order responses expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// An order line snapshot with the current product record expanded.
/// `product` is `None` when the product has been deleted since checkout;
/// the snapshot fields stay authoritative either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemView {
    pub product_id: Uuid,
    pub product: Option<Product>,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub size: Size,
}

/// A fully expanded order as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: Uuid,
    pub user: OwnerSummary,
    pub items: Vec<OrderItemView>,
    pub total_price: Decimal,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Expand a batch of orders owned by `user`, with a single catalog lookup
/// for all referenced products.
///
/// # Errors
///
/// `Unexpected` on datastore failure.
pub(crate) async fn expand_orders(
    products: &dyn ProductRepository,
    user: &User,
    orders: Vec<Order>,
) -> Result<Vec<OrderView>, DomainError> {
    let ids: Vec<Uuid> = orders
        .iter()
        .flat_map(|order| order.items.iter().map(|item| item.product_id))
        .collect();
    let records = products.find_by_ids(&ids).await?;

    let owner = OwnerSummary::from(user);
    Ok(orders
        .into_iter()
        .map(|order| OrderView {
            id: order.id,
            user: owner.clone(),
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemView {
                    product: records.iter().find(|p| p.id == item.product_id).cloned(),
                    product_id: item.product_id,
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                    size: item.size,
                })
                .collect(),
            total_price: order.total_price,
            order_date: order.order_date,
            status: order.status,
        })
        .collect())
}

/// Expand a single order.
///
/// # Errors
///
/// `Unexpected` on datastore failure.
pub(crate) async fn expand_order(
    products: &dyn ProductRepository,
    user: &User,
    order: Order,
) -> Result<OrderView, DomainError> {
    let mut views = expand_orders(products, user, vec![order]).await?;
    views
        .pop()
        .ok_or_else(|| DomainError::unexpected("order expansion produced no view"))
}
