//! Order read paths.

use threadline_core::error::DomainError;
use threadline_core::repository::{OrderRepository, ProductRepository, UserRepository};
use uuid::Uuid;

use crate::view::{OrderView, expand_order, expand_orders};

/// All orders owned by `user_id`, most recent first, fully expanded.
///
/// # Errors
///
/// `NotFound` if the user does not exist.
pub async fn orders_for_user(
    users: &dyn UserRepository,
    products: &dyn ProductRepository,
    orders: &dyn OrderRepository,
    user_id: Uuid,
) -> Result<Vec<OrderView>, DomainError> {
    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or(DomainError::NotFound("User"))?;
    let owned = orders.find_by_user(user_id).await?;
    expand_orders(products, &user, owned).await
}

/// One order, owner-only.
///
/// # Errors
///
/// `NotFound` if the order does not exist; `Unauthorized` when it belongs to
/// a different user — existence is confirmed before ownership, matching the
/// original surface.
pub async fn order_for_user(
    users: &dyn UserRepository,
    products: &dyn ProductRepository,
    orders: &dyn OrderRepository,
    order_id: Uuid,
    requesting_user_id: Uuid,
) -> Result<OrderView, DomainError> {
    let order = orders
        .find_by_id(order_id)
        .await?
        .ok_or(DomainError::NotFound("Order"))?;

    if order.user_id != requesting_user_id {
        return Err(DomainError::Unauthorized(
            "Not authorized to view this order".to_string(),
        ));
    }

    let user = users
        .find_by_id(order.user_id)
        .await?
        .ok_or(DomainError::NotFound("User"))?;
    expand_order(products, &user, order).await
}
