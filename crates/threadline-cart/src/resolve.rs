//! Cart resolution — joining line items with their product records.

use serde::Serialize;
use threadline_core::cart::CartItem;
use threadline_core::error::DomainError;
use threadline_core::product::{Product, Size};
use threadline_core::repository::ProductRepository;
use uuid::Uuid;

/// A cart line with its product record expanded. `product` is `None` when
/// the product has been deleted since the line was added (the demo seed
/// wipes the catalog); the line itself stays addressable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCartItem {
    /// The line identifier, for update/remove addressing.
    pub id: Uuid,
    /// The current product record, if it still exists.
    pub product: Option<Product>,
    /// Line quantity.
    pub quantity: i32,
    /// Chosen size.
    pub size: Size,
}

/// Expand each line's product reference into the full product record.
///
/// Lines referencing a since-deleted product resolve with `product: None`
/// rather than failing — a product is only guaranteed to exist at the time
/// of addition, and a stale line must remain readable and removable.
///
/// # Errors
///
/// `Unexpected` on datastore failure.
pub async fn resolve_cart(
    products: &dyn ProductRepository,
    cart: &[CartItem],
) -> Result<Vec<ResolvedCartItem>, DomainError> {
    let ids: Vec<Uuid> = cart.iter().map(|line| line.product_id).collect();
    let records = products.find_by_ids(&ids).await?;

    Ok(cart
        .iter()
        .map(|line| ResolvedCartItem {
            id: line.id,
            product: records.iter().find(|p| p.id == line.product_id).cloned(),
            quantity: line.quantity,
            size: line.size,
        })
        .collect())
}
