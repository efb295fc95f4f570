//! Cart line items embedded in a user record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::product::Size;

/// One line of a user's cart.
///
/// The `id` is generated at insertion and is the handle update/remove
/// operations address lines by. The merge key for add operations is
/// `(product_id, size)` — exact match on both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Stable line identifier, assigned when the line is first appended.
    pub id: Uuid,
    /// The product this line references. Validated to exist at add time only.
    pub product_id: Uuid,
    /// Always at least 1.
    pub quantity: i32,
    /// Chosen size; validated against the product's sizes at add time only.
    pub size: Size,
}

impl CartItem {
    /// New line with a freshly generated identifier.
    #[must_use]
    pub fn new(product_id: Uuid, size: Size, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            size,
        }
    }

    /// Whether this line matches the merge key `(product_id, size)`.
    #[must_use]
    pub fn matches(&self, product_id: Uuid, size: Size) -> bool {
        self.product_id == product_id && self.size == size
    }
}
