//! User records.
//!
//! User creation and authentication belong to an external collaborator; this
//! system only reads users and rewrites their embedded carts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartItem;

/// A shop user with their embedded cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Confirmation delivery address.
    pub email: String,
    /// Embedded cart, in insertion order. Empty at creation.
    #[serde(default)]
    pub cart: Vec<CartItem>,
}
