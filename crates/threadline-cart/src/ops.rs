//! Cart aggregate operations.

use threadline_core::cart::CartItem;
use threadline_core::error::DomainError;
use threadline_core::product::Size;
use threadline_core::repository::{ProductRepository, UserRepository};
use threadline_core::user::User;
use uuid::Uuid;

use crate::resolve::{ResolvedCartItem, resolve_cart};

/// Add-to-cart command.
#[derive(Debug, Clone, Copy)]
pub struct AddItem {
    /// The product to add.
    pub product_id: Uuid,
    /// Chosen size; must be one of the product's offered sizes.
    pub size: Size,
    /// At least 1.
    pub quantity: i32,
}

/// Outcome of an add: anonymous callers get an acknowledgment only,
/// identified callers get their persisted cart back.
#[derive(Debug)]
pub enum AddOutcome {
    /// No identity, nothing persisted.
    Guest,
    /// The cart as saved, product-resolved.
    Persisted(Vec<ResolvedCartItem>),
}

async fn load_user(users: &dyn UserRepository, user_id: Uuid) -> Result<User, DomainError> {
    users
        .find_by_id(user_id)
        .await?
        .ok_or(DomainError::NotFound("User"))
}

/// The user's cart, product-resolved. Lines whose product has since been
/// deleted come back with `product: None`.
///
/// # Errors
///
/// `NotFound` if the user does not exist.
pub async fn get_cart(
    users: &dyn UserRepository,
    products: &dyn ProductRepository,
    user_id: Uuid,
) -> Result<Vec<ResolvedCartItem>, DomainError> {
    let user = load_user(users, user_id).await?;
    resolve_cart(products, &user.cart).await
}

/// Add an item, merging with an existing `(product, size)` line when present.
///
/// The product and size are validated even on the guest path, so anonymous
/// callers get the same rejections as identified ones.
///
/// # Errors
///
/// `NotFound` if the product or user does not exist; `Validation` if the
/// size is not offered or the quantity is below 1.
pub async fn add_item(
    users: &dyn UserRepository,
    products: &dyn ProductRepository,
    user_id: Option<Uuid>,
    command: AddItem,
) -> Result<AddOutcome, DomainError> {
    if command.quantity < 1 {
        return Err(DomainError::validation("Quantity must be at least 1"));
    }

    let product = products
        .find_by_id(command.product_id)
        .await?
        .ok_or(DomainError::NotFound("Product"))?;
    if !product.offers_size(command.size) {
        return Err(DomainError::validation("Selected size not available"));
    }

    let Some(user_id) = user_id else {
        return Ok(AddOutcome::Guest);
    };

    let mut user = load_user(users, user_id).await?;
    match user
        .cart
        .iter_mut()
        .find(|line| line.matches(command.product_id, command.size))
    {
        // Saturate rather than wrap on absurd quantities.
        Some(line) => line.quantity = line.quantity.saturating_add(command.quantity),
        None => user
            .cart
            .push(CartItem::new(command.product_id, command.size, command.quantity)),
    }

    users.save_cart(user_id, &user.cart).await?;
    let resolved = resolve_cart(products, &user.cart).await?;
    Ok(AddOutcome::Persisted(resolved))
}

/// Overwrite a line's quantity.
///
/// # Errors
///
/// `Validation` if the quantity is below 1; `NotFound` if the user or the
/// line does not exist.
pub async fn update_quantity(
    users: &dyn UserRepository,
    products: &dyn ProductRepository,
    user_id: Uuid,
    item_id: Uuid,
    quantity: i32,
) -> Result<Vec<ResolvedCartItem>, DomainError> {
    if quantity < 1 {
        return Err(DomainError::validation("Quantity must be at least 1"));
    }

    let mut user = load_user(users, user_id).await?;
    let line = user
        .cart
        .iter_mut()
        .find(|line| line.id == item_id)
        .ok_or(DomainError::NotFound("Cart item"))?;
    line.quantity = quantity;

    users.save_cart(user_id, &user.cart).await?;
    resolve_cart(products, &user.cart).await
}

/// Delete a line.
///
/// # Errors
///
/// `NotFound` if the user or the line does not exist.
pub async fn remove_item(
    users: &dyn UserRepository,
    products: &dyn ProductRepository,
    user_id: Uuid,
    item_id: Uuid,
) -> Result<Vec<ResolvedCartItem>, DomainError> {
    let mut user = load_user(users, user_id).await?;
    let before = user.cart.len();
    user.cart.retain(|line| line.id != item_id);
    if user.cart.len() == before {
        return Err(DomainError::NotFound("Cart item"));
    }

    users.save_cart(user_id, &user.cart).await?;
    resolve_cart(products, &user.cart).await
}

/// Unconditionally replace the cart with an empty one.
///
/// # Errors
///
/// `NotFound` if the user does not exist.
pub async fn clear(users: &dyn UserRepository, user_id: Uuid) -> Result<(), DomainError> {
    load_user(users, user_id).await?;
    users.save_cart(user_id, &[]).await
}
