//! Routes for the caller's cart.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::put};
use serde::Deserialize;
use threadline_cart::{AddItem, AddOutcome, ResolvedCartItem};
use threadline_core::error::DomainError;
use tracing::instrument;
use uuid::Uuid;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::identity::{Identity, MaybeIdentity};
use crate::state::AppState;

/// Request body for POST /.
///
/// `product_id` and `size` are optional so their absence surfaces as the
/// envelope's 400 rather than a bare deserialization rejection; `size` stays
/// a raw token for the same reason.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddToCartRequest {
    /// The product to add.
    pub product_id: Option<Uuid>,
    /// Size token, matched exactly against the product's sizes.
    pub size: Option<String>,
    /// Defaults to 1.
    pub quantity: Option<i32>,
}

/// Request body for PUT /{item_id}.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCartItemRequest {
    /// The new line quantity; must be at least 1.
    pub quantity: Option<i32>,
}

/// GET /
#[instrument(skip(state), fields(user_id = %user_id))]
async fn get_cart(
    State(state): State<AppState>,
    Identity(user_id): Identity,
) -> Result<Json<Envelope<Vec<ResolvedCartItem>>>, ApiError> {
    let cart = threadline_cart::get_cart(&*state.users, &*state.products, user_id).await?;
    Ok(Json(Envelope::data(cart)))
}

/// POST / — add an item; guest mode when the caller is anonymous.
#[instrument(skip(state, request))]
async fn add_to_cart(
    State(state): State<AppState>,
    MaybeIdentity(user_id): MaybeIdentity,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<Envelope<Vec<ResolvedCartItem>>>, ApiError> {
    let (Some(product_id), Some(size)) = (request.product_id, request.size.as_deref()) else {
        return Err(DomainError::validation("Please provide productId and size").into());
    };
    // An unknown token cannot be in any product's size set, so it gets the
    // same rejection a known-but-unoffered size would.
    let size = size
        .parse()
        .map_err(|_| DomainError::validation("Selected size not available"))?;

    let command = AddItem {
        product_id,
        size,
        quantity: request.quantity.unwrap_or(1),
    };
    match threadline_cart::add_item(&*state.users, &*state.products, user_id, command).await? {
        AddOutcome::Guest => Ok(Json(Envelope::message("Item added to cart (guest mode)"))),
        AddOutcome::Persisted(cart) => Ok(Json(Envelope::with_message(cart, "Item added to cart"))),
    }
}

/// PUT /{item_id}
#[instrument(skip(state, request), fields(user_id = %user_id))]
async fn update_cart_item(
    State(state): State<AppState>,
    Identity(user_id): Identity,
    Path(item_id): Path<Uuid>,
    Json(request): Json<UpdateCartItemRequest>,
) -> Result<Json<Envelope<Vec<ResolvedCartItem>>>, ApiError> {
    let quantity = request
        .quantity
        .ok_or_else(|| DomainError::validation("Quantity must be at least 1"))?;
    let cart = threadline_cart::update_quantity(
        &*state.users,
        &*state.products,
        user_id,
        item_id,
        quantity,
    )
    .await?;
    Ok(Json(Envelope::with_message(cart, "Cart updated")))
}

/// DELETE /{item_id}
#[instrument(skip(state), fields(user_id = %user_id))]
async fn remove_cart_item(
    State(state): State<AppState>,
    Identity(user_id): Identity,
    Path(item_id): Path<Uuid>,
) -> Result<Json<Envelope<Vec<ResolvedCartItem>>>, ApiError> {
    let cart =
        threadline_cart::remove_item(&*state.users, &*state.products, user_id, item_id).await?;
    Ok(Json(Envelope::with_message(cart, "Item removed from cart")))
}

/// DELETE /
#[instrument(skip(state), fields(user_id = %user_id))]
async fn clear_cart(
    State(state): State<AppState>,
    Identity(user_id): Identity,
) -> Result<Json<Envelope<Vec<ResolvedCartItem>>>, ApiError> {
    threadline_cart::clear(&*state.users, user_id).await?;
    Ok(Json(Envelope::with_message(Vec::new(), "Cart cleared")))
}

/// Returns the router for the cart.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart).post(add_to_cart).delete(clear_cart))
        .route("/{item_id}", put(update_cart_item).delete(remove_cart_item))
}
