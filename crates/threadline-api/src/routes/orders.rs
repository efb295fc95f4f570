//! Routes for checkout and order history.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use threadline_orders::OrderView;
use tracing::instrument;
use uuid::Uuid;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;

/// POST / — convert the caller's cart into an order.
#[instrument(skip(state), fields(user_id = %user_id))]
async fn checkout(
    State(state): State<AppState>,
    Identity(user_id): Identity,
) -> Result<(StatusCode, Json<Envelope<OrderView>>), ApiError> {
    let view = threadline_orders::place_order(
        &*state.users,
        &*state.products,
        &*state.orders,
        &*state.clock,
        &state.sender,
        user_id,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(view, "Order placed successfully")),
    ))
}

/// GET / — the caller's order history, most recent first.
#[instrument(skip(state), fields(user_id = %user_id))]
async fn list_orders(
    State(state): State<AppState>,
    Identity(user_id): Identity,
) -> Result<Json<Envelope<Vec<OrderView>>>, ApiError> {
    let views = threadline_orders::orders_for_user(
        &*state.users,
        &*state.products,
        &*state.orders,
        user_id,
    )
    .await?;
    Ok(Json(Envelope::data(views)))
}

/// GET /{id} — one order, owner-only.
#[instrument(skip(state), fields(user_id = %user_id))]
async fn get_order(
    State(state): State<AppState>,
    Identity(user_id): Identity,
    Path(order_id): Path<Uuid>,
) -> Result<Json<Envelope<OrderView>>, ApiError> {
    let view = threadline_orders::order_for_user(
        &*state.users,
        &*state.products,
        &*state.orders,
        order_id,
        user_id,
    )
    .await?;
    Ok(Json(Envelope::data(view)))
}

/// Returns the router for orders.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(checkout).get(list_orders))
        .route("/{id}", get(get_order))
}
