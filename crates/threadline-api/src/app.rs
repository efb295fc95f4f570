//! Router composition.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Build the full application router over the given state.
///
/// Integration tests call this with in-memory collaborators; the binary
/// calls it with the `PostgreSQL`-backed ones.
pub fn router(state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/cart", routes::cart::router())
        .nest("/api/orders", routes::orders::router())
        .nest("/api/products", routes::products::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
