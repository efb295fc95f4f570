//! Routes for the product catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use rust_decimal::Decimal;
use serde::Deserialize;
use threadline_core::product::{Category, Product, Size};
use threadline_core::repository::{PageRequest, ProductFilter};
use tracing::instrument;
use uuid::Uuid;

use crate::envelope::{Envelope, Pagination};
use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    /// Case-insensitive substring over name or description.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<Category>,
    /// Offered-size membership.
    pub size: Option<Size>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// 1-indexed page, defaults to 1.
    pub page: Option<u32>,
    /// Page size, defaults to 10.
    pub limit: Option<u32>,
}

/// GET / — filtered, paginated search.
#[instrument(skip(state, query))]
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Envelope<Vec<Product>>>, ApiError> {
    let filter = ProductFilter {
        search: query.search,
        category: query.category,
        size: query.size,
        min_price: query.min_price,
        max_price: query.max_price,
    };
    let page = PageRequest::new(query.page, query.limit);

    let results = threadline_catalog::search(&*state.products, &filter, page).await?;
    Ok(Json(Envelope::paginated(
        results.products,
        Pagination {
            page: results.page,
            limit: results.limit,
            total: results.total,
            pages: results.pages,
        },
    )))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = threadline_catalog::product_by_id(&*state.products, product_id).await?;
    Ok(Json(Envelope::data(product)))
}

/// POST /seed — wipe the catalog and insert the fixed demo catalog.
///
/// Unauthenticated and destructive; development bootstrap only.
#[instrument(skip(state))]
async fn seed_products(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Envelope<Vec<Product>>>), ApiError> {
    let products =
        threadline_catalog::seed_demo_catalog(&*state.products, &*state.clock).await?;
    let message = format!("{} demo products created successfully", products.len());
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(products, message)),
    ))
}

/// Returns the router for the product catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/seed", post(seed_products))
        .route("/{id}", get(get_product))
}
