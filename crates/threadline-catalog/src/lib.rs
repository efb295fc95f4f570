//! Threadline Catalog — product search and demo seeding.

mod demo;

pub use demo::demo_catalog;

use serde::Serialize;
use threadline_core::clock::Clock;
use threadline_core::error::DomainError;
use threadline_core::product::Product;
use threadline_core::repository::{PageRequest, ProductFilter, ProductRepository};
use uuid::Uuid;

/// One page of search results with the numbers the pagination envelope needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// The page slice, newest first.
    pub products: Vec<Product>,
    /// 1-indexed page number served.
    pub page: u32,
    /// Page size used.
    pub limit: u32,
    /// Total matches across all pages.
    pub total: u64,
    /// `ceil(total / limit)`.
    pub pages: u64,
}

/// Filtered, paginated catalog search.
///
/// # Errors
///
/// `Unexpected` on datastore failure.
pub async fn search(
    products: &dyn ProductRepository,
    filter: &ProductFilter,
    page: PageRequest,
) -> Result<SearchPage, DomainError> {
    let (slice, total) = products.search(filter, page).await?;
    Ok(SearchPage {
        products: slice,
        page: page.page,
        limit: page.limit,
        total,
        pages: page.page_count(total),
    })
}

/// Look up a single product.
///
/// # Errors
///
/// `NotFound` if the product does not exist.
pub async fn product_by_id(
    products: &dyn ProductRepository,
    product_id: Uuid,
) -> Result<Product, DomainError> {
    products
        .find_by_id(product_id)
        .await?
        .ok_or(DomainError::NotFound("Product"))
}

/// Wipe the catalog and insert the fixed demo catalog.
///
/// Destructive and unguarded — development bootstrap only. Carts and order
/// snapshots referencing the wiped products are left dangling on purpose
/// (the same behavior the un-seeded system has for any deleted product).
///
/// # Errors
///
/// `Unexpected` on datastore failure.
pub async fn seed_demo_catalog(
    products: &dyn ProductRepository,
    clock: &dyn Clock,
) -> Result<Vec<Product>, DomainError> {
    let removed = products.delete_all().await?;
    let catalog = demo_catalog(clock.now());
    products.insert_many(&catalog).await?;
    tracing::info!(removed, inserted = catalog.len(), "demo catalog seeded");
    Ok(catalog)
}
