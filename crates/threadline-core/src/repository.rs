//! Persistence abstractions.
//!
//! The domain crates only ever see these traits; the PostgreSQL
//! implementations live in `threadline-store` and the in-memory ones in
//! `threadline-test-support`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cart::CartItem;
use crate::error::DomainError;
use crate::order::Order;
use crate::product::{Category, Product, Size};
use crate::user::User;

/// Catalog search filter. All criteria are optional and combined with AND.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring over name OR description.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<Category>,
    /// Product must be offered in this size.
    pub size: Option<Size>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
}

impl ProductFilter {
    /// Whether `product` satisfies every set criterion.
    ///
    /// This is the reference semantics; the SQL implementation mirrors it.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        if let Some(category) = self.category
            && product.category != category
        {
            return false;
        }
        if let Some(size) = self.size
            && !product.offers_size(size)
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }
        true
    }
}

/// A 1-indexed page request. `limit` defaults to 10.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// 1-indexed page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl PageRequest {
    /// Default page size when the caller does not ask for one.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Build a page request, clamping page and limit to at least 1.
    #[must_use]
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).max(1),
        }
    }

    /// Number of records to skip.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Total page count for `total` records: `ceil(total / limit)`.
    #[must_use]
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Users and their embedded carts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Load a user by id. `Ok(None)` when absent.
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, DomainError>;

    /// Replace the user's entire cart. Whole-document write: concurrent
    /// read-modify-write cycles race and the last write wins.
    async fn save_cart(&self, user_id: Uuid, cart: &[CartItem]) -> Result<(), DomainError>;
}

/// The product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Load a product by id. `Ok(None)` when absent.
    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Load all products matching `ids`, in any order. Missing ids are
    /// silently absent from the result — resolution decides what that means.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError>;

    /// Filtered, paginated search sorted by creation time descending.
    /// Returns the page slice and the total match count.
    async fn search(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<(Vec<Product>, u64), DomainError>;

    /// Delete every product. Returns the number removed.
    async fn delete_all(&self) -> Result<u64, DomainError>;

    /// Insert a batch of products.
    async fn insert_many(&self, products: &[Product]) -> Result<(), DomainError>;
}

/// Placed orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order.
    async fn insert(&self, order: &Order) -> Result<(), DomainError>;

    /// Load an order by id. `Ok(None)` when absent.
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, DomainError>;

    /// All orders owned by `user_id`, sorted by order date descending.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tee_shirt() -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Classic Cotton T-Shirt".to_string(),
            description: "Comfortable cotton t-shirt perfect for everyday wear".to_string(),
            price: Decimal::new(2999, 2),
            image_url: "https://example.test/tshirt.png".to_string(),
            category: Category::Men,
            sizes: vec![Size::S, Size::M, Size::L, Size::XL],
            stock: 100,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ProductFilter::default().matches(&tee_shirt()));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let filter = ProductFilter {
            search: Some("COTTON".to_string()),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&tee_shirt()));

        let filter = ProductFilter {
            search: Some("everyday wear".to_string()),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&tee_shirt()));

        let filter = ProductFilter {
            search: Some("denim".to_string()),
            ..ProductFilter::default()
        };
        assert!(!filter.matches(&tee_shirt()));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = ProductFilter {
            min_price: Some(Decimal::new(2999, 2)),
            max_price: Some(Decimal::new(2999, 2)),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&tee_shirt()));

        let filter = ProductFilter {
            min_price: Some(Decimal::new(3000, 2)),
            ..ProductFilter::default()
        };
        assert!(!filter.matches(&tee_shirt()));
    }

    #[test]
    fn test_size_filter_requires_membership() {
        let mut product = tee_shirt();
        product.sizes = vec![Size::M, Size::L];

        let filter = ProductFilter {
            size: Some(Size::S),
            ..ProductFilter::default()
        };
        assert!(!filter.matches(&product));

        let filter = ProductFilter {
            size: Some(Size::L),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&product));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = ProductFilter {
            category: Some(Category::Women),
            ..ProductFilter::default()
        };
        assert!(!filter.matches(&tee_shirt()));
    }

    #[test]
    fn test_page_count_is_ceiling_of_total_over_limit() {
        let page = PageRequest::new(Some(1), Some(10));
        assert_eq!(page.page_count(0), 0);
        assert_eq!(page.page_count(10), 1);
        assert_eq!(page.page_count(11), 2);
        assert_eq!(page.page_count(20), 2);
    }

    #[test]
    fn test_page_request_clamps_to_one() {
        let page = PageRequest::new(Some(0), Some(0));
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_offset_skips_earlier_pages() {
        let page = PageRequest::new(Some(3), Some(10));
        assert_eq!(page.offset(), 20);
    }
}
