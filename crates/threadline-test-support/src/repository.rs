//! In-memory repositories — mock persistence for tests.
//!
//! Each repository holds its records behind a `Mutex` and supports targeted
//! fault injection so tests can exercise infrastructure-failure paths,
//! including the non-transactional checkout window.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use threadline_core::cart::CartItem;
use threadline_core::error::DomainError;
use threadline_core::order::Order;
use threadline_core::product::Product;
use threadline_core::repository::{
    OrderRepository, PageRequest, ProductFilter, ProductRepository, UserRepository,
};
use threadline_core::user::User;
use uuid::Uuid;

fn injected() -> DomainError {
    DomainError::Unexpected("injected datastore failure".to_string())
}

/// In-memory `UserRepository`.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
    fail_next_save: AtomicBool,
}

impl InMemoryUsers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// Snapshot of a user's current cart, empty if the user is unknown.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn cart_of(&self, user_id: Uuid) -> Vec<CartItem> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.cart.clone())
            .unwrap_or_default()
    }

    /// Make the next `save_cart` call fail with an infrastructure error.
    /// Used to exercise the order-created-but-cart-not-cleared window.
    pub fn fail_next_save_cart(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn save_cart(&self, user_id: Uuid, cart: &[CartItem]) -> Result<(), DomainError> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(injected());
        }
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(DomainError::NotFound("User"))?;
        user.cart = cart.to_vec();
        Ok(())
    }
}

/// In-memory `ProductRepository`. Search applies `ProductFilter::matches`
/// and sorts by creation time descending, mirroring the SQL implementation.
#[derive(Debug, Default)]
pub struct InMemoryProducts {
    products: Mutex<Vec<Product>>,
    fail_all: AtomicBool,
}

impl InMemoryProducts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn insert(&self, product: Product) {
        self.products.lock().unwrap().push(product);
    }

    /// Number of products currently stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every subsequent call fail with an infrastructure error.
    pub fn fail_all(&self) {
        self.fail_all.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(injected());
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, DomainError> {
        self.check()?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == product_id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        self.check()?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<(Vec<Product>, u64), DomainError> {
        self.check()?;
        let mut matches: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as u64;
        let slice = matches
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit as usize)
            .collect();
        Ok((slice, total))
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        self.check()?;
        let mut products = self.products.lock().unwrap();
        let removed = products.len() as u64;
        products.clear();
        Ok(removed)
    }

    async fn insert_many(&self, batch: &[Product]) -> Result<(), DomainError> {
        self.check()?;
        self.products.lock().unwrap().extend_from_slice(batch);
        Ok(())
    }
}

/// In-memory `OrderRepository`.
#[derive(Debug, Default)]
pub struct InMemoryOrders {
    orders: Mutex<Vec<Order>>,
    fail_next_insert: AtomicBool,
}

impl InMemoryOrders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored order, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn all(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    /// Make the next `insert` call fail with an infrastructure error.
    pub fn fail_next_insert(&self) {
        self.fail_next_insert.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn insert(&self, order: &Order) -> Result<(), DomainError> {
        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(injected());
        }
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, DomainError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == order_id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, DomainError> {
        let mut orders: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }
}
