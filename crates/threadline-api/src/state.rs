//! Shared application state.

use std::sync::Arc;

use threadline_core::clock::Clock;
use threadline_core::notify::ConfirmationSender;
use threadline_core::repository::{OrderRepository, ProductRepository, UserRepository};

/// Application state shared across all request handlers. Everything behind
/// the seams is a trait object so tests can swap in in-memory collaborators.
#[derive(Clone)]
pub struct AppState {
    /// Users and their embedded carts.
    pub users: Arc<dyn UserRepository>,
    /// The product catalog.
    pub products: Arc<dyn ProductRepository>,
    /// Placed orders.
    pub orders: Arc<dyn OrderRepository>,
    /// Time source for order dates.
    pub clock: Arc<dyn Clock>,
    /// Order confirmation channel.
    pub sender: Arc<dyn ConfirmationSender>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        clock: Arc<dyn Clock>,
        sender: Arc<dyn ConfirmationSender>,
    ) -> Self {
        Self {
            users,
            products,
            orders,
            clock,
            sender,
        }
    }
}
