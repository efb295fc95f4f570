//! Shared test doubles and fixtures for the Threadline shop backend.

mod clock;
mod fixtures;
mod repository;
mod sender;

pub use clock::FixedClock;
pub use fixtures::{demo_product, user_named};
pub use repository::{InMemoryOrders, InMemoryProducts, InMemoryUsers};
pub use sender::{FailingSender, RecordingSender};
