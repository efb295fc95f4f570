//! Threadline Store — `PostgreSQL` implementations of the repository traits.
//!
//! Carts and order line-item snapshots are stored as JSONB documents; every
//! cart mutation rewrites the whole column, so concurrent writers race and
//! the last write wins. Schema lives in the workspace `migrations/` directory.

mod pg_order_repository;
mod pg_product_repository;
mod pg_user_repository;
mod row;

pub use pg_order_repository::PgOrderRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_user_repository::PgUserRepository;
