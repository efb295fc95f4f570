//! `PostgreSQL` implementation of the `OrderRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use uuid::Uuid;

use threadline_core::error::DomainError;
use threadline_core::order::{Order, OrderItem};
use threadline_core::repository::OrderRepository;

use crate::row::{col, token};

/// PostgreSQL-backed order repository. Line-item snapshots are stored as a
/// JSONB document and never rewritten.
#[derive(Debug, Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Creates a new `PgOrderRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_from_row(row: &PgRow) -> Result<Order, DomainError> {
    let Json(items): Json<Vec<OrderItem>> = col(row, "items")?;
    let status: String = col(row, "status")?;
    Ok(Order {
        id: col(row, "id")?,
        user_id: col(row, "user_id")?,
        items,
        total_price: col(row, "total_price")?,
        order_date: col(row, "order_date")?,
        status: token(&status)?,
    })
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn insert(&self, order: &Order) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO orders (id, user_id, items, total_price, order_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(order.id)
        .bind(order.user_id)
        .bind(Json(&order.items))
        .bind(order.total_price)
        .bind(order.order_date)
        .bind(order.status.to_string())
        .execute(&self.pool)
        .await
        .map_err(DomainError::unexpected)?;
        Ok(())
    }

    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_id, items, total_price, order_date, status \
             FROM orders WHERE id = $1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::unexpected)?;
        row.as_ref().map(order_from_row).transpose()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, user_id, items, total_price, order_date, status \
             FROM orders WHERE user_id = $1 ORDER BY order_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::unexpected)?;
        rows.iter().map(order_from_row).collect()
    }
}
