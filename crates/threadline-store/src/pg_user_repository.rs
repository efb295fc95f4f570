//! `PostgreSQL` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use uuid::Uuid;

use threadline_core::cart::CartItem;
use threadline_core::error::DomainError;
use threadline_core::repository::UserRepository;
use threadline_core::user::User;

use crate::row::col;

/// PostgreSQL-backed user repository.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Creates a new `PgUserRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> Result<User, DomainError> {
    let Json(cart): Json<Vec<CartItem>> = col(row, "cart")?;
    Ok(User {
        id: col(row, "id")?,
        name: col(row, "name")?,
        email: col(row, "email")?,
        cart,
    })
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, email, cart FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DomainError::unexpected)?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn save_cart(&self, user_id: Uuid, cart: &[CartItem]) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET cart = $2 WHERE id = $1")
            .bind(user_id)
            .bind(Json(cart))
            .execute(&self.pool)
            .await
            .map_err(DomainError::unexpected)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("User"));
        }
        Ok(())
    }
}
