//! `PostgreSQL` implementation of the `ProductRepository` trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use threadline_core::error::DomainError;
use threadline_core::product::{Product, Size};
use threadline_core::repository::{PageRequest, ProductFilter, ProductRepository};

use crate::row::{col, token};

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, image_url, category, sizes, stock, created_at";

/// PostgreSQL-backed product repository.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Creates a new `PgProductRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, DomainError> {
    let category: String = col(row, "category")?;
    let sizes: Vec<String> = col(row, "sizes")?;
    Ok(Product {
        id: col(row, "id")?,
        name: col(row, "name")?,
        description: col(row, "description")?,
        price: col(row, "price")?,
        image_url: col(row, "image_url")?,
        category: token(&category)?,
        sizes: sizes
            .iter()
            .map(|s| token::<Size>(s))
            .collect::<Result<_, _>>()?,
        stock: col(row, "stock")?,
        created_at: col(row, "created_at")?,
    })
}

/// Append the filter criteria as `AND` clauses. The semantics mirror
/// `ProductFilter::matches`.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(category) = filter.category {
        builder
            .push(" AND category = ")
            .push_bind(category.to_string());
    }
    if let Some(size) = filter.size {
        builder
            .push(" AND ")
            .push_bind(size.to_string())
            .push(" = ANY(sizes)");
    }
    if let Some(min) = filter.min_price {
        builder.push(" AND price >= ").push_bind(min);
    }
    if let Some(max) = filter.max_price {
        builder.push(" AND price <= ").push_bind(max);
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, DomainError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DomainError::unexpected)?;
        row.as_ref().map(product_from_row).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)");
        let rows = sqlx::query(&sql)
            .bind(ids.to_vec())
            .fetch_all(&self.pool)
            .await
            .map_err(DomainError::unexpected)?;
        rows.iter().map(product_from_row).collect()
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<(Vec<Product>, u64), DomainError> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE TRUE"
        ));
        push_filter(&mut query, filter);
        query
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(i64::from(page.limit))
            .push(" OFFSET ")
            .push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(DomainError::unexpected)?;
        let products = rows
            .iter()
            .map(product_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        let mut count = QueryBuilder::new("SELECT COUNT(*) AS total FROM products WHERE TRUE");
        push_filter(&mut count, filter);
        let total_row = count
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(DomainError::unexpected)?;
        let total: i64 = total_row.try_get("total").map_err(DomainError::unexpected)?;

        Ok((products, u64::try_from(total).unwrap_or(0)))
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(DomainError::unexpected)?;
        Ok(result.rows_affected())
    }

    async fn insert_many(&self, products: &[Product]) -> Result<(), DomainError> {
        for product in products {
            sqlx::query(
                "INSERT INTO products \
                 (id, name, description, price, image_url, category, sizes, stock, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(product.category.to_string())
            .bind(
                product
                    .sizes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            )
            .bind(product.stock)
            .bind(product.created_at)
            .execute(&self.pool)
            .await
            .map_err(DomainError::unexpected)?;
        }
        Ok(())
    }
}
