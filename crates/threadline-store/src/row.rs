//! Row decoding helpers shared by the repositories.

use sqlx::Row;
use sqlx::postgres::PgRow;
use threadline_core::error::DomainError;

/// Decode a named column, folding sqlx errors into `DomainError::Unexpected`.
pub(crate) fn col<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get::<T, _>(name).map_err(DomainError::unexpected)
}

/// Parse a stored token (category, size, status) back into its enum.
pub(crate) fn token<T>(raw: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(DomainError::unexpected)
}
