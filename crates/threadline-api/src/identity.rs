//! Caller identity extraction.
//!
//! Authentication proper is an external collaborator sitting in front of
//! this service; by the time a request arrives, the middleware has resolved
//! the session to a user id carried in the `x-user-id` header. These
//! extractors are the narrow interface to that contract.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use threadline_core::error::DomainError;
use uuid::Uuid;

use crate::error::ApiError;

/// Header the authentication middleware resolves the session into.
pub const USER_ID_HEADER: &str = "x-user-id";

fn not_authorized() -> ApiError {
    ApiError(DomainError::Unauthorized("Not authorized".to_string()))
}

fn header_user_id(parts: &Parts) -> Result<Option<Uuid>, ApiError> {
    let Some(value) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };
    value
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .map(Some)
        .ok_or_else(not_authorized)
}

/// The authenticated caller. Rejects with a 401 envelope when absent.
#[derive(Debug, Clone, Copy)]
pub struct Identity(pub Uuid);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_user_id(parts)?.map(Self).ok_or_else(not_authorized)
    }
}

/// An optional caller identity, for routes that serve anonymous guests. A
/// present-but-malformed header is still rejected.
#[derive(Debug, Clone, Copy)]
pub struct MaybeIdentity(pub Option<Uuid>);

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_user_id(parts).map(Self)
    }
}
