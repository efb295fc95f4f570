//! Threadline API — the axum HTTP surface over the shop domain.

pub mod app;
pub mod envelope;
pub mod error;
pub mod identity;
pub mod routes;
pub mod state;
