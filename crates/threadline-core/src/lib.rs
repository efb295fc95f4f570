//! Threadline Core — shared domain types and abstractions.
//!
//! This crate defines the records the shop operates on and the narrow traits
//! through which the domain crates reach persistence, time, and the
//! confirmation channel. It contains no infrastructure code.

pub mod cart;
pub mod clock;
pub mod error;
pub mod notify;
pub mod order;
pub mod product;
pub mod repository;
pub mod user;
