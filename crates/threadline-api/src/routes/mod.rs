//! Route modules, one per resource.

pub mod cart;
pub mod health;
pub mod orders;
pub mod products;
