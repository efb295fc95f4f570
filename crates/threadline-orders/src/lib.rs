//! Threadline Orders — checkout orchestration and order queries.
//!
//! Checkout converts a cart into an immutable order snapshot and empties the
//! cart. The two writes are deliberately independent (see `checkout`); the
//! confirmation send is fire-and-forget.

mod checkout;
mod queries;
mod view;

pub use checkout::place_order;
pub use queries::{order_for_user, orders_for_user};
pub use view::{OrderItemView, OrderView, OwnerSummary};
