//! Threadline Cart — the cart aggregate.
//!
//! A cart is an ordered list of line items embedded in its owner's user
//! record. Adds merge on the `(product, size)` key; update and remove address
//! lines by the identifier assigned at insertion. Every mutation rewrites the
//! whole cart document, so concurrent mutations of the same cart race and the
//! last write wins.

mod ops;
mod resolve;

pub use ops::{AddItem, AddOutcome, add_item, clear, get_cart, remove_item, update_quantity};
pub use resolve::{ResolvedCartItem, resolve_cart};
