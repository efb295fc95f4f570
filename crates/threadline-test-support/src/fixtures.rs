//! Record fixtures with sensible defaults.

use chrono::Utc;
use rust_decimal::Decimal;
use threadline_core::product::{Category, Product, Size};
use threadline_core::user::User;
use uuid::Uuid;

/// A products fixture: `price` is in cents, offered in S through XL.
#[must_use]
pub fn demo_product(name: &str, price_cents: i64) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("{name} description"),
        price: Decimal::new(price_cents, 2),
        image_url: format!("https://example.test/{}.png", name.replace(' ', "-")),
        category: Category::Men,
        sizes: vec![Size::S, Size::M, Size::L, Size::XL],
        stock: 100,
        created_at: Utc::now(),
    }
}

/// A user fixture with an empty cart.
#[must_use]
pub fn user_named(name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.test", name.to_lowercase()),
        cart: Vec::new(),
    }
}
