//! The fixed demo catalog used by the seeding endpoint.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use threadline_core::product::{Category, Product, Size};
use uuid::Uuid;

const S_TO_XL: &[Size] = &[Size::S, Size::M, Size::L, Size::XL];
const M_TO_XL: &[Size] = &[Size::M, Size::L, Size::XL];
const S_TO_L: &[Size] = &[Size::S, Size::M, Size::L];

struct Demo {
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    image: &'static str,
    category: Category,
    sizes: &'static [Size],
    stock: i32,
}

impl Demo {
    fn into_product(self, created_at: DateTime<Utc>) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: Decimal::new(self.price_cents, 2),
            image_url: format!("https://via.placeholder.com/400x400?text={}", self.image),
            category: self.category,
            sizes: self.sizes.to_vec(),
            stock: self.stock,
            created_at,
        }
    }
}

/// The fixed 20-item demo catalog, stamped with `created_at`.
#[must_use]
pub fn demo_catalog(created_at: DateTime<Utc>) -> Vec<Product> {
    let demos = [
        Demo {
            name: "Classic Cotton T-Shirt",
            description: "Comfortable cotton t-shirt perfect for everyday wear",
            price_cents: 2999,
            image: "T-Shirt",
            category: Category::Men,
            sizes: S_TO_XL,
            stock: 100,
        },
        Demo {
            name: "Slim Fit Jeans",
            description: "Modern slim fit jeans with stretch comfort",
            price_cents: 7999,
            image: "Jeans",
            category: Category::Men,
            sizes: S_TO_XL,
            stock: 75,
        },
        Demo {
            name: "Leather Jacket",
            description: "Premium leather jacket with classic design",
            price_cents: 29999,
            image: "Jacket",
            category: Category::Men,
            sizes: M_TO_XL,
            stock: 30,
        },
        Demo {
            name: "Summer Dress",
            description: "Light and breezy summer dress",
            price_cents: 8999,
            image: "Dress",
            category: Category::Women,
            sizes: S_TO_XL,
            stock: 60,
        },
        Demo {
            name: "Casual Hoodie",
            description: "Cozy hoodie for casual outings",
            price_cents: 5999,
            image: "Hoodie",
            category: Category::Women,
            sizes: S_TO_XL,
            stock: 90,
        },
        Demo {
            name: "Kids T-Shirt Pack",
            description: "Pack of 3 colorful t-shirts for kids",
            price_cents: 3999,
            image: "Kids+Tshirt",
            category: Category::Kids,
            sizes: S_TO_L,
            stock: 120,
        },
        Demo {
            name: "Kids Denim Shorts",
            description: "Comfortable denim shorts for active kids",
            price_cents: 3499,
            image: "Kids+Shorts",
            category: Category::Kids,
            sizes: S_TO_L,
            stock: 80,
        },
        Demo {
            name: "Wool Sweater",
            description: "Warm wool sweater for cold days",
            price_cents: 11999,
            image: "Sweater",
            category: Category::Men,
            sizes: M_TO_XL,
            stock: 45,
        },
        Demo {
            name: "Yoga Pants",
            description: "Flexible yoga pants for workout",
            price_cents: 4999,
            image: "Yoga+Pants",
            category: Category::Women,
            sizes: S_TO_XL,
            stock: 110,
        },
        Demo {
            name: "Formal Blazer",
            description: "Professional blazer for office wear",
            price_cents: 19999,
            image: "Blazer",
            category: Category::Women,
            sizes: S_TO_XL,
            stock: 40,
        },
        Demo {
            name: "Sport Jacket",
            description: "Lightweight jacket for sports activities",
            price_cents: 8999,
            image: "Sport+Jacket",
            category: Category::Men,
            sizes: S_TO_XL,
            stock: 65,
        },
        Demo {
            name: "Cargo Pants",
            description: "Utility cargo pants with multiple pockets",
            price_cents: 6999,
            image: "Cargo+Pants",
            category: Category::Men,
            sizes: M_TO_XL,
            stock: 55,
        },
        Demo {
            name: "Floral Blouse",
            description: "Elegant floral print blouse",
            price_cents: 5499,
            image: "Blouse",
            category: Category::Women,
            sizes: S_TO_L,
            stock: 70,
        },
        Demo {
            name: "Kids Hoodie",
            description: "Warm and cozy hoodie for kids",
            price_cents: 4499,
            image: "Kids+Hoodie",
            category: Category::Kids,
            sizes: S_TO_L,
            stock: 95,
        },
        Demo {
            name: "Maxi Dress",
            description: "Elegant maxi dress for special occasions",
            price_cents: 13999,
            image: "Maxi+Dress",
            category: Category::Women,
            sizes: S_TO_XL,
            stock: 35,
        },
        Demo {
            name: "Running Shorts",
            description: "Breathable shorts for running",
            price_cents: 3999,
            image: "Running+Shorts",
            category: Category::Men,
            sizes: S_TO_XL,
            stock: 100,
        },
        Demo {
            name: "Kids Dress",
            description: "Pretty dress for special occasions",
            price_cents: 5999,
            image: "Kids+Dress",
            category: Category::Kids,
            sizes: S_TO_L,
            stock: 50,
        },
        Demo {
            name: "Polo Shirt",
            description: "Classic polo shirt for casual wear",
            price_cents: 4499,
            image: "Polo+Shirt",
            category: Category::Men,
            sizes: S_TO_XL,
            stock: 85,
        },
        Demo {
            name: "Cardigan",
            description: "Soft cardigan for layering",
            price_cents: 6499,
            image: "Cardigan",
            category: Category::Women,
            sizes: S_TO_XL,
            stock: 60,
        },
        Demo {
            name: "Kids Jeans",
            description: "Durable jeans for everyday wear",
            price_cents: 4999,
            image: "Kids+Jeans",
            category: Category::Kids,
            sizes: S_TO_L,
            stock: 75,
        },
    ];

    demos
        .into_iter()
        .map(|demo| demo.into_product(created_at))
        .collect()
}
