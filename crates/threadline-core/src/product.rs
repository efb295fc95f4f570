//! Product catalog records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product. Immutable once seeded — there is no update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price, non-negative.
    pub price: Decimal,
    /// Catalog image location.
    pub image_url: String,
    /// Fixed category.
    pub category: Category,
    /// Sizes this product is offered in.
    pub sizes: Vec<Size>,
    /// Units on hand. Tracked but never decremented by this system.
    pub stock: i32,
    /// Catalog insertion time; search results sort on this, newest first.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product is offered in `size`.
    #[must_use]
    pub fn offers_size(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }
}

/// Fixed product category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Kids,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Kids => "Kids",
        };
        f.write_str(s)
    }
}

/// Error for an unrecognized category or size token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token: {0}")]
pub struct UnknownToken(pub String);

impl FromStr for Category {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Men" => Ok(Self::Men),
            "Women" => Ok(Self::Women),
            "Kids" => Ok(Self::Kids),
            other => Err(UnknownToken(other.to_string())),
        }
    }
}

/// Enumerated size tokens. Matching is exact — no case normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    XL,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
        };
        f.write_str(s)
    }
}

impl FromStr for Size {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::XL),
            other => Err(UnknownToken(other.to_string())),
        }
    }
}
