//! Product and category types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
}

impl Category {
    /// Every category, in the order the storefront lists them.
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Fashion, Category::Home];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Home => "home",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electronics" => Ok(Category::Electronics),
            "fashion" => Ok(Category::Fashion),
            "home" => Ok(Category::Home),
            other => Err(CommerceError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the catalog.
///
/// Products are seeded at startup and never change afterwards. The serialized
/// field names match what the browser storefront wrote into its cart entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Product name.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Price in the smallest unit of the catalog currency.
    pub price: i64,
    /// Category the product is listed under.
    pub category: Category,
    /// Icon shown in place of a product image.
    #[serde(rename = "emoji", alias = "icon")]
    pub icon: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        category: Category,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            price,
            category,
            icon: icon.into(),
        }
    }

    /// Price as a money value in the given currency.
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle_lower` must already be lowercased.
    pub(crate) fn mentions(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}
