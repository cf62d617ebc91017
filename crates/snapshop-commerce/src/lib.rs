//! Storefront domain types and logic for SnapShop.
//!
//! This crate holds everything the storefront needs that is independent of
//! persistence and presentation:
//!
//! - **Catalog**: the fixed product list and its categories
//! - **Cart**: cart lines with merge-on-duplicate, totals, order pricing
//! - **Search**: category filter plus free-text query over the catalog
//! - **Checkout**: field validation and the simulated order snapshot
//!
//! # Example
//!
//! ```rust
//! use snapshop_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let mut cart = Cart::new();
//! cart.add(&catalog, ProductId::new(1)).unwrap();
//! cart.add(&catalog, ProductId::new(1)).unwrap();
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().unwrap().amount, 24998);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod validation;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::validation::FieldErrors;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartChange, CartLine, CartPricing, ShippingPolicy};

    // Checkout
    pub use crate::checkout::{CheckoutField, CheckoutFields, Order};

    // Search
    pub use crate::search::{CategoryFilter, FilterState};
}
