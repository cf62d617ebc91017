//! Shopping cart module.
//!
//! Contains the cart, its lines, order pricing, and (with the `storage`
//! feature) snapshot persistence.

mod cart;
mod pricing;
#[cfg(feature = "storage")]
mod store;

pub use cart::{Cart, CartChange, CartLine};
pub use pricing::{CartPricing, ShippingPolicy};
#[cfg(feature = "storage")]
pub use store::{load_cart, save_cart};
