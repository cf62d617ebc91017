//! Checkout module.
//!
//! Contains the checkout form fields, their validation, and the order
//! snapshot produced by a successful submission.

mod fields;
mod order;
mod validate;

pub use fields::{CheckoutField, CheckoutFields};
pub use order::Order;
pub use validate::validate;
