//! Product catalog module.
//!
//! Contains the product and category types and the fixed catalog.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::{Category, Product};
