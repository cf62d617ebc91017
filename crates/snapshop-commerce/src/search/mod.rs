//! Search module.
//!
//! Derives the visible slice of the catalog from a category filter and a
//! free-text query.

mod filter;
mod query;

pub use filter::CategoryFilter;
pub use query::{visible_products, FilterState};
