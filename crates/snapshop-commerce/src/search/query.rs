//! Filter state and the visible-products query.

use crate::catalog::{Catalog, Product};
use crate::search::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Category filter plus free-text query. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Category filter.
    pub category: CategoryFilter,
    /// Free-text query, matched as typed.
    pub query: String,
}

impl FilterState {
    /// Everything visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Check whether a product is visible under this filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product) && self.matches_query(product, &self.query.to_lowercase())
    }

    /// Products visible under this filter, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let needle = self.query.to_lowercase();
        catalog
            .products()
            .iter()
            .filter(|p| self.category.matches(p) && self.matches_query(p, &needle))
            .collect()
    }

    /// Whether this filter shows the whole catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.query.is_empty()
    }

    fn matches_query(&self, product: &Product, needle_lower: &str) -> bool {
        needle_lower.is_empty() || product.mentions(needle_lower)
    }
}

/// Products visible under `filter`, in catalog order.
///
/// An empty result is a valid state, not an error.
pub fn visible_products<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<&'a Product> {
    filter.apply(catalog)
}
