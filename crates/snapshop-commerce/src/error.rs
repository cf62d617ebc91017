//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Lookup misses (an unknown product id, a product not in the cart) are not
/// errors: the cart treats them as no-ops.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Category name not recognized.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Persistence error.
    #[cfg(feature = "storage")]
    #[error("Store error: {0}")]
    Store(#[from] snapshop_store::StoreError),
}
