//! Error types for the application layer.

use snapshop_auth::AuthError;
use snapshop_commerce::CommerceError;
use snapshop_store::StoreError;
use thiserror::Error;

/// Errors that can occur while dispatching an action.
///
/// Validation failures are not errors at this layer; they come back in the
/// [`Outcome`](crate::Outcome) and the view.
#[derive(Error, Debug)]
pub enum AppError {
    /// Cart or pricing failure.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Account or session backend failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
