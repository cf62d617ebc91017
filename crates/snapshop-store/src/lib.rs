//! Key-value persistence for SnapShop.
//!
//! Provides a small string-keyed store abstraction with two backends and
//! automatic JSON serialization on top.
//!
//! - [`MemoryStore`]: lives as long as the process (the ephemeral scope)
//! - [`FileStore`]: one JSON object file on disk (the durable scope)
//!
//! # Example
//!
//! ```rust
//! use snapshop_store::{keys, JsonExt, KeyValueStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//!
//! // Store a value
//! store.set_json(keys::USERS, &Vec::<String>::new()).unwrap();
//!
//! // Retrieve a value
//! let users: Option<Vec<String>> = store.get_json(keys::USERS).unwrap();
//! assert_eq!(users, Some(vec![]));
//!
//! // Delete a value
//! store.remove(keys::USERS).unwrap();
//! ```

mod error;
mod file;
mod json;
mod kv;
pub mod keys;

pub use error::StoreError;
pub use file::{FileStore, DEFAULT_FILE_NAME};
pub use json::JsonExt;
pub use keys::{Scope, Stores};
pub use kv::{KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::keys::{self, Scope, Stores};
    pub use crate::{FileStore, JsonExt, KeyValueStore, MemoryStore, StoreError};
}
