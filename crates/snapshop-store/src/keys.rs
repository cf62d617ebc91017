//! Storage keys and scopes.
//!
//! Key names keep the `snapshop_` prefix so a data file lines up with what
//! the browser storefront writes to its local storage.

use crate::{KeyValueStore, MemoryStore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registered accounts (JSON array).
pub const USERS: &str = "snapshop_users";
/// Cart lines (JSON array).
pub const CART: &str = "snapshop_cart";
/// Login session (JSON object), in either scope.
pub const AUTH: &str = "snapshop_auth";
/// Theme name (bare string).
pub const THEME: &str = "snapshop_theme";

/// Lifetime of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Survives restarts.
    Durable,
    /// Lives as long as the current process.
    Ephemeral,
}

impl Scope {
    /// Lookup order when a value may live in either scope.
    pub const LOOKUP_ORDER: [Scope; 2] = [Scope::Durable, Scope::Ephemeral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Durable => "durable",
            Scope::Ephemeral => "ephemeral",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A durable store paired with an ephemeral one.
#[derive(Debug, Default)]
pub struct Stores<D, E = MemoryStore> {
    pub durable: D,
    pub ephemeral: E,
}

impl<D: KeyValueStore, E: KeyValueStore> Stores<D, E> {
    pub fn new(durable: D, ephemeral: E) -> Self {
        Self { durable, ephemeral }
    }

    /// The store for a scope.
    pub fn scope(&self, scope: Scope) -> &dyn KeyValueStore {
        match scope {
            Scope::Durable => &self.durable,
            Scope::Ephemeral => &self.ephemeral,
        }
    }

    /// The store for a scope, mutably.
    pub fn scope_mut(&mut self, scope: Scope) -> &mut dyn KeyValueStore {
        match scope {
            Scope::Durable => &mut self.durable,
            Scope::Ephemeral => &mut self.ephemeral,
        }
    }
}
