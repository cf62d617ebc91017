//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an AccountId where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer newtype ID structs.
///
/// The IDs serialize as bare numbers so persisted JSON stays flat.
macro_rules! define_id {
    ($name:ident, $inner:ty) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create a new ID.
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<$inner>().map(Self)
            }
        }
    };
}

define_id!(ProductId, u32);
define_id!(AccountId, i64);
define_id!(OrderId, i64);

impl AccountId {
    /// Generate an ID from the current wall-clock time in milliseconds.
    pub fn generate() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }
}

impl OrderId {
    /// Generate an ID from the current wall-clock time in milliseconds.
    pub fn generate() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_id_parse() {
        let id: ProductId = " 3 ".parse().unwrap();
        assert_eq!(id, ProductId::new(3));
        assert!("three".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(42)), "42");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");

        let id: AccountId = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(id.get(), 1_700_000_000_000);
    }

    #[test]
    fn test_generated_account_id_is_positive() {
        assert!(AccountId::generate().get() > 0);
    }
}
