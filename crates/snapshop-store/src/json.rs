//! Typed JSON access on top of a raw key-value store.

use crate::{KeyValueStore, StoreError};
use serde::{de::DeserializeOwned, Serialize};

/// Automatic JSON serialization for any [`KeyValueStore`].
///
/// # Example
///
/// ```rust
/// use snapshop_store::{JsonExt, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set_json("snapshop_theme", &"dark").unwrap();
///
/// let theme: Option<String> = store.get_json("snapshop_theme").unwrap();
/// assert_eq!(theme.as_deref(), Some("dark"));
/// ```
pub trait JsonExt: KeyValueStore {
    /// Get and deserialize a value.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// text does not parse as `T`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a value.
    fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    /// Load a value, falling back to `T::default()` when the key is missing
    /// or its contents are corrupt.
    ///
    /// Backend failures are still returned as errors.
    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        let Some(raw) = self.get(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding corrupt stored value");
                Ok(T::default())
            }
        }
    }
}

impl<S: KeyValueStore + ?Sized> JsonExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: u32,
        title: String,
    }

    #[test]
    fn test_round_trip_struct() {
        let mut store = MemoryStore::new();
        let items = vec![Item {
            id: 1,
            title: "Lamp".into(),
        }];
        store.set_json("items", &items).unwrap();

        let loaded: Vec<Item> = store.get_json("items").unwrap().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_get_json_reports_corrupt_values() {
        let mut store = MemoryStore::new();
        store.set("items", "{not json").unwrap();
        let result: Result<Option<Vec<Item>>, _> = store.get_json("items");
        assert!(matches!(result, Err(StoreError::Serialize(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let mut store = MemoryStore::new();
        let missing: Vec<Item> = store.load_or_default("items").unwrap();
        assert!(missing.is_empty());

        store.set("items", "42").unwrap();
        let corrupt: Vec<Item> = store.load_or_default("items").unwrap();
        assert!(corrupt.is_empty());
    }

    #[test]
    fn test_usable_on_trait_objects() {
        let mut store = MemoryStore::new();
        let dynamic: &mut dyn KeyValueStore = &mut store;
        dynamic.set_json("n", &7u32).unwrap();
        assert_eq!(dynamic.get_json::<u32>("n").unwrap(), Some(7));
    }
}
