//! Durable file-backed store.

use crate::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used inside a data directory.
pub const DEFAULT_FILE_NAME: &str = "snapshop.json";

/// Store persisted as a single JSON object file.
///
/// Nothing is cached: every `get` reads the file and every `set`/`remove`
/// reads, modifies and rewrites it, so several handles on one file see each
/// other's writes. Writes go to a sibling temp file first and are renamed
/// into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

type Entries = BTreeMap<String, String>;

impl FileStore {
    /// Open (or lazily create) a store file.
    ///
    /// A missing file is an empty store; the file is created on first write.
    /// An existing file must parse, so corruption is reported up front.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };
        let entries = store.read_entries()?;
        tracing::debug!(path = %store.path.display(), keys = entries.len(), "opened file store");
        Ok(store)
    }

    /// Open `snapshop.json` inside a data directory.
    pub fn open_in(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Entries::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_entries()?.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open_in(dir.path()).unwrap();
        assert!(store.keys().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open_in(dir.path()).unwrap();
            store.set("snapshop_theme", "dark").unwrap();
            store.set("other", "x").unwrap();
            store.remove("other").unwrap();
        }

        let store = FileStore::open_in(dir.path()).unwrap();
        assert_eq!(store.get("snapshop_theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn test_handles_on_one_file_share_writes() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = FileStore::open_in(dir.path()).unwrap();
        let mut second = FileStore::open_in(dir.path()).unwrap();

        first.set("snapshop_cart", "[]").unwrap();
        second.set("snapshop_users", "[]").unwrap();

        assert_eq!(second.get("snapshop_cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(first.keys().unwrap(), vec!["snapshop_cart", "snapshop_users"]);
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::open_in(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join(DEFAULT_FILE_NAME).exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_file_is_a_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open_in(dir.path()).unwrap();
        store.set("snapshop_cart", "[]").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("snapshop_cart").map(String::as_str), Some("[]"));
    }
}
