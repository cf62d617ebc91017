//! Light and dark theme preference.

use serde::{Deserialize, Serialize};
use snapshop_store::{keys, KeyValueStore, StoreError};
use std::fmt;
use std::str::FromStr;

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Load the saved theme, or `fallback` when nothing usable is saved.
    ///
    /// The value is stored as a bare string, not JSON.
    pub fn load<S>(store: &S, fallback: Theme) -> Result<Theme, StoreError>
    where
        S: KeyValueStore + ?Sized,
    {
        match store.get(keys::THEME)? {
            Some(raw) => Ok(raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring unknown saved theme");
                fallback
            })),
            None => Ok(fallback),
        }
    }

    /// Save as the preferred theme.
    pub fn save<S>(self, store: &mut S) -> Result<(), StoreError>
    where
        S: KeyValueStore + ?Sized,
    {
        store.set(keys::THEME, self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshop_store::MemoryStore;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_saved_theme_wins_over_fallback() {
        let mut store = MemoryStore::new();
        assert_eq!(Theme::load(&store, Theme::Dark).unwrap(), Theme::Dark);

        Theme::Light.save(&mut store).unwrap();
        assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
        assert_eq!(Theme::load(&store, Theme::Dark).unwrap(), Theme::Light);
    }

    #[test]
    fn test_unknown_saved_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(keys::THEME, "sepia").unwrap();
        assert_eq!(Theme::load(&store, Theme::Light).unwrap(), Theme::Light);
    }
}
