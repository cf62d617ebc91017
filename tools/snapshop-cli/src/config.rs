//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use snapshop_app::AppConfig;

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["snapshop.toml", ".snapshop.toml", "snapshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront and auth screen settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Where data is kept.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `snapshop.json`. Relative paths are resolved
    /// against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Generate a default snapshop.toml config file.
pub fn generate_default_config() -> String {
    let app = AppConfig::default();
    format!(
        r#"# SnapShop configuration

[app]
shipping_fee = {shipping_fee}
redirect_delay_ms = {redirect_delay_ms}
notice_ms = {notice_ms}
order_notice_ms = {order_notice_ms}
# Theme used until one is saved ("light" or "dark").
# default_theme = "dark"

[storage]
# Defaults to ~/.local/share/snapshop
# data_dir = ".snapshop"
"#,
        shipping_fee = app.shipping_fee,
        redirect_delay_ms = app.redirect_delay_ms,
        notice_ms = app.notice_ms,
        order_notice_ms = app.order_notice_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_app_table() {
        let config: CliConfig = toml::from_str(
            r#"
[app]
shipping_fee = 0
default_theme = "dark"

[storage]
data_dir = "/tmp/shop"
"#,
        )
        .unwrap();

        assert_eq!(config.app.shipping_fee, 0);
        assert_eq!(config.app.notice_ms, 3000);
        assert_eq!(config.app.default_theme, Some(snapshop_app::Theme::Dark));
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/shop")));
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshop.json");
        std::fs::write(&path, r#"{"app": {"shipping_fee": 75}}"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.app.shipping_fee, 75);
        assert_eq!(config.storage, StorageConfig::default());
    }
}
