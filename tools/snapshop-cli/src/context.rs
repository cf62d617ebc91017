//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use snapshop_app::{AppConfig, AuthScreen, Storefront};
use snapshop_store::{FileStore, MemoryStore, Stores};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory holding the durable store.
    pub data_dir: PathBuf,
}

impl Context {
    /// Load context from a config file and resolve the data directory.
    ///
    /// The data directory is `--data-dir`, then `storage.data_dir`, then
    /// `~/.local/share/snapshop`.
    pub fn load(config_path: Option<&Path>, data_dir: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(path.to_path_buf()))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let data_dir = match (data_dir, &config.storage.data_dir) {
            (Some(dir), _) => resolve(&cwd, dir),
            (None, Some(dir)) => resolve(&cwd, dir),
            (None, None) => dirs_path().join("snapshop"),
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }
        tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            data_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(path = %config_path.display(), "skipping config: {:#}", e),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.config.app
    }

    /// Open a handle on the durable store.
    pub fn open_store(&self) -> Result<FileStore> {
        FileStore::open_in(&self.data_dir)
            .with_context(|| format!("Failed to open data in {}", self.data_dir.display()))
    }

    /// Open the storefront over the durable store.
    pub fn storefront(&self) -> Result<Storefront<FileStore>> {
        Ok(Storefront::open(self.open_store()?, self.app_config().clone())?)
    }

    /// Open the auth screen with a fresh ephemeral store.
    pub fn auth_screen(&self) -> Result<AuthScreen<FileStore, MemoryStore>> {
        let stores = Stores::new(self.open_store()?, MemoryStore::new());
        Ok(AuthScreen::open(stores, self.app_config().clone())?)
    }
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshop_app::StorefrontAction;
    use snapshop_commerce::ProductId;
    use snapshop_store::{keys, KeyValueStore};

    fn quiet() -> Output {
        Output::new(false, true)
    }

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("snapshop.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_data_dir_flag_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "[storage]\ndata_dir = \"/elsewhere\"\n");
        let data = dir.path().join("data");

        let ctx = Context::load(Some(config.as_path()), Some(data.as_path()), quiet()).unwrap();
        assert_eq!(ctx.data_dir, data);
        assert_eq!(ctx.config_path.as_deref(), Some(config.as_path()));
    }

    #[test]
    fn test_config_data_dir_used_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "[storage]\ndata_dir = \"/srv/snapshop\"\n");

        let ctx = Context::load(Some(config.as_path()), None, quiet()).unwrap();
        assert_eq!(ctx.data_dir, PathBuf::from("/srv/snapshop"));
    }

    #[test]
    fn test_screens_share_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "[app]\nshipping_fee = 0\n");
        let ctx = Context::load(Some(config.as_path()), Some(dir.path()), quiet()).unwrap();

        let mut shop = ctx.storefront().unwrap();
        shop.dispatch(StorefrontAction::AddToCart(ProductId::new(6)))
            .unwrap();

        let auth = ctx.auth_screen().unwrap();
        assert!(auth.stores().durable.get(keys::CART).unwrap().is_some());
        assert_eq!(shop.config().shipping_fee, 0);
    }
}
