//! Client configuration read from `STOCKROOM_*` environment variables.

use std::path::PathBuf;

use stockroom_core::DomainError;
use stockroom_inventory::{DisplayOptions, SortMode};
use stockroom_storage::{DEFAULT_KEY, default_data_dir};
use thiserror::Error;

pub const ENV_DATA_DIR: &str = "STOCKROOM_DATA_DIR";
pub const ENV_STORAGE_KEY: &str = "STOCKROOM_STORAGE_KEY";
pub const ENV_SORT_MODE: &str = "STOCKROOM_SORT_MODE";
pub const ENV_CURRENCY: &str = "STOCKROOM_CURRENCY";
pub const ENV_LOW_STOCK: &str = "STOCKROOM_LOW_STOCK";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not resolve a data directory; set STOCKROOM_DATA_DIR")]
    NoDataDir,

    #[error("invalid STOCKROOM_SORT_MODE: {0}")]
    SortMode(#[source] DomainError),

    #[error("invalid STOCKROOM_LOW_STOCK: {0:?} is not a non-negative integer")]
    LowStock(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub sort_mode: SortMode,
    pub display: DisplayOptions,
}

impl ClientConfig {
    /// Defaults rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            storage_key: DEFAULT_KEY.to_string(),
            sort_mode: SortMode::default(),
            display: DisplayOptions::default(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(ENV_DATA_DIR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                let dir = default_data_dir().ok_or(ConfigError::NoDataDir)?;
                tracing::debug!(data_dir = ?dir, "STOCKROOM_DATA_DIR not set; using platform data directory");
                dir
            }
        };

        let mut config = Self::new(data_dir);

        if let Some(key) = lookup(ENV_STORAGE_KEY).filter(|k| !k.trim().is_empty()) {
            config.storage_key = key;
        }

        if let Some(mode) = lookup(ENV_SORT_MODE) {
            config.sort_mode = mode.parse().map_err(ConfigError::SortMode)?;
        }

        if let Some(currency) = lookup(ENV_CURRENCY) {
            config.display.currency = currency;
        }

        if let Some(raw) = lookup(ENV_LOW_STOCK) {
            config.display.low_stock_below = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::LowStock(raw.clone()))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/tmp/stockroom-test"),
            (ENV_STORAGE_KEY, "warehouse"),
            (ENV_SORT_MODE, "view"),
            (ENV_CURRENCY, "$"),
            (ENV_LOW_STOCK, "3"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/stockroom-test"));
        assert_eq!(config.storage_key, "warehouse");
        assert_eq!(config.sort_mode, SortMode::View);
        assert_eq!(config.display.currency, "$");
        assert_eq!(config.display.low_stock_below, 3);
    }

    #[test]
    fn unset_values_use_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_DATA_DIR, "/tmp/stockroom-test")])).unwrap();
        assert_eq!(config, ClientConfig::new("/tmp/stockroom-test"));
        assert_eq!(config.storage_key, "inventory");
        assert_eq!(config.sort_mode, SortMode::Canonical);
        assert_eq!(config.display.currency, "₹");
        assert_eq!(config.display.low_stock_below, 10);
    }

    #[test]
    fn rejects_bad_values() {
        let bad_mode = ClientConfig::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/tmp/x"),
            (ENV_SORT_MODE, "shuffle"),
        ]));
        assert!(matches!(bad_mode, Err(ConfigError::SortMode(_))));

        let bad_threshold = ClientConfig::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/tmp/x"),
            (ENV_LOW_STOCK, "-1"),
        ]));
        assert!(matches!(bad_threshold, Err(ConfigError::LowStock(_))));
    }
}
