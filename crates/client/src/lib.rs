//! `stockroom-client`
//!
//! **Responsibility:** the presentation-facing facade of the inventory tracker.
//!
//! A UI owns one [`InventorySession`], forwards field edits and button
//! presses to it and renders [`InventorySession::rows`]. The session composes
//! an owned store, the persistence adapter and the form state; every
//! collection change is mirrored to storage before the call returns.

pub mod config;
pub mod error;
pub mod session;

use anyhow::Context;
use stockroom_core::UuidV7Ids;
use stockroom_inventory::InventoryStore;
use stockroom_storage::{FileStorage, InventoryPersistence};

pub use config::{ClientConfig, ConfigError};
pub use error::SessionError;
pub use session::InventorySession;

/// Open a file-backed session described by `config`, loading any stored
/// collection.
pub fn open(config: &ClientConfig) -> InventorySession<FileStorage, UuidV7Ids> {
    let persistence =
        InventoryPersistence::with_key(FileStorage::new(&config.data_dir), config.storage_key.clone());
    let store = InventoryStore::new().with_sort_mode(config.sort_mode);

    InventorySession::open(store, persistence).with_display(config.display.clone())
}

/// Initialize logging, read configuration from the environment and open a
/// session.
pub fn open_from_env() -> anyhow::Result<InventorySession<FileStorage, UuidV7Ids>> {
    stockroom_observability::init();

    let config = ClientConfig::from_env().context("failed to read stockroom configuration from environment")?;
    tracing::info!(data_dir = ?config.data_dir, key = %config.storage_key, "opening inventory session");

    Ok(open(&config))
}
