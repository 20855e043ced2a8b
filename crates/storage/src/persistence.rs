//! Persistence adapter: mirrors the whole collection under one key.

use stockroom_inventory::InventoryItem;

use crate::error::StorageError;
use crate::kv::KeyValueStorage;

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "inventory";

/// Encode a collection as a JSON array of `{id, name, quantity, price, category}`.
pub fn encode(items: &[InventoryItem]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(StorageError::Encode)
}

pub fn decode(raw: &str) -> Result<Vec<InventoryItem>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Decode)
}

#[derive(Debug)]
pub struct InventoryPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> InventoryPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Read and decode the stored collection, `None` when nothing is stored.
    pub fn try_load(&self) -> Result<Option<Vec<InventoryItem>>, StorageError> {
        match self.storage.get(&self.key)? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Startup load. Never fails: a missing, unreadable or corrupt record
    /// yields an empty collection.
    pub fn load(&self) -> Vec<InventoryItem> {
        match self.try_load() {
            Ok(Some(items)) => {
                tracing::info!(key = %self.key, items = items.len(), "loaded inventory");
                items
            }
            Ok(None) => {
                tracing::info!(key = %self.key, "no stored inventory; starting empty");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "stored inventory unusable; starting empty");
                Vec::new()
            }
        }
    }

    /// Replace the stored record with `items`.
    pub fn save(&mut self, items: &[InventoryItem]) -> Result<(), StorageError> {
        let payload = encode(items)?;
        self.storage.set(&self.key, &payload).inspect_err(|err| {
            tracing::warn!(key = %self.key, error = %err, "failed to persist inventory");
        })?;
        tracing::debug!(key = %self.key, items = items.len(), bytes = payload.len(), "persisted inventory");
        Ok(())
    }

    /// Drop the stored record entirely.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
