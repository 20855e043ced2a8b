//! Strongly-typed identifiers and their generators.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Opaque: records written by earlier versions may carry any non-empty
/// string, so no format is assumed beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::invalid_id("ItemId: empty"));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

/// Source of fresh item identifiers.
///
/// Generators only promise practical non-collision with their own output;
/// the store additionally skips ids already present in its collection.
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> ItemId {
        (**self).next_id()
    }
}

/// Deterministic counter-based ids (`item-1`, `item-2`, ...).
///
/// Prefer this in tests for reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix("item")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Time-ordered UUIDv7 ids, the default for long-lived collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&mut self) -> ItemId {
        ItemId::from(Uuid::now_v7())
    }
}
