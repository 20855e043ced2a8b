use stockroom_core::{DomainError, ItemId};
use stockroom_storage::StorageError;
use thiserror::Error;

/// Errors surfaced to the presentation layer.
///
/// Only `Storage` can follow a completed mutation: the in-memory collection
/// already reflects the action and stays authoritative for the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Form input rejected; nothing changed.
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("no item with id {0}")]
    UnknownItem(ItemId),

    #[error("no edit in progress")]
    NotEditing,

    #[error("an edit is in progress; commit or cancel it first")]
    EditInProgress,

    /// The change was applied in memory but could not be persisted.
    #[error("change kept in memory but not persisted: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Whether the collection was left untouched by the failed call.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, SessionError::Storage(_))
    }
}
