//! `stockroom-storage`
//!
//! **Responsibility:** durable key-value storage for the inventory collection.
//!
//! This crate provides:
//! - A string key-value storage abstraction with in-memory and file-backed
//!   implementations
//! - The persistence adapter that mirrors the whole collection under one key
//!
//! Serialization is owned here; the inventory crate only derives serde.

pub mod error;
pub mod file;
pub mod kv;
pub mod persistence;

pub use error::StorageError;
pub use file::{FileStorage, default_data_dir};
pub use kv::{KeyValueStorage, MemoryStorage};
pub use persistence::{DEFAULT_KEY, InventoryPersistence, decode, encode};
