//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no presentation).

pub mod entity;
pub mod error;
pub mod id;
pub mod reducer;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdGenerator, ItemId, SequentialIds, UuidV7Ids};
pub use reducer::Reducer;
pub use value_object::ValueObject;
