//! Inventory domain module.
//!
//! This crate contains the inventory rules as deterministic domain logic
//! (no IO, no storage, no rendering): the item model, the action reducer,
//! the derived filter/sort views and the add/edit form contract.

pub mod form;
pub mod item;
pub mod store;
pub mod view;

pub use form::ItemForm;
pub use item::{InventoryItem, ItemDraft, Price};
pub use store::{
    InventoryAction, InventoryStore, SortDirection, SortMode, dedupe_by_id, filter_by_category,
    reduce, sorted_by_quantity,
};
pub use view::{DisplayOptions, ItemRow, format_price};
