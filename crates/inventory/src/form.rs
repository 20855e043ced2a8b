//! Add/edit form contract.
//!
//! The form holds raw field values as typed by the user. It is either in add
//! mode or editing one item; the owning session decides which action a
//! submit turns into.

use stockroom_core::{DomainResult, Entity, ItemId};

use crate::item::{InventoryItem, ItemDraft};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
    editing: Option<ItemId>,
}

impl ItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> Option<&ItemId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Pre-fill every field from `item` and switch to edit mode.
    pub fn begin_edit(&mut self, item: &InventoryItem) {
        self.name = item.name().to_string();
        self.quantity = i64::try_from(item.quantity()).unwrap_or(i64::MAX);
        self.price = item.price().value();
        self.category = item.category().to_string();
        self.editing = Some(item.id().clone());
    }

    /// Validate the current values into a draft without touching the form.
    pub fn validate(&self) -> DomainResult<ItemDraft> {
        ItemDraft::from_input(&self.name, self.quantity, self.price, &self.category)
    }

    /// Blank every field and leave edit mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt() -> InventoryItem {
        InventoryItem::new(
            "item-1".parse().unwrap(),
            ItemDraft::from_input("Bolt", 5, 2.5, "Hardware").unwrap(),
        )
    }

    #[test]
    fn begin_edit_prefills_fields() {
        let mut form = ItemForm::new();
        form.begin_edit(&bolt());

        assert!(form.is_editing());
        assert_eq!(form.editing().map(|id| id.as_str()), Some("item-1"));
        assert_eq!(form.name, "Bolt");
        assert_eq!(form.quantity, 5);
        assert_eq!(form.price, 2.5);
        assert_eq!(form.category, "Hardware");
        assert_eq!(form.validate().unwrap(), bolt().to_draft());
    }

    #[test]
    fn blank_form_fails_validation() {
        let form = ItemForm::new();
        assert!(form.validate().unwrap_err().is_validation());
    }

    #[test]
    fn reset_clears_edit_mode() {
        let mut form = ItemForm::new();
        form.begin_edit(&bolt());
        form.reset();

        assert_eq!(form, ItemForm::new());
        assert!(!form.is_editing());
    }
}
