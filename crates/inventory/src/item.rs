use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId, ValueObject};

/// Non-negative, finite unit price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        // Normalize -0.0 so equal prices compare and serialize identically.
        Ok(Self(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Field values of an item without its identity.
///
/// Used both as the payload of an add and as the patch of an edit. The store
/// trusts these values; validation happens before a draft is built from user
/// input (see [`ItemDraft::from_input`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u64,
    pub price: Price,
    pub category: String,
}

impl ValueObject for ItemDraft {}

impl ItemDraft {
    /// Validate raw form values.
    ///
    /// Rules: name and category non-empty, quantity > 0, price > 0.
    pub fn from_input(name: &str, quantity: i64, price: f64, category: &str) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }
        let price = Price::new(price)?;
        if !price.is_positive() {
            return Err(DomainError::validation("price must be greater than zero"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            quantity: quantity as u64,
            price,
            category: category.to_string(),
        })
    }
}

/// One inventory record.
///
/// Serializes to the storage shape `{id, name, quantity, price, category}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    quantity: u64,
    price: Price,
    category: String,
}

impl InventoryItem {
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            category: draft.category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current field values as a draft (used to pre-fill the edit form).
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
            category: self.category.clone(),
        }
    }

    /// Overwrite every field except the id.
    pub(crate) fn patch(&mut self, patch: ItemDraft) {
        self.name = patch.name;
        self.quantity = patch.quantity;
        self.price = patch.price;
        self.category = patch.category;
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_id(s: &str) -> ItemId {
        s.parse().unwrap()
    }

    #[test]
    fn price_rejects_negative_and_non_finite() {
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
        assert_eq!(Price::new(0.0).unwrap(), Price::ZERO);
        assert_eq!(Price::new(-0.0).unwrap().value().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn from_input_accepts_complete_values() {
        let draft = ItemDraft::from_input("Bolt", 5, 2.5, "Hardware").unwrap();
        assert_eq!(draft.name, "Bolt");
        assert_eq!(draft.quantity, 5);
        assert_eq!(draft.price.value(), 2.5);
        assert_eq!(draft.category, "Hardware");
    }

    #[test]
    fn from_input_rejects_each_missing_field() {
        let cases = [
            ("", 5, 2.5, "Hardware"),
            ("   ", 5, 2.5, "Hardware"),
            ("Bolt", 0, 2.5, "Hardware"),
            ("Bolt", -3, 2.5, "Hardware"),
            ("Bolt", 5, 0.0, "Hardware"),
            ("Bolt", 5, -1.0, "Hardware"),
            ("Bolt", 5, 2.5, ""),
        ];

        for (name, qty, price, category) in cases {
            let err = ItemDraft::from_input(name, qty, price, category).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {name:?}/{qty}/{price}/{category:?}");
        }
    }

    #[test]
    fn serializes_to_storage_shape() {
        let item = InventoryItem::new(
            item_id("item-1"),
            ItemDraft::from_input("Bolt", 5, 2.5, "Hardware").unwrap(),
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "item-1",
                "name": "Bolt",
                "quantity": 5,
                "price": 2.5,
                "category": "Hardware",
            })
        );
    }

    #[test]
    fn decode_rejects_negative_price() {
        let raw = r#"{"id":"a","name":"Bolt","quantity":1,"price":-2,"category":"x"}"#;
        assert!(serde_json::from_str::<InventoryItem>(raw).is_err());
    }

    #[test]
    fn patch_preserves_id() {
        let mut item = InventoryItem::new(
            item_id("item-1"),
            ItemDraft::from_input("Bolt", 5, 2.5, "Hardware").unwrap(),
        );
        item.patch(ItemDraft::from_input("Screw", 9, 1.0, "Fasteners").unwrap());

        assert_eq!(item.id().as_str(), "item-1");
        assert_eq!(item.name(), "Screw");
        assert_eq!(item.quantity(), 9);
        assert_eq!(item.category(), "Fasteners");
    }
}
