//! Table rows as the presentation layer renders them.

use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

use crate::item::{InventoryItem, Price};

/// Display settings for the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Prefix for formatted prices.
    pub currency: String,
    /// Rows with a quantity strictly below this are flagged as low stock.
    pub low_stock_below: u64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            low_stock_below: 10,
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub quantity: u64,
    pub price: String,
    pub category: String,
    pub low_stock: bool,
}

impl ItemRow {
    pub fn from_item(item: &InventoryItem, options: &DisplayOptions) -> Self {
        Self {
            id: item.id().clone(),
            name: item.name().to_string(),
            quantity: item.quantity(),
            price: format_price(item.price(), &options.currency),
            category: item.category().to_string(),
            low_stock: item.quantity() < options.low_stock_below,
        }
    }
}

/// `{currency}{price}` with exactly two decimals.
pub fn format_price(price: Price, currency: &str) -> String {
    format!("{currency}{:.2}", price.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDraft;

    fn item(quantity: i64, price: f64) -> InventoryItem {
        InventoryItem::new(
            "item-1".parse().unwrap(),
            ItemDraft::from_input("Bolt", quantity, price, "Hardware").unwrap(),
        )
    }

    #[test]
    fn formats_price_with_two_decimals() {
        assert_eq!(format_price(Price::new(2.5).unwrap(), "₹"), "₹2.50");
        assert_eq!(format_price(Price::new(10.0).unwrap(), "$"), "$10.00");
        assert_eq!(format_price(Price::ZERO, ""), "0.00");
    }

    #[test]
    fn flags_low_stock_below_threshold() {
        let options = DisplayOptions::default();
        assert!(ItemRow::from_item(&item(9, 1.0), &options).low_stock);
        assert!(!ItemRow::from_item(&item(10, 1.0), &options).low_stock);

        let strict = DisplayOptions {
            low_stock_below: 3,
            ..DisplayOptions::default()
        };
        assert!(!ItemRow::from_item(&item(9, 1.0), &strict).low_stock);
    }

    #[test]
    fn row_carries_display_fields() {
        let row = ItemRow::from_item(&item(5, 2.5), &DisplayOptions::default());
        assert_eq!(row.id.as_str(), "item-1");
        assert_eq!(row.name, "Bolt");
        assert_eq!(row.quantity, 5);
        assert_eq!(row.price, "₹2.50");
        assert_eq!(row.category, "Hardware");
    }
}
