use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProductRef;

/// Stock level status for a warehouse item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    InStock,
    LowStock,
    OutOfStock,
    #[default]
    #[serde(other)]
    Unknown,
}

impl InventoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
            Self::Unknown => "unknown",
        }
    }

    /// The statuses an item can be moved to from the status picker.
    pub const PICKABLE: [InventoryStatus; 3] = [Self::InStock, Self::LowStock, Self::OutOfStock];
}

/// Shallow supplier reference embedded in inventory items.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A warehouse stock record.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub product: Option<ProductRef>,
    pub sku: Option<String>,
    pub quantity: Option<i64>,
    pub reserved: Option<i64>,
    #[serde(default)]
    pub status: InventoryStatus,
    pub supplier: Option<SupplierRef>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_item_with_nested_refs() {
        let json = r#"{
            "id": "i-1",
            "product": {"id": "p-1", "name": "Mug"},
            "supplier": {"name": "Acme"},
            "quantity": 12,
            "status": "low_stock"
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.status, InventoryStatus::LowStock);
        assert_eq!(item.product.unwrap().name.as_deref(), Some("Mug"));
        let supplier = item.supplier.unwrap();
        assert!(supplier.id.is_none());
        assert_eq!(supplier.name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_decode_item_missing_everything_but_id() {
        let json = r#"{"id": "i-2"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();

        assert!(item.product.is_none());
        assert!(item.quantity.is_none());
        assert_eq!(item.status, InventoryStatus::Unknown);
    }
}
