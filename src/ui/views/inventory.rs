use crate::model::{InventoryItem, InventoryStatus};
use crate::ui::badge::inventory_badge;
use crate::ui::detail::DetailState;
use crate::ui::menu::MenuItem;
use crate::ui::table::{Column, TableCell, TableRow};

use super::{RowAction, opt_count, opt_date, opt_str};

/// Index of the status badge column, which doubles as the status-picker
/// trigger.
pub const STATUS_COLUMN: usize = 4;

pub const COLUMNS: &[Column] = &[
    Column {
        title: "Product",
        width: 22,
        sort_key: None,
    },
    Column {
        title: "SKU",
        width: 12,
        sort_key: Some("sku"),
    },
    Column {
        title: "On hand",
        width: 8,
        sort_key: Some("quantity"),
    },
    Column {
        title: "Reserved",
        width: 9,
        sort_key: None,
    },
    Column {
        title: "Status",
        width: 13,
        sort_key: None,
    },
    Column {
        title: "Supplier",
        width: 14,
        sort_key: None,
    },
    Column {
        title: "Updated",
        width: 17,
        sort_key: Some("updated_at"),
    },
];

pub fn row(item: &InventoryItem) -> TableRow {
    let badge = inventory_badge(item.status);
    TableRow {
        id: item.id.clone(),
        cells: vec![
            TableCell::plain(opt_str(
                item.product.as_ref().and_then(|p| p.name.as_deref()),
            )),
            TableCell::plain(opt_str(item.sku.as_deref())),
            TableCell::plain(opt_count(item.quantity)),
            TableCell::plain(opt_count(item.reserved)),
            TableCell::styled(badge.label, badge.style()),
            TableCell::plain(opt_str(
                item.supplier.as_ref().and_then(|s| s.name.as_deref()),
            )),
            TableCell::plain(opt_date(item.updated_at)),
        ],
    }
}

pub fn actions(_item: &InventoryItem) -> Vec<MenuItem<RowAction>> {
    vec![
        MenuItem::new("View details", RowAction::ViewDetails),
        MenuItem::new("Edit quantity", RowAction::EditQuantity),
    ]
}

/// Status picker: every stock status the item is not already in.
pub fn status_items(item: &InventoryItem) -> Vec<MenuItem<RowAction>> {
    InventoryStatus::PICKABLE
        .into_iter()
        .filter(|status| *status != item.status)
        .map(|status| {
            MenuItem::new(
                inventory_badge(status).label.to_string(),
                RowAction::SetInventoryStatus(status),
            )
        })
        .collect()
}

pub fn detail(item: &InventoryItem) -> DetailState {
    let badge = inventory_badge(item.status);
    DetailState {
        title: format!(
            "Inventory {}",
            opt_str(item.product.as_ref().and_then(|p| p.name.as_deref()))
        ),
        fields: vec![
            ("ID", item.id.clone()),
            (
                "Product",
                opt_str(item.product.as_ref().and_then(|p| p.name.as_deref())),
            ),
            ("SKU", opt_str(item.sku.as_deref())),
            ("On hand", opt_count(item.quantity)),
            ("Reserved", opt_count(item.reserved)),
            ("Status", badge.label.to_string()),
            (
                "Supplier",
                opt_str(item.supplier.as_ref().and_then(|s| s.name.as_deref())),
            ),
            ("Updated", opt_date(item.updated_at)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_defends_against_missing_refs() {
        let item: InventoryItem = serde_json::from_str(r#"{"id": "i-1"}"#).unwrap();
        let row = row(&item);
        assert_eq!(row.cells[0].text, "N/A");
        assert_eq!(row.cells[2].text, "-");
        assert_eq!(row.cells[4].text, "unknown");
        assert_eq!(row.cells[5].text, "N/A");
    }

    #[test]
    fn test_status_items_exclude_current() {
        let item: InventoryItem =
            serde_json::from_str(r#"{"id": "i-1", "status": "low_stock"}"#).unwrap();
        let items = status_items(&item);
        assert_eq!(items.len(), 2);
        assert!(!items.iter().any(|i| {
            i.action == RowAction::SetInventoryStatus(InventoryStatus::LowStock)
        }));
    }
}
