use crate::model::{Product, ProductStatus};
use crate::ui::badge::product_badge;
use crate::ui::detail::DetailState;
use crate::ui::menu::MenuItem;
use crate::ui::table::{Column, TableCell, TableRow};

use super::{RowAction, opt_count, opt_money, opt_str};

pub const COLUMNS: &[Column] = &[
    Column {
        title: "Name",
        width: 24,
        sort_key: Some("name"),
    },
    Column {
        title: "SKU",
        width: 12,
        sort_key: Some("sku"),
    },
    Column {
        title: "Price",
        width: 10,
        sort_key: Some("price"),
    },
    Column {
        title: "Stock",
        width: 7,
        sort_key: Some("stock"),
    },
    Column {
        title: "Category",
        width: 14,
        sort_key: None,
    },
    Column {
        title: "Status",
        width: 10,
        sort_key: None,
    },
];

pub fn row(product: &Product) -> TableRow {
    let badge = product_badge(product.status);
    TableRow {
        id: product.id.clone(),
        cells: vec![
            TableCell::plain(&product.name),
            TableCell::plain(opt_str(product.sku.as_deref())),
            TableCell::plain(opt_money(product.price)),
            TableCell::plain(opt_count(product.stock)),
            TableCell::plain(opt_str(product.category.as_deref())),
            TableCell::styled(badge.label, badge.style()),
        ],
    }
}

pub fn actions(product: &Product) -> Vec<MenuItem<RowAction>> {
    let archive = if product.status == ProductStatus::Archived {
        MenuItem::new(
            "Restore",
            RowAction::SetProductStatus(ProductStatus::Active),
        )
    } else {
        MenuItem::new(
            "Archive",
            RowAction::SetProductStatus(ProductStatus::Archived),
        )
    };

    vec![
        MenuItem::new("View details", RowAction::ViewDetails),
        MenuItem::new("Edit price", RowAction::EditPrice),
        archive,
        MenuItem::new("Delete", RowAction::Delete).enabled(product.deletable()),
    ]
}

pub fn detail(product: &Product) -> DetailState {
    let badge = product_badge(product.status);
    DetailState {
        title: format!("Product {}", product.name),
        fields: vec![
            ("ID", product.id.clone()),
            ("Name", product.name.clone()),
            ("SKU", opt_str(product.sku.as_deref())),
            ("Price", opt_money(product.price)),
            ("Stock", opt_count(product.stock)),
            ("Category", opt_str(product.category.as_deref())),
            ("Status", badge.label.to_string()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(status: &str) -> Product {
        serde_json::from_str(&format!(
            r#"{{"id": "p-1", "name": "Mug", "status": "{status}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_row_renders_placeholders_for_missing_fields() {
        let row = row(&product("draft"));
        assert_eq!(row.cells[1].text, "N/A");
        assert_eq!(row.cells[2].text, "-");
        assert_eq!(row.cells[5].text, "draft");
    }

    #[test]
    fn test_delete_is_disabled_for_active_product() {
        let items = actions(&product("active"));
        let delete = items
            .iter()
            .find(|item| item.action == RowAction::Delete)
            .unwrap();
        assert!(!delete.enabled);

        let items = actions(&product("archived"));
        let delete = items
            .iter()
            .find(|item| item.action == RowAction::Delete)
            .unwrap();
        assert!(delete.enabled);
    }

    #[test]
    fn test_archived_product_offers_restore() {
        let items = actions(&product("archived"));
        assert!(items.iter().any(|item| {
            item.action == RowAction::SetProductStatus(ProductStatus::Active)
        }));
    }
}
