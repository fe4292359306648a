use crate::model::Customer;
use crate::ui::detail::DetailState;
use crate::ui::menu::MenuItem;
use crate::ui::table::{Column, TableCell, TableRow};

use super::{RowAction, opt_count, opt_date, opt_money, opt_str};

pub const COLUMNS: &[Column] = &[
    Column {
        title: "Name",
        width: 20,
        sort_key: Some("name"),
    },
    Column {
        title: "Email",
        width: 24,
        sort_key: Some("email"),
    },
    Column {
        title: "Phone",
        width: 14,
        sort_key: None,
    },
    Column {
        title: "Orders",
        width: 7,
        sort_key: Some("orders_count"),
    },
    Column {
        title: "Spent",
        width: 10,
        sort_key: Some("total_spent"),
    },
];

pub fn row(customer: &Customer) -> TableRow {
    TableRow {
        id: customer.id.clone(),
        cells: vec![
            TableCell::plain(opt_str(customer.name.as_deref())),
            TableCell::plain(opt_str(customer.email.as_deref())),
            TableCell::plain(opt_str(customer.phone.as_deref())),
            TableCell::plain(opt_count(customer.orders_count)),
            TableCell::plain(opt_money(customer.total_spent)),
        ],
    }
}

pub fn actions(customer: &Customer) -> Vec<MenuItem<RowAction>> {
    vec![
        MenuItem::new("View details", RowAction::ViewDetails),
        MenuItem::new("Delete", RowAction::Delete).enabled(customer.deletable()),
    ]
}

pub fn detail(customer: &Customer) -> DetailState {
    DetailState {
        title: format!("Customer {}", opt_str(customer.name.as_deref())),
        fields: vec![
            ("ID", customer.id.clone()),
            ("Name", opt_str(customer.name.as_deref())),
            ("Email", opt_str(customer.email.as_deref())),
            ("Phone", opt_str(customer.phone.as_deref())),
            ("Orders", opt_count(customer.orders_count)),
            ("Spent", opt_money(customer.total_spent)),
            ("Since", opt_date(customer.created_at)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_guard_follows_orders_count() {
        let with_orders: Customer =
            serde_json::from_str(r#"{"id": "c-1", "orders_count": 2}"#).unwrap();
        let delete = actions(&with_orders)
            .into_iter()
            .find(|item| item.action == RowAction::Delete)
            .unwrap();
        assert!(!delete.enabled);

        let fresh: Customer = serde_json::from_str(r#"{"id": "c-2"}"#).unwrap();
        let delete = actions(&fresh)
            .into_iter()
            .find(|item| item.action == RowAction::Delete)
            .unwrap();
        assert!(delete.enabled);
    }
}
