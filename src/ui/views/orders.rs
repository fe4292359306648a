use crate::model::{Order, OrderStatus};
use crate::ui::badge::order_badge;
use crate::ui::detail::DetailState;
use crate::ui::menu::MenuItem;
use crate::ui::table::{Column, TableCell, TableRow};

use super::{RowAction, customer_label, opt_count, opt_date, opt_money, opt_str};

/// Index of the status badge column, which doubles as the status-picker
/// trigger.
pub const STATUS_COLUMN: usize = 3;

pub const COLUMNS: &[Column] = &[
    Column {
        title: "Order",
        width: 12,
        sort_key: Some("number"),
    },
    Column {
        title: "Customer",
        width: 20,
        sort_key: None,
    },
    Column {
        title: "Total",
        width: 10,
        sort_key: Some("total"),
    },
    Column {
        title: "Status",
        width: 12,
        sort_key: None,
    },
    Column {
        title: "Items",
        width: 6,
        sort_key: None,
    },
    Column {
        title: "Placed",
        width: 17,
        sort_key: Some("placed_at"),
    },
];

pub fn row(order: &Order) -> TableRow {
    let badge = order_badge(order.status);
    TableRow {
        id: order.id.clone(),
        cells: vec![
            TableCell::plain(opt_str(order.number.as_deref())),
            TableCell::plain(customer_label(order.customer.as_ref())),
            TableCell::plain(opt_money(order.total)),
            TableCell::styled(badge.label, badge.style()),
            TableCell::plain(opt_count(order.items_count)),
            TableCell::plain(opt_date(order.placed_at)),
        ],
    }
}

pub fn actions(order: &Order) -> Vec<MenuItem<RowAction>> {
    let cancellable = matches!(
        order.status,
        OrderStatus::Pending | OrderStatus::Processing
    );
    vec![
        MenuItem::new("View details", RowAction::ViewDetails),
        MenuItem::new("Cancel order", RowAction::SetOrderStatus(OrderStatus::Cancelled))
            .enabled(cancellable),
    ]
}

/// Status picker: every status the order is not already in.
pub fn status_items(order: &Order) -> Vec<MenuItem<RowAction>> {
    OrderStatus::PICKABLE
        .into_iter()
        .filter(|status| *status != order.status)
        .map(|status| {
            MenuItem::new(
                order_badge(status).label.to_string(),
                RowAction::SetOrderStatus(status),
            )
        })
        .collect()
}

pub fn detail(order: &Order) -> DetailState {
    let badge = order_badge(order.status);
    DetailState {
        title: format!("Order {}", opt_str(order.number.as_deref())),
        fields: vec![
            ("ID", order.id.clone()),
            ("Number", opt_str(order.number.as_deref())),
            ("Customer", customer_label(order.customer.as_ref())),
            (
                "Email",
                opt_str(
                    order
                        .customer
                        .as_ref()
                        .and_then(|c| c.email.as_deref()),
                ),
            ),
            ("Total", opt_money(order.total)),
            ("Items", opt_count(order.items_count)),
            ("Status", badge.label.to_string()),
            ("Placed", opt_date(order.placed_at)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str) -> Order {
        serde_json::from_str(&format!(r#"{{"id": "o-1", "status": "{status}"}}"#)).unwrap()
    }

    #[test]
    fn test_status_items_exclude_current() {
        let items = status_items(&order("shipped"));
        assert_eq!(items.len(), 4);
        assert!(!items.iter().any(|item| {
            item.action == RowAction::SetOrderStatus(OrderStatus::Shipped)
        }));
    }

    #[test]
    fn test_unknown_status_offers_all_pickable() {
        let items = status_items(&order("mystery"));
        assert_eq!(items.len(), OrderStatus::PICKABLE.len());
    }

    #[test]
    fn test_cancel_is_disabled_once_shipped() {
        let items = actions(&order("shipped"));
        let cancel = items
            .iter()
            .find(|item| item.action == RowAction::SetOrderStatus(OrderStatus::Cancelled))
            .unwrap();
        assert!(!cancel.enabled);

        let items = actions(&order("pending"));
        let cancel = items
            .iter()
            .find(|item| item.action == RowAction::SetOrderStatus(OrderStatus::Cancelled))
            .unwrap();
        assert!(cancel.enabled);
    }

    #[test]
    fn test_row_handles_missing_customer() {
        let row = row(&order("pending"));
        assert_eq!(row.cells[1].text, "N/A");
        assert_eq!(row.cells[5].text, "-");
    }
}
