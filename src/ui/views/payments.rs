use crate::model::Payment;
use crate::ui::badge::payment_badge;
use crate::ui::detail::DetailState;
use crate::ui::menu::MenuItem;
use crate::ui::table::{Column, TableCell, TableRow};

use super::{RowAction, customer_label, opt_date, opt_money, opt_str};

pub const COLUMNS: &[Column] = &[
    Column {
        title: "Payment",
        width: 12,
        sort_key: None,
    },
    Column {
        title: "Order",
        width: 12,
        sort_key: None,
    },
    Column {
        title: "Customer",
        width: 18,
        sort_key: None,
    },
    Column {
        title: "Amount",
        width: 10,
        sort_key: Some("amount"),
    },
    Column {
        title: "Method",
        width: 10,
        sort_key: None,
    },
    Column {
        title: "Status",
        width: 11,
        sort_key: None,
    },
    Column {
        title: "Created",
        width: 17,
        sort_key: Some("created_at"),
    },
];

pub fn row(payment: &Payment) -> TableRow {
    let badge = payment_badge(payment.status);
    TableRow {
        id: payment.id.clone(),
        cells: vec![
            TableCell::plain(&payment.id),
            TableCell::plain(opt_str(payment.order_id.as_deref())),
            TableCell::plain(customer_label(payment.customer.as_ref())),
            TableCell::plain(opt_money(payment.amount)),
            TableCell::plain(opt_str(payment.method.as_deref())),
            TableCell::styled(badge.label, badge.style()),
            TableCell::plain(opt_date(payment.created_at)),
        ],
    }
}

pub fn actions(payment: &Payment) -> Vec<MenuItem<RowAction>> {
    vec![
        MenuItem::new("View details", RowAction::ViewDetails),
        MenuItem::new("Refund", RowAction::Refund).enabled(payment.refundable()),
    ]
}

pub fn detail(payment: &Payment) -> DetailState {
    let badge = payment_badge(payment.status);
    DetailState {
        title: format!("Payment {}", payment.id),
        fields: vec![
            ("ID", payment.id.clone()),
            ("Order", opt_str(payment.order_id.as_deref())),
            ("Customer", customer_label(payment.customer.as_ref())),
            ("Amount", opt_money(payment.amount)),
            ("Method", opt_str(payment.method.as_deref())),
            ("Status", badge.label.to_string()),
            ("Created", opt_date(payment.created_at)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_only_offered_for_completed() {
        for (status, expected) in [
            ("completed", true),
            ("pending", false),
            ("failed", false),
            ("refunded", false),
        ] {
            let payment: Payment =
                serde_json::from_str(&format!(r#"{{"id": "pay-1", "status": "{status}"}}"#))
                    .unwrap();
            let refund = actions(&payment)
                .into_iter()
                .find(|item| item.action == RowAction::Refund)
                .unwrap();
            assert_eq!(refund.enabled, expected, "status {status}");
        }
    }
}
