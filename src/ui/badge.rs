use ratatui::style::{Color, Style};

use crate::model::{InventoryStatus, OrderStatus, PaymentStatus, ProductStatus};

/// Presentational style for a status value.
///
/// Every lookup below is total: each known status maps to exactly one badge,
/// and anything unrecognized falls back to a gray `unknown` badge rather
/// than rendering nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub color: Color,
}

impl Badge {
    pub fn style(&self) -> Style {
        Style::default().fg(self.color)
    }

    const fn new(label: &'static str, color: Color) -> Self {
        Self { label, color }
    }
}

/// Fallback badge for statuses the dashboard does not recognize.
pub const UNKNOWN_BADGE: Badge = Badge::new("unknown", Color::Gray);

pub fn product_badge(status: ProductStatus) -> Badge {
    match status {
        ProductStatus::Active => Badge::new("active", Color::Green),
        ProductStatus::Draft => Badge::new("draft", Color::Yellow),
        ProductStatus::Archived => Badge::new("archived", Color::DarkGray),
        ProductStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn order_badge(status: OrderStatus) -> Badge {
    match status {
        OrderStatus::Pending => Badge::new("pending", Color::Yellow),
        OrderStatus::Processing => Badge::new("processing", Color::Cyan),
        OrderStatus::Shipped => Badge::new("shipped", Color::Blue),
        OrderStatus::Delivered => Badge::new("delivered", Color::Green),
        OrderStatus::Cancelled => Badge::new("cancelled", Color::Red),
        OrderStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn payment_badge(status: PaymentStatus) -> Badge {
    match status {
        PaymentStatus::Pending => Badge::new("pending", Color::Yellow),
        PaymentStatus::Completed => Badge::new("completed", Color::Green),
        PaymentStatus::Failed => Badge::new("failed", Color::Red),
        PaymentStatus::Refunded => Badge::new("refunded", Color::Magenta),
        PaymentStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn inventory_badge(status: InventoryStatus) -> Badge {
    match status {
        InventoryStatus::InStock => Badge::new("in stock", Color::Green),
        InventoryStatus::LowStock => Badge::new("low stock", Color::Yellow),
        InventoryStatus::OutOfStock => Badge::new("out of stock", Color::Red),
        InventoryStatus::Unknown => UNKNOWN_BADGE,
    }
}

/// Badge for a user's active flag.
pub fn active_badge(active: bool) -> Badge {
    if active {
        Badge::new("active", Color::Green)
    } else {
        Badge::new("inactive", Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_lookup_is_total() {
        // Every pickable status plus Unknown maps to a distinct badge.
        for status in OrderStatus::PICKABLE {
            assert_ne!(order_badge(status), UNKNOWN_BADGE);
        }
        assert_eq!(order_badge(OrderStatus::Unknown), UNKNOWN_BADGE);
    }

    #[test]
    fn test_unrecognized_status_string_maps_to_gray() {
        // A status string the API added after this build decodes to Unknown
        // and renders as the gray fallback, never as a missing badge.
        let status: OrderStatus = serde_json::from_str("\"on_hold\"").unwrap();
        let badge = order_badge(status);
        assert_eq!(badge, UNKNOWN_BADGE);
        assert_eq!(badge.color, Color::Gray);
    }

    #[test]
    fn test_inventory_lookup_is_total() {
        for status in InventoryStatus::PICKABLE {
            assert_ne!(inventory_badge(status), UNKNOWN_BADGE);
        }
        assert_eq!(inventory_badge(InventoryStatus::Unknown), UNKNOWN_BADGE);
    }

    #[test]
    fn test_payment_refunded_is_distinct() {
        assert_ne!(
            payment_badge(PaymentStatus::Refunded),
            payment_badge(PaymentStatus::Completed)
        );
    }
}
