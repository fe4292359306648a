use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Wire name sent back to the API on status updates.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    /// The statuses an order can be moved to from the status picker.
    pub const PICKABLE: [OrderStatus; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];
}

/// Shallow customer reference embedded in orders and payments.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A customer order.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: String,
    pub number: Option<String>,
    pub customer: Option<CustomerRef>,
    pub total: Option<f64>,
    #[serde(default)]
    pub status: OrderStatus,
    pub items_count: Option<u32>,
    pub placed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_order_without_customer() {
        let json = r#"{"id": "o-1", "status": "shipped"}"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.id, "o-1");
        assert_eq!(order.status, OrderStatus::Shipped);
        assert!(order.customer.is_none());
        assert!(order.total.is_none());
    }

    #[test]
    fn test_decode_partial_customer_ref() {
        let json = r#"{"id": "o-2", "customer": {"name": "Ada"}}"#;
        let order: Order = serde_json::from_str(json).unwrap();

        let customer = order.customer.unwrap();
        assert_eq!(customer.name.as_deref(), Some("Ada"));
        assert!(customer.id.is_none());
        assert!(customer.email.is_none());
    }

    #[test]
    fn test_unknown_status_round_trips_as_unknown() {
        let json = r#"{"id": "o-3", "status": "on_hold"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
    }
}
