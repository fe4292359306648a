use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CustomerRef;

/// Payment settlement status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }
}

/// A captured payment against an order.
#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub id: String,
    pub order_id: Option<String>,
    pub customer: Option<CustomerRef>,
    pub amount: Option<f64>,
    pub method: Option<String>,
    #[serde(default)]
    pub status: PaymentStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Payment {
    /// Only settled payments can be refunded.
    pub fn refundable(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payment_without_customer() {
        let json = r#"{"id": "pay-1", "amount": 19.99, "status": "completed"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();

        assert_eq!(payment.status, PaymentStatus::Completed);
        assert!(payment.refundable());
        assert!(payment.customer.is_none());
    }

    #[test]
    fn test_pending_payment_is_not_refundable() {
        let json = r#"{"id": "pay-2", "status": "pending"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert!(!payment.refundable());
    }

    #[test]
    fn test_unknown_payment_status() {
        let json = r#"{"id": "pay-3", "status": "chargeback"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.status, PaymentStatus::Unknown);
        assert!(!payment.refundable());
    }
}
