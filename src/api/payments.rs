use serde::Deserialize;

use crate::model::Payment;

use super::{ApiClient, ApiError, ListQuery, Page, Pagination};

#[derive(Debug, Deserialize)]
struct PaymentListResponse {
    #[serde(default)]
    payments: Vec<Payment>,
    pagination: Option<Pagination>,
}

/// List payments with paging and sort parameters.
pub fn list(client: &ApiClient, query: &ListQuery) -> Result<Page<Payment>, ApiError> {
    let response: PaymentListResponse = client.list("/payments", query)?;
    Ok(Page {
        rows: response.payments,
        pagination: response.pagination,
    })
}

/// Issue a refund for a settled payment.
pub fn refund(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.post_empty(&format!("/payments/{id}/refund"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentStatus;

    #[test]
    fn test_decode_list_envelope() {
        let json = r#"{
            "payments": [{"id": "pay-1", "amount": 42.0, "status": "refunded"}],
            "pagination": {"page": 1, "limit": 25, "total": 1, "pages": 1}
        }"#;
        let response: PaymentListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.payments.len(), 1);
        assert_eq!(response.payments[0].status, PaymentStatus::Refunded);
    }
}
