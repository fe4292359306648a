use serde::Deserialize;
use serde_json::json;

use crate::model::Order;

use super::{ApiClient, ApiError, ListQuery, Page, Pagination};

#[derive(Debug, Deserialize)]
struct OrderListResponse {
    #[serde(default)]
    orders: Vec<Order>,
    pagination: Option<Pagination>,
}

/// List orders with paging and sort parameters.
pub fn list(client: &ApiClient, query: &ListQuery) -> Result<Page<Order>, ApiError> {
    let response: OrderListResponse = client.list("/orders", query)?;
    Ok(Page {
        rows: response.orders,
        pagination: response.pagination,
    })
}

/// Move an order to a new fulfillment status.
pub fn update_status(client: &ApiClient, id: &str, status: &str) -> Result<(), ApiError> {
    client.patch_json(&format!("/orders/{id}/status"), json!({ "status": status }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;

    #[test]
    fn test_decode_list_envelope() {
        let json = r#"{
            "orders": [
                {"id": "o-1", "status": "pending", "customer": {"name": "Ada"}},
                {"id": "o-2", "status": "paused"}
            ]
        }"#;
        let response: OrderListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.orders.len(), 2);
        assert_eq!(response.orders[0].status, OrderStatus::Pending);
        assert_eq!(response.orders[1].status, OrderStatus::Unknown);
    }
}
