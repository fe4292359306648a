use serde::Deserialize;
use serde_json::json;

use crate::model::InventoryItem;

use super::{ApiClient, ApiError, ListQuery, Page, Pagination};

#[derive(Debug, Deserialize)]
struct InventoryListResponse {
    #[serde(default)]
    items: Vec<InventoryItem>,
    pagination: Option<Pagination>,
}

/// List inventory items with paging and sort parameters.
pub fn list(client: &ApiClient, query: &ListQuery) -> Result<Page<InventoryItem>, ApiError> {
    let response: InventoryListResponse = client.list("/inventory", query)?;
    Ok(Page {
        rows: response.items,
        pagination: response.pagination,
    })
}

/// Set the on-hand quantity for an item.
pub fn update_quantity(client: &ApiClient, id: &str, quantity: i64) -> Result<(), ApiError> {
    client.patch_json(&format!("/inventory/{id}"), json!({ "quantity": quantity }))
}

/// Move an item to a new stock status.
pub fn update_status(client: &ApiClient, id: &str, status: &str) -> Result<(), ApiError> {
    client.patch_json(&format!("/inventory/{id}/status"), json!({ "status": status }))
}
