use serde::Deserialize;

use crate::model::Customer;

use super::{ApiClient, ApiError, ListQuery, Page, Pagination};

#[derive(Debug, Deserialize)]
struct CustomerListResponse {
    #[serde(default)]
    customers: Vec<Customer>,
    pagination: Option<Pagination>,
}

/// List customers with paging and sort parameters.
pub fn list(client: &ApiClient, query: &ListQuery) -> Result<Page<Customer>, ApiError> {
    let response: CustomerListResponse = client.list("/customers", query)?;
    Ok(Page {
        rows: response.customers,
        pagination: response.pagination,
    })
}

/// Delete a customer account. Guarded in the UI to customers without orders.
pub fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/customers/{id}"))
}
