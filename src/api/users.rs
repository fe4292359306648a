use serde::Deserialize;
use serde_json::json;

use crate::model::User;

use super::{ApiClient, ApiError, ListQuery, Page, Pagination};

#[derive(Debug, Deserialize)]
struct UserListResponse {
    #[serde(default)]
    users: Vec<User>,
    pagination: Option<Pagination>,
}

/// List dashboard users with paging and sort parameters.
pub fn list(client: &ApiClient, query: &ListQuery) -> Result<Page<User>, ApiError> {
    let response: UserListResponse = client.list("/users", query)?;
    Ok(Page {
        rows: response.users,
        pagination: response.pagination,
    })
}

/// Activate or deactivate a user account.
pub fn set_active(client: &ApiClient, id: &str, active: bool) -> Result<(), ApiError> {
    client.patch_json(&format!("/users/{id}"), json!({ "is_active": active }))
}

/// Delete a user account. Guarded in the UI to inactive users.
pub fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/users/{id}"))
}
