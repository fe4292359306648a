use serde::Deserialize;
use serde_json::json;

use crate::model::Product;

use super::{ApiClient, ApiError, ListQuery, Page, Pagination};

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    #[serde(default)]
    products: Vec<Product>,
    pagination: Option<Pagination>,
}

/// List products with paging and sort parameters.
pub fn list(client: &ApiClient, query: &ListQuery) -> Result<Page<Product>, ApiError> {
    let response: ProductListResponse = client.list("/products", query)?;
    Ok(Page {
        rows: response.products,
        pagination: response.pagination,
    })
}

/// Update a product's lifecycle status.
pub fn update_status(client: &ApiClient, id: &str, status: &str) -> Result<(), ApiError> {
    client.patch_json(&format!("/products/{id}/status"), json!({ "status": status }))
}

/// Update a product's unit price.
pub fn update_price(client: &ApiClient, id: &str, price: f64) -> Result<(), ApiError> {
    client.patch_json(&format!("/products/{id}"), json!({ "price": price }))
}

/// Delete a product. The backend rejects deletion of active products; the
/// dashboard disables the control first, so a rejection here is unexpected.
pub fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/products/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_envelope() {
        let json = r#"{
            "products": [{"id": "p-1", "name": "Mug", "price": 9.5}],
            "pagination": {"page": 1, "limit": 25, "total": 1, "pages": 1}
        }"#;
        let response: ProductListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].name, "Mug");
        assert_eq!(response.pagination.unwrap().total, 1);
    }

    #[test]
    fn test_decode_envelope_without_rows() {
        let response: ProductListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.products.is_empty());
        assert!(response.pagination.is_none());
    }
}
