//! Thin HTTP wrappers over the storefront backend.
//!
//! Each resource module exposes the REST verbs the dashboard needs. List
//! endpoints return `{ "<entity>s": [...], "pagination": {...} }` envelopes;
//! error responses carry `{ "error" | "message" }` bodies which are surfaced
//! verbatim in the page banner. These wrappers hold no state beyond the
//! shared client and perform no business logic.

pub mod customers;
pub mod inventory;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Error body shape used by the backend: `{ "error": ... }` or
/// `{ "message": ... }`, never both guaranteed.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

/// One page of rows plus the pagination block, envelope key stripped.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub pagination: Option<Pagination>,
}

/// Query parameters common to every list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort: Option<&'static str>,
    pub order: Option<&'static str>,
}

impl ListQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(sort) = self.sort {
            params.push(("sort", sort.to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order", order.to_string()));
        }
        params
    }
}

/// Shared HTTP client for the storefront API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: Option<String>,
    http: HttpClient,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_owned()));
        }

        let http = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// GET a JSON document, decoding the response body into `T`.
    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(params);
        let response = self.authorize(request).send()?;
        decode_response(response)
    }

    /// GET a list endpoint with the standard query parameters.
    pub(crate) fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<T, ApiError> {
        self.get_json(path, &query.params())
    }

    /// PATCH a JSON body, ignoring any response payload beyond the status.
    pub(crate) fn patch_json(&self, path: &str, body: serde_json::Value) -> Result<(), ApiError> {
        let request = self
            .http
            .patch(format!("{}{}", self.base_url, path))
            .json(&body);
        let response = self.authorize(request).send()?;
        check_status(response)
    }

    /// POST with an empty body, ignoring any response payload.
    pub(crate) fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.post(format!("{}{}", self.base_url, path));
        let response = self.authorize(request).send()?;
        check_status(response)
    }

    /// DELETE a resource.
    pub(crate) fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.delete(format!("{}{}", self.base_url, path));
        let response = self.authorize(request).send()?;
        check_status(response)
    }
}

fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(api_error(status, &body));
    }
    Ok(serde_json::from_str(&body)?)
}

fn check_status(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(api_error(status, &body));
    }
    Ok(())
}

/// Pull a human-readable message out of an error body, falling back to the
/// HTTP status text when the body is not the expected shape.
fn api_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned()
        });

    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_params() {
        let query = ListQuery {
            page: 2,
            limit: 25,
            sort: Some("name"),
            order: Some("desc"),
        };

        let params = query.params();
        assert_eq!(params[0], ("page", "2".to_string()));
        assert_eq!(params[1], ("limit", "25".to_string()));
        assert_eq!(params[2], ("sort", "name".to_string()));
        assert_eq!(params[3], ("order", "desc".to_string()));
    }

    #[test]
    fn test_list_query_omits_unset_sort() {
        let query = ListQuery {
            page: 1,
            limit: 10,
            sort: None,
            order: None,
        };
        assert_eq!(query.params().len(), 2);
    }

    #[test]
    fn test_api_error_prefers_error_field() {
        let err = api_error(StatusCode::BAD_REQUEST, r#"{"error": "bad sku"}"#);
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad sku");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_message_field() {
        let err = api_error(StatusCode::NOT_FOUND, r#"{"message": "no such order"}"#);
        match err {
            ApiError::Api { message, .. } => assert_eq!(message, "no such order"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_handles_non_json_body() {
        let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let result = ApiClient::new("", None, Duration::from_secs(5));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client =
            ApiClient::new("http://localhost:4000/api/", None, Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000/api");
    }

    #[test]
    fn test_pagination_decodes_with_missing_fields() {
        let pagination: Pagination = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.total, 0);
    }
}
