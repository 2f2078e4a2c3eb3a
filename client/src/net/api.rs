//! REST helpers for the grocery items collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each helper returns a `Result` so the page handler that spawned the
//! request decides whether to log, toast, or ignore. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Item;
#[cfg(feature = "hydrate")]
use super::types::CheckedPatch;
use crate::config::ApiConfig;

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("Network request failed: {body}")]
    Status { status: u16, body: String },
    /// The response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Response text for status failures, otherwise the display message.
    pub fn detail(&self) -> String {
        match self {
            Self::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn items_endpoint(config: &ApiConfig) -> String {
    format!("{}/items", config.base_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(config: &ApiConfig, id: &str) -> String {
    format!("{}/items/{id}", config.base_url())
}

/// Sent on every request, including bodiless GET and DELETE.
#[cfg(any(test, feature = "hydrate"))]
const JSON_CONTENT_TYPE: &str = "application/json";

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

/// Fetch every item via `GET {base}/items`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a JSON item list.
pub async fn fetch_items(config: &ApiConfig) -> Result<Vec<Item>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&items_endpoint(config))
            .header("Content-Type", JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Vec<Item>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Create an item via `POST {base}/items` with the item as JSON body.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-OK status.
pub async fn create_item(config: &ApiConfig, item: &Item) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&items_endpoint(config))
            .json(item)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, item);
        Err(ApiError::Unavailable)
    }
}

/// Update the checked flag via `PATCH {base}/items/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-OK status.
pub async fn set_item_checked(config: &ApiConfig, id: &str, checked: bool) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&item_endpoint(config, id))
            .json(&CheckedPatch { checked })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id, checked);
        Err(ApiError::Unavailable)
    }
}

/// Remove an item via `DELETE {base}/items/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-OK status.
pub async fn delete_item(config: &ApiConfig, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&item_endpoint(config, id))
            .header("Content-Type", JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
        Err(ApiError::Unavailable)
    }
}
