//! HTTP transport trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::ApiResponse;
use crate::error::TransportError;

/// Posts a JSON body to the backend and hands back whatever came back.
///
/// Requests carry `Accept: application/json` and
/// `Content-Type: application/json`. No timeout beyond the underlying
/// client's defaults is applied and nothing is retried.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestTransport`] - Native client with a cookie store
/// - `FetchTransport` - Browser `fetch` via `gloo-net` (wasm32 only)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ApiTransport {
    /// Posts `body` to `path` (absolute, e.g. `/api/v1/login`).
    ///
    /// # Returns
    ///
    /// - `Ok(ApiResponse)` for any response that arrived, whatever its status
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only if the request did not complete.
    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, TransportError>;
}
