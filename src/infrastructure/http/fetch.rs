//! Browser transport: `fetch` through `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::ApiResponse;
use crate::domain::ports::ApiTransport;
use crate::error::TransportError;

/// Posts JSON relative to `prefix` (empty for same-origin requests).
///
/// Cookies follow the browser's defaults for same-origin requests.
#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    prefix: String,
}

impl FetchTransport {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait(?Send)]
impl ApiTransport for FetchTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.prefix, path);
        debug!(%url, "POST");

        let request = Request::post(&url)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| TransportError::new(format!("failed to build request: {e}")))?;

        let response = request.send().await.map_err(|e| {
            warn!("request to {} failed: {}", path, e);
            TransportError::new(e.to_string())
        })?;

        let status = response.status();
        let status_text = response.status_text();
        // An unreadable body counts as empty.
        let body = response.text().await.unwrap_or_default();

        Ok(ApiResponse::new(status, status_text, body))
    }
}
