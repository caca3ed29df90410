//! Native HTTP transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::ApiResponse;
use crate::domain::ports::ApiTransport;
use crate::error::TransportError;

/// Posts JSON to the backend rooted at `base_url`.
///
/// Keeps a cookie store, so the session cookie set by a successful login is
/// sent with the admin requests that follow on the same transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Builds a transport for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Uses a preconfigured client as-is.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Resolves an absolute API path under the base URL, keeping any path
    /// prefix the base carries.
    fn endpoint_url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::new(format!("invalid request path {path}: {e}")))
    }
}

#[async_trait(?Send)]
impl ApiTransport for ReqwestTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, TransportError> {
        let url = self.endpoint_url(path)?;
        debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!("request to {} failed: {}", path, e);
                TransportError::new(e.to_string())
            })?;

        let status = response.status();
        // An unreadable body counts as empty.
        let body = response.text().await.unwrap_or_default();

        Ok(ApiResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        ))
    }
}
