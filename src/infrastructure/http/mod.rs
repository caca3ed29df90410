//! HTTP transports for the backend API.
//!
//! Provides two [`crate::domain::ports::ApiTransport`] implementations:
//! - [`ReqwestTransport`] - Native client used by the CLI and integration tests
//! - `FetchTransport` - Browser `fetch` through `gloo-net` (wasm32 only)

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(not(target_arch = "wasm32"))]
mod reqwest_transport;

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use reqwest_transport::ReqwestTransport;
