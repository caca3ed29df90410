//! Infrastructure layer for external integrations.
//!
//! This layer implements the port traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - `ApiTransport` implementations (reqwest natively, `fetch` in the browser)
//! - [`page`] - `Page` implementations (in-memory, terminal, live DOM)

pub mod http;
pub mod page;
