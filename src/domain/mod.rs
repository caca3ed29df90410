//! Domain layer: the values the forms exchange and the collaborators they
//! depend on.
//!
//! # Architecture
//!
//! - [`entities`] - Request bodies, responses, page identifiers, routes
//! - [`ports`] - `ApiTransport` and `Page` trait definitions
//! - [`submission`] - Per-form submission lifecycle
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Port traits define contracts implemented by the infrastructure layer
//! - Submit logic lives in handlers (see [`crate::application::handlers`])
//!
//! # Submission Flow
//!
//! 1. A submit control is activated on the page
//! 2. The handler reads inputs through [`ports::Page`]
//! 3. The request body is posted through [`ports::ApiTransport`]
//! 4. The outcome is written back to the page, unless a newer submission of
//!    the same form has started (see [`submission::SubmissionGate`])

pub mod entities;
pub mod ports;
pub mod submission;
