//! Collaborator traits the form handlers are written against.
//!
//! # Architecture
//!
//! - Traits define the contract with the outside world (HTTP backend, page markup)
//! - Implementations live in `crate::infrastructure`
//! - Mock transports are auto-generated via `mockall` for testing
//!
//! # Available Ports
//!
//! - [`ApiTransport`] - Posts JSON bodies to the backend API
//! - [`Page`] - Reads inputs, toggles the inline error display, navigates
//!
//! Both traits are `?Send`: in the browser every handler runs on the single
//! page thread, and the DOM handles they wrap cannot cross threads.

pub mod page;
pub mod transport;

pub use page::Page;
pub use transport::ApiTransport;

#[cfg(test)]
pub use transport::MockApiTransport;
