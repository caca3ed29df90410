//! # Kraken Forms
//!
//! Form handlers for the mail archive's login page and admin dashboard:
//! logging in, changing the administrator password, and pointing the
//! backend at a database.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Request bodies, page identifiers, port traits
//! - **Application Layer** ([`application`]) - The three form action handlers
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP transports and page implementations
//! - **Web Layer** (`web`, wasm32 only) - Attaches the handlers to the live page
//!
//! ## Flow
//!
//! Every handler follows the same path: submit event → read inputs →
//! (check the password repeat) → one `POST` with a JSON body → hide the
//! inline error and/or navigate on success, show the error otherwise.
//!
//! | Form | Endpoint | Body |
//! |---|---|---|
//! | Login | `/api/v1/login` | `{ login, passwd }` |
//! | Change password | `/api/v1/passwd` | `{ passwd, passwd_new }` |
//! | Change DB URL | `/api/v1/admin/db_url` | `{ db_url }` |
//!
//! ## Targets
//!
//! Built for `wasm32-unknown-unknown`, the crate exports a start function
//! that binds the forms of the current page. Built natively, it provides the
//! `kraken-forms` CLI, which drives the same handlers from a terminal.
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{FormError, TransportError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::handlers::{
        DbUrlHandler, FormOutcome, LoginHandler, PasswordChangeHandler,
    };
    pub use crate::domain::entities::{
        ApiResponse, DashboardRoutes, ErrorDisplayState, FieldId, PASSWORD_MISMATCH_MESSAGE,
    };
    pub use crate::domain::ports::{ApiTransport, Page};
    pub use crate::error::{FormError, TransportError};
    pub use crate::infrastructure::page::MemoryPage;

    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::infrastructure::http::ReqwestTransport;
}
