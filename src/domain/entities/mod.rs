//! Request-scoped values exchanged between the page, the handlers and the
//! backend API.
//!
//! Nothing here outlives the handling of a single submission.
//!
//! # Entity Types
//!
//! - [`Credentials`], [`PasswordChangeRequest`], [`DbUrlChangeRequest`] - JSON request bodies
//! - [`ApiResponse`] - A completed HTTP exchange as the handlers see it
//! - [`ErrorDisplayState`] - Visibility and text of the inline error area
//! - [`FieldId`], [`ControlId`] - Stable element identifiers of the page markup
//! - [`DashboardRoutes`] - Post-login destinations

pub mod page;
pub mod requests;
pub mod response;
pub mod routes;

pub use page::{
    ControlId, ERROR_CONTAINER_ID, ERROR_HIDDEN_CLASS, ERROR_MESSAGE_ID, ERROR_VISIBLE_CLASS,
    ErrorDisplayState, FieldId,
};
pub use requests::{
    Credentials, DbUrlChangeRequest, Endpoint, PASSWORD_MISMATCH_MESSAGE, PasswordChangeRequest,
};
pub use response::ApiResponse;
pub use routes::DashboardRoutes;
