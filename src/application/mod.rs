//! Application layer: the three form action handlers.
//!
//! Handlers consume the domain port traits and turn one submit event into
//! at most one request and exactly one page update (or none, if superseded).
//!
//! # Available Handlers
//!
//! - [`handlers::LoginHandler`] - Login and dashboard redirection
//! - [`handlers::PasswordChangeHandler`] - Administrator password change
//! - [`handlers::DbUrlHandler`] - Database connection URL change

pub mod handlers;
