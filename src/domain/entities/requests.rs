//! JSON request bodies and the endpoints they are posted to.

use serde::Serialize;
use std::fmt;

use crate::error::FormError;

/// Message shown when the new password and its repetition differ.
pub const PASSWORD_MISMATCH_MESSAGE: &str =
    "The new password and the repeat new password fields contain different passwords";

/// Backend endpoints consumed by the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    ChangePassword,
    ChangeDbUrl,
}

impl Endpoint {
    /// Absolute request path on the backend.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/api/v1/login",
            Self::ChangePassword => "/api/v1/passwd",
            Self::ChangeDbUrl => "/api/v1/admin/db_url",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Login form contents, posted as `{ "login", "passwd" }`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "login")]
    pub name: String,
    #[serde(rename = "passwd")]
    pub password: String,
}

impl Credentials {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}

/// Password change, posted as `{ "passwd", "passwd_new" }`.
///
/// Can only be built from a matching repeat entry, so a value of this type
/// is always safe to dispatch.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasswordChangeRequest {
    #[serde(rename = "passwd")]
    current_password: String,
    #[serde(rename = "passwd_new")]
    new_password: String,
}

impl PasswordChangeRequest {
    /// Builds the request if `new_password` and `repeat` are byte-equal.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Mismatch`] otherwise.
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        repeat: &str,
    ) -> Result<Self, FormError> {
        let new_password = new_password.into();
        if new_password.as_bytes() != repeat.as_bytes() {
            return Err(FormError::Mismatch);
        }

        Ok(Self {
            current_password: current_password.into(),
            new_password,
        })
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl fmt::Debug for PasswordChangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChangeRequest")
            .field("current_password", &"***")
            .field("new_password", &"***")
            .finish()
    }
}

/// Database connection URL change, posted as `{ "db_url" }`.
///
/// The URL is passed through unchecked; the backend decides whether it can
/// connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbUrlChangeRequest {
    #[serde(rename = "db_url")]
    pub url: String,
}

impl DbUrlChangeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_wire_format() {
        let body = serde_json::to_value(Credentials::new("alice", "secret")).unwrap();
        assert_eq!(body, json!({ "login": "alice", "passwd": "secret" }));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("alice", "secret"));
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_password_change_requires_matching_repeat() {
        let request = PasswordChangeRequest::new("old", "N3w!pass", "N3w!pass").unwrap();
        assert_eq!(request.current_password(), "old");
        assert_eq!(request.new_password(), "N3w!pass");

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "passwd": "old", "passwd_new": "N3w!pass" }));
    }

    #[test]
    fn test_password_change_mismatch() {
        let result = PasswordChangeRequest::new("old", "N3w!pass", "N3w!pasS");
        assert!(matches!(result, Err(FormError::Mismatch)));

        // Unicode-equivalent but byte-different strings do not match
        let result = PasswordChangeRequest::new("old", "caf\u{e9}", "cafe\u{301}");
        assert!(matches!(result, Err(FormError::Mismatch)));
    }

    #[test]
    fn test_db_url_wire_format() {
        let body = serde_json::to_value(DbUrlChangeRequest::new("user:pw@db:3306/mail")).unwrap();
        assert_eq!(body, json!({ "db_url": "user:pw@db:3306/mail" }));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Login.path(), "/api/v1/login");
        assert_eq!(Endpoint::ChangePassword.path(), "/api/v1/passwd");
        assert_eq!(Endpoint::ChangeDbUrl.to_string(), "/api/v1/admin/db_url");
    }
}
