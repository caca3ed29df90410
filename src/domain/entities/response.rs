//! Completed HTTP exchange as seen by the form handlers.

/// Status line and body of a response that arrived.
///
/// Transports fill `body` with an empty string when the body cannot be read
/// as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Message to display for a rejected request.
    ///
    /// Prefers the body, then the status text. Falls back to `HTTP <code>`
    /// when the status has no reason phrase.
    pub fn failure_message(&self) -> String {
        if !self.body.is_empty() {
            self.body.clone()
        } else if !self.status_text.is_empty() {
            self.status_text.clone()
        } else {
            format!("HTTP {}", self.status)
        }
    }
}
