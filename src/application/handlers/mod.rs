//! Form action handlers and their shared request/response plumbing.

pub mod db_url;
pub mod login;
pub mod password;

pub use db_url::DbUrlHandler;
pub use login::LoginHandler;
pub use password::PasswordChangeHandler;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::entities::{ApiResponse, Endpoint};
use crate::domain::ports::{ApiTransport, Page};
use crate::domain::submission::{SubmissionState, SubmissionTicket};
use crate::error::FormError;

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Request accepted; error display hidden.
    Succeeded,
    /// Request accepted; browser sent to the given path.
    Navigated(String),
    /// Backend rejected the request or it never completed; message displayed.
    Rejected(String),
    /// Local validation failed; message displayed, nothing sent.
    Invalid(String),
    /// A newer submission of the same form started; page left untouched.
    Superseded,
}

impl FormOutcome {
    /// Terminal lifecycle state this outcome corresponds to.
    pub fn state(&self) -> SubmissionState {
        match self {
            Self::Succeeded | Self::Navigated(_) => SubmissionState::Success,
            Self::Rejected(_) | Self::Invalid(_) => SubmissionState::Failed,
            Self::Superseded => SubmissionState::Idle,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state() == SubmissionState::Success
    }
}

/// Encodes `body`, posts it, and classifies the response.
pub(crate) async fn dispatch<T, B>(
    transport: &T,
    endpoint: Endpoint,
    body: &B,
) -> Result<ApiResponse, FormError>
where
    T: ApiTransport + ?Sized,
    B: Serialize,
{
    let body = serde_json::to_value(body)?;
    let response = transport.post_json(endpoint.path(), &body).await?;
    debug!(endpoint = %endpoint, status = response.status, "request returned");

    if response.is_success() {
        Ok(response)
    } else {
        Err(FormError::rejected(
            response.status,
            response.failure_message(),
        ))
    }
}

/// Shows `error` in the page's error display and maps it to an outcome.
pub(crate) fn report_failure<P>(page: &P, form: &'static str, error: FormError) -> FormOutcome
where
    P: Page + ?Sized,
{
    let message = error.to_string();
    match &error {
        FormError::Rejected { status, .. } => {
            warn!(form, status, "submission rejected: {}", message)
        }
        FormError::Transport(_) => warn!(form, "request failed: {}", message),
        FormError::Mismatch | FormError::Encode(_) => debug!(form, "submission invalid"),
    }

    page.set_error_display(Some(&message));
    if error.is_local() {
        FormOutcome::Invalid(message)
    } else {
        FormOutcome::Rejected(message)
    }
}

/// Returns `false` (and logs) if a newer submission owns the page.
pub(crate) fn still_current(ticket: &SubmissionTicket<'_>, form: &'static str) -> bool {
    if ticket.is_current() {
        true
    } else {
        debug!(form, ticket = ticket.number(), "superseded, discarding response");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockApiTransport;
    use crate::error::TransportError;

    #[tokio::test]
    async fn test_dispatch_classifies_status() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_, _| Ok(ApiResponse::new(400, "Bad Request", "")));

        let result = dispatch(&transport, Endpoint::ChangeDbUrl, &serde_json::json!({})).await;
        match result {
            Err(FormError::Rejected { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Bad Request");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_passes_transport_error() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_post_json()
            .returning(|_, _| Err(TransportError::new("network down")));

        let result = dispatch(&transport, Endpoint::Login, &serde_json::json!({})).await;
        assert!(matches!(result, Err(FormError::Transport(_))));
    }

    #[test]
    fn test_outcome_states() {
        assert_eq!(FormOutcome::Succeeded.state(), SubmissionState::Success);
        assert_eq!(
            FormOutcome::Navigated("/dash".into()).state(),
            SubmissionState::Success
        );
        assert_eq!(
            FormOutcome::Rejected("x".into()).state(),
            SubmissionState::Failed
        );
        assert!(!FormOutcome::Superseded.is_success());
    }
}
