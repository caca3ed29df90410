//! Administrator password change handler.

use std::sync::Arc;

use tracing::{debug, info};

use super::{FormOutcome, dispatch, report_failure, still_current};
use crate::domain::entities::{Endpoint, FieldId, PasswordChangeRequest};
use crate::domain::ports::{ApiTransport, Page};
use crate::domain::submission::{SubmissionGate, SubmissionState};

const FORM: &str = "passwd";

/// Posts the password change form after checking the repeat entry.
///
/// The request is sent if and only if the new password and its repetition
/// are byte-equal. Password complexity is left to the backend.
pub struct PasswordChangeHandler<T: ApiTransport, P: Page> {
    transport: Arc<T>,
    page: Arc<P>,
    gate: SubmissionGate,
}

impl<T: ApiTransport, P: Page> PasswordChangeHandler<T, P> {
    pub fn new(transport: Arc<T>, page: Arc<P>) -> Self {
        Self {
            transport,
            page,
            gate: SubmissionGate::new(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.gate.state()
    }

    /// Handles one click of the password change button.
    pub async fn submit(&self) -> FormOutcome {
        let ticket = self.gate.begin();
        let repeat = self.page.field_value(FieldId::RepeatPassword);
        let request = match PasswordChangeRequest::new(
            self.page.field_value(FieldId::CurrentPassword),
            self.page.field_value(FieldId::NewPassword),
            &repeat,
        ) {
            Ok(request) => request,
            Err(error) => return report_failure(self.page.as_ref(), FORM, error),
        };
        debug!(form = FORM, ticket = ticket.number(), "posting password change");

        let result = dispatch(self.transport.as_ref(), Endpoint::ChangePassword, &request).await;
        if !still_current(&ticket, FORM) {
            return FormOutcome::Superseded;
        }

        match result {
            Ok(_) => {
                info!(form = FORM, "password changed");
                self.page.set_error_display(None);
                FormOutcome::Succeeded
            }
            Err(error) => report_failure(self.page.as_ref(), FORM, error),
        }
    }
}
