//! Database connection URL handler.

use std::sync::Arc;

use tracing::{debug, info};

use super::{FormOutcome, dispatch, report_failure, still_current};
use crate::domain::entities::{DbUrlChangeRequest, Endpoint, FieldId};
use crate::domain::ports::{ApiTransport, Page};
use crate::domain::submission::{SubmissionGate, SubmissionState};

const FORM: &str = "db_url";

/// Posts the database URL form. The value is not checked locally.
pub struct DbUrlHandler<T: ApiTransport, P: Page> {
    transport: Arc<T>,
    page: Arc<P>,
    gate: SubmissionGate,
}

impl<T: ApiTransport, P: Page> DbUrlHandler<T, P> {
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

    /// Handles one click of the database URL button.
    ///
    /// If the form is submitted again before this request completes, this
    /// call returns [`FormOutcome::Superseded`] and leaves the page alone.
    /// The stale response is dropped whichever order the two complete in, so
    /// the error display always reflects the newest submission.
    pub async fn submit(&self) -> FormOutcome {
        let ticket = self.gate.begin();
        let request = DbUrlChangeRequest::new(self.page.field_value(FieldId::DbUrl));
        debug!(form = FORM, ticket = ticket.number(), "posting database url");

        let result = dispatch(self.transport.as_ref(), Endpoint::ChangeDbUrl, &request).await;
        if !still_current(&ticket, FORM) {
            return FormOutcome::Superseded;
        }

        match result {
            Ok(_) => {
                info!(form = FORM, "database url updated");
                self.page.set_error_display(None);
                FormOutcome::Succeeded
            }
            Err(error) => report_failure(self.page.as_ref(), FORM, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ApiResponse;
    use crate::domain::ports::MockApiTransport;
    use crate::infrastructure::page::MemoryPage;

    #[tokio::test]
    async fn test_posts_url_verbatim() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_post_json()
            .withf(|path, body| {
                path.to_string() == "/api/v1/admin/db_url" && body["db_url"] == "not a url at all"
            })
            .times(1)
            .returning(|_, _| Ok(ApiResponse::new(200, "OK", "")));

        let page = Arc::new(MemoryPage::new().with_field(FieldId::DbUrl, "not a url at all"));
        let handler = DbUrlHandler::new(Arc::new(transport), page.clone());

        assert_eq!(handler.submit().await, FormOutcome::Succeeded);
        assert!(!page.error_display().is_visible());
    }

    #[tokio::test]
    async fn test_rejection_shows_status_text_when_body_empty() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_post_json()
            .returning(|_, _| Ok(ApiResponse::new(401, "Unauthorized", "")));

        let page = Arc::new(MemoryPage::new().with_field(FieldId::DbUrl, "mysql://db/mail"));
        let handler = DbUrlHandler::new(Arc::new(transport), page.clone());

        assert_eq!(
            handler.submit().await,
            FormOutcome::Rejected("Unauthorized".into())
        );
        assert_eq!(page.error_display().message(), Some("Unauthorized"));
    }
}
