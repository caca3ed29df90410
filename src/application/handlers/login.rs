//! Login form handler.

use std::sync::Arc;

use tracing::{debug, info};

use super::{FormOutcome, dispatch, report_failure, still_current};
use crate::domain::entities::{Credentials, DashboardRoutes, Endpoint, FieldId};
use crate::domain::ports::{ApiTransport, Page};
use crate::domain::submission::{SubmissionGate, SubmissionState};

const FORM: &str = "login";

/// Posts the login form and redirects to the matching dashboard.
///
/// There is no local emptiness check: empty input goes to the backend,
/// which decides.
pub struct LoginHandler<T: ApiTransport, P: Page> {
    transport: Arc<T>,
    page: Arc<P>,
    routes: DashboardRoutes,
    gate: SubmissionGate,
}

impl<T: ApiTransport, P: Page> LoginHandler<T, P> {
    pub fn new(transport: Arc<T>, page: Arc<P>, routes: DashboardRoutes) -> Self {
        Self {
            transport,
            page,
            routes,
            gate: SubmissionGate::new(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.gate.state()
    }

    /// Handles one click of the login button.
    ///
    /// # Flow
    ///
    /// 1. Read `login-name` and `passwd`
    /// 2. `POST /api/v1/login` with `{ login, passwd }`
    /// 3. On 2xx, hide the error display and navigate to the admin dashboard
    ///    if the login is the admin identity, else to the general dashboard
    /// 4. Otherwise show the body text, status text, or transport error
    pub async fn submit(&self) -> FormOutcome {
        let ticket = self.gate.begin();
        let credentials = Credentials::new(
            self.page.field_value(FieldId::LoginName),
            self.page.field_value(FieldId::Password),
        );
        debug!(form = FORM, login = %credentials.name, ticket = ticket.number(), "posting login request");

        let result = dispatch(self.transport.as_ref(), Endpoint::Login, &credentials).await;
        if !still_current(&ticket, FORM) {
            return FormOutcome::Superseded;
        }

        match result {
            Ok(_) => {
                let destination = self.routes.destination_for(&credentials.name);
                info!(form = FORM, login = %credentials.name, destination, "login successful");
                self.page.set_error_display(None);
                self.page.navigate(destination);
                FormOutcome::Navigated(destination.to_owned())
            }
            Err(error) => report_failure(self.page.as_ref(), FORM, error),
        }
    }
}
