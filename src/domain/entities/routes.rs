//! Post-login navigation targets.

/// Where a successful login sends the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRoutes {
    /// Login value that identifies the administrator.
    pub admin_login: String,
    pub admin_dashboard: String,
    pub dashboard: String,
}

impl DashboardRoutes {
    pub fn new(
        admin_login: impl Into<String>,
        admin_dashboard: impl Into<String>,
        dashboard: impl Into<String>,
    ) -> Self {
        Self {
            admin_login: admin_login.into(),
            admin_dashboard: admin_dashboard.into(),
            dashboard: dashboard.into(),
        }
    }

    /// Picks the dashboard for the submitted login value.
    ///
    /// Exact match only: `"Admin"` and `" admin"` go to the general dashboard.
    pub fn destination_for(&self, login: &str) -> &str {
        if login == self.admin_login {
            &self.admin_dashboard
        } else {
            &self.dashboard
        }
    }
}

impl Default for DashboardRoutes {
    fn default() -> Self {
        Self::new("admin", "/admin_dash", "/dash")
    }
}
