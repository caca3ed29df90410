//! Headless page holding fields and display state in memory.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::entities::{ErrorDisplayState, FieldId};
use crate::domain::ports::Page;

/// A page without a browser.
///
/// Inputs are set up front (or between submissions), and every display
/// change and navigation is recorded for inspection.
#[derive(Debug, Default)]
pub struct MemoryPage {
    fields: Mutex<HashMap<FieldId, String>>,
    error_display: Mutex<ErrorDisplayState>,
    navigations: Mutex<Vec<String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setup.
    pub fn with_field(self, field: FieldId, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    /// Types a value into a field.
    pub fn set_field(&self, field: FieldId, value: impl Into<String>) {
        lock(&self.fields).insert(field, value.into());
    }

    pub fn error_display(&self) -> ErrorDisplayState {
        lock(&self.error_display).clone()
    }

    /// Every path navigated to, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        lock(&self.navigations).clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        lock(&self.navigations).last().cloned()
    }
}

impl Page for MemoryPage {
    fn field_value(&self, field: FieldId) -> String {
        lock(&self.fields).get(&field).cloned().unwrap_or_default()
    }

    fn set_error_display(&self, message: Option<&str>) {
        *lock(&self.error_display) = ErrorDisplayState::from_message(message);
    }

    fn navigate(&self, path: &str) {
        debug!(path, "navigating");
        lock(&self.navigations).push(path.to_owned());
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let page = MemoryPage::new();
        assert_eq!(page.field_value(FieldId::DbUrl), "");
    }

    #[test]
    fn test_fields_can_change_between_reads() {
        let page = MemoryPage::new().with_field(FieldId::DbUrl, "first");
        assert_eq!(page.field_value(FieldId::DbUrl), "first");

        page.set_field(FieldId::DbUrl, "second");
        assert_eq!(page.field_value(FieldId::DbUrl), "second");
    }

    #[test]
    fn test_error_display_toggles() {
        let page = MemoryPage::new();
        assert_eq!(page.error_display(), ErrorDisplayState::Hidden);

        page.set_error_display(Some("Unauthorized"));
        assert_eq!(
            page.error_display(),
            ErrorDisplayState::Visible("Unauthorized".into())
        );

        page.set_error_display(None);
        assert_eq!(page.error_display(), ErrorDisplayState::Hidden);
    }

    #[test]
    fn test_navigations_are_recorded_in_order() {
        let page = MemoryPage::new();
        assert_eq!(page.last_navigation(), None);

        page.navigate("/dash");
        page.navigate("/admin_dash");
        assert_eq!(page.navigations(), vec!["/dash", "/admin_dash"]);
        assert_eq!(page.last_navigation().as_deref(), Some("/admin_dash"));
    }
}
