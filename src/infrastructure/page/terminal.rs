//! Terminal rendering of the page for the CLI.

use colored::Colorize;
use url::Url;

use super::MemoryPage;
use crate::domain::entities::{ErrorDisplayState, FieldId};
use crate::domain::ports::Page;

/// A [`MemoryPage`] that prints display changes and navigations.
///
/// Errors go to stderr in red. Navigation prints the absolute URL the
/// browser would have loaded.
#[derive(Debug)]
pub struct TerminalPage {
    inner: MemoryPage,
    base_url: Url,
}

impl TerminalPage {
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: MemoryPage::new(),
            base_url,
        }
    }

    pub fn set_field(&self, field: FieldId, value: impl Into<String>) {
        self.inner.set_field(field, value);
    }

    pub fn error_display(&self) -> ErrorDisplayState {
        self.inner.error_display()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.inner.last_navigation()
    }

    /// Absolute URL for a site path, relative to the API base.
    pub fn resolve(&self, path: &str) -> String {
        self.base_url
            .join(path)
            .map(String::from)
            .unwrap_or_else(|_| path.to_owned())
    }
}

impl Page for TerminalPage {
    fn field_value(&self, field: FieldId) -> String {
        self.inner.field_value(field)
    }

    fn set_error_display(&self, message: Option<&str>) {
        if let Some(text) = message {
            eprintln!("{} {}", "✗".red().bold(), text.red());
        }
        self.inner.set_error_display(message);
    }

    fn navigate(&self, path: &str) {
        println!("{} {}", "→".green().bold(), self.resolve(path).bright_cyan());
        self.inner.navigate(path);
    }
}
