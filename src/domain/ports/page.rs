//! Page trait: the DOM contract of the login and admin dashboard pages.

use crate::domain::entities::FieldId;

/// The elements a form handler reads and writes.
///
/// Implementations never create or destroy elements. A missing input reads
/// as the empty string.
///
/// # Implementations
///
/// - `DomPage` - Live browser document (wasm32 only)
/// - [`crate::infrastructure::page::MemoryPage`] - Headless page for tests and tooling
/// - [`crate::infrastructure::page::TerminalPage`] - Terminal rendering for the CLI
pub trait Page {
    /// Current value of an input field.
    fn field_value(&self, field: FieldId) -> String;

    /// `None` hides the error container; `Some(text)` writes `text` and shows it.
    fn set_error_display(&self, message: Option<&str>);

    /// Full-page navigation to `path`.
    fn navigate(&self, path: &str);
}
