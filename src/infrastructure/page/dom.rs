//! Live browser document.

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, Window};

use crate::domain::entities::{
    ERROR_CONTAINER_ID, ERROR_HIDDEN_CLASS, ERROR_MESSAGE_ID, ERROR_VISIBLE_CLASS, FieldId,
};
use crate::domain::ports::Page;

/// The current document of a browser window.
///
/// Missing elements are logged and skipped; nothing here throws into the
/// page.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Page for DomPage {
    fn field_value(&self, field: FieldId) -> String {
        self.document
            .get_element_by_id(field.id())
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_else(|| {
                warn!(field = field.id(), "input not found on page");
                String::new()
            })
    }

    fn set_error_display(&self, message: Option<&str>) {
        let Some(container) = self.document.get_element_by_id(ERROR_CONTAINER_ID) else {
            warn!(id = ERROR_CONTAINER_ID, "error container not found on page");
            return;
        };
        let classes = container.class_list();

        let toggled = match message {
            Some(text) => {
                if let Some(node) = self.document.get_element_by_id(ERROR_MESSAGE_ID) {
                    node.set_text_content(Some(text));
                }
                classes
                    .remove_1(ERROR_HIDDEN_CLASS)
                    .and_then(|()| classes.add_1(ERROR_VISIBLE_CLASS))
            }
            None => classes
                .remove_1(ERROR_VISIBLE_CLASS)
                .and_then(|()| classes.add_1(ERROR_HIDDEN_CLASS)),
        };

        if toggled.is_err() {
            warn!(id = ERROR_CONTAINER_ID, "failed to toggle error container");
        }
    }

    fn navigate(&self, path: &str) {
        if self.window.location().set_href(path).is_err() {
            warn!(path, "navigation failed");
        }
    }
}
