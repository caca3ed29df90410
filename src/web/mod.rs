//! Browser entry point for the login page and the admin dashboard.
//!
//! [`start`] runs once when the module loads. It attaches listeners to the
//! submit controls present on the current page and leaves the rest of the
//! markup alone:
//!
//! - `btn_login` → [`LoginHandler`]
//! - `passwd-submit` → [`PasswordChangeHandler`]
//! - `db-url-submit` → [`DbUrlHandler`]
//!
//! Pressing `Enter` in any input of a form submits that form as well.

use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, KeyboardEvent};

use crate::application::handlers::{DbUrlHandler, LoginHandler, PasswordChangeHandler};
use crate::config::Config;
use crate::domain::entities::ControlId;
use crate::infrastructure::http::FetchTransport;
use crate::infrastructure::page::DomPage;

/// Wires the forms of the current page.
///
/// # Errors
///
/// Fails only if there is no window or document to attach to.
#[wasm_bindgen(start)]
// Handlers hold their ports in `Arc`; the browser drives them on one thread.
#[allow(clippy::arc_with_non_send_sync)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    let config = Config::for_browser();
    let transport = Arc::new(FetchTransport::new(config.api_base_url.clone()));
    let page = Arc::new(DomPage::new(window, document.clone()));

    let login = Rc::new(LoginHandler::new(
        transport.clone(),
        page.clone(),
        config.routes(),
    ));
    bind_form(&document, ControlId::Login, move || {
        let login = login.clone();
        async move {
            login.submit().await;
        }
    })?;

    let passwd = Rc::new(PasswordChangeHandler::new(transport.clone(), page.clone()));
    bind_form(&document, ControlId::ChangePassword, move || {
        let passwd = passwd.clone();
        async move {
            passwd.submit().await;
        }
    })?;

    let db_url = Rc::new(DbUrlHandler::new(transport, page));
    bind_form(&document, ControlId::ChangeDbUrl, move || {
        let db_url = db_url.clone();
        async move {
            db_url.submit().await;
        }
    })?;

    Ok(())
}

/// Attaches click and Enter-key listeners for one form.
///
/// Skips forms whose submit control is not on this page. Listeners live for
/// the lifetime of the page.
fn bind_form<F, Fut>(document: &Document, control: ControlId, submit: F) -> Result<(), JsValue>
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let Some(button) = document.get_element_by_id(control.id()) else {
        debug!(control = control.id(), "control not on this page");
        return Ok(());
    };
    let submit = Rc::new(submit);

    let on_click = {
        let submit = submit.clone();
        Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            spawn_local(submit());
        }))
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(
        move |event: KeyboardEvent| {
            let code = event.code();
            if code == "Enter" || code == "NumpadEnter" {
                event.prevent_default();
                spawn_local(submit());
            }
        },
    ));
    for field in control.fields() {
        if let Some(input) = document.get_element_by_id(field.id()) {
            input.add_event_listener_with_callback(
                "keydown",
                on_key_down.as_ref().unchecked_ref(),
            )?;
        }
    }
    on_key_down.forget();

    debug!(control = control.id(), "form bound");
    Ok(())
}
