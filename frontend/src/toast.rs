//! Notifications: transient toasts in `#toast-root` plus the blocking
//! `alert` / `confirm` dialogs the pages use for failures and deletions.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::ID_TOAST_ROOT;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

pub fn show(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Err(e) = try_show(&document, message, kind) {
        web_sys::console::warn_1(&format!("Could not show toast: {:?}", e).into());
    }
}

fn try_show(document: &Document, message: &str, kind: ToastKind) -> Result<(), JsValue> {
    let root = ensure_root(document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name(kind.class_name());
    toast.set_attribute("role", "status")?;
    toast.set_text_content(Some(message));

    // Newest on top.
    root.prepend_with_node_1(&toast)?;

    Timeout::new(TOAST_LIFETIME_MS, move || toast.remove()).forget();
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(ID_TOAST_ROOT) {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id(ID_TOAST_ROOT);
    root.set_class_name("toast-root");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&root)?;
    Ok(root)
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            web_sys::console::error_1(&message.into());
        }
    }
}

/// Blocking `window.confirm`; anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
