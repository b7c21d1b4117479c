//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for show / hide / activate patterns and form lookups so the
//! pages don't sprinkle `class_list()` and `dyn_into` calls everywhere.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Fetch an element that the base layout always creates.
pub fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} missing", id)))
}

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Mark a sidebar entry as the current page.
pub fn set_active(el: &Element) {
    let _ = el.class_list().add_1("active");
    let _ = el.set_attribute("aria-current", "page");
}

pub fn set_inactive(el: &Element) {
    let _ = el.class_list().remove_1("active");
    let _ = el.remove_attribute("aria-current");
}

pub fn clear_children(el: &Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}

/// Current value of an `<input>` or `<textarea>` by id; empty when missing.
pub fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    element_value(&el)
}

/// Value of an `<input>` or `<textarea>` element.
pub fn element_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
