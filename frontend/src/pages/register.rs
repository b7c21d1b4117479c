// frontend/src/pages/register.rs
//
// Sign-up form. Validation lives in `RegisterForm::validate` so the reducer
// can reject a bad form without touching the DOM.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::{
    ID_REGISTER_CONFIRM, ID_REGISTER_DEPARTMENT, ID_REGISTER_EMAIL, ID_REGISTER_NAME,
    ID_REGISTER_PASSWORD, ID_REGISTER_POSITION,
};
use crate::dom_utils::{clear_children, document, field_value};
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState, RegisterForm};
use crate::storage::{ActiveView, Route};
use crate::ui_components::{
    create_card, create_form_field, create_primary_button, create_text, on_click, FormFieldConfig,
};

/// Plain-text inputs whose values are kept across re-renders.
const TEXT_FIELDS: [(&str, &str, &str); 4] = [
    (ID_REGISTER_EMAIL, "Email", "email"),
    (ID_REGISTER_NAME, "Name", "text"),
    (ID_REGISTER_DEPARTMENT, "Department (optional)", "text"),
    (ID_REGISTER_POSITION, "Position (optional)", "text"),
];

pub fn render(document: &Document, container: &Element, state: &AppState) -> Result<(), JsValue> {
    let typed: Vec<String> = TEXT_FIELDS
        .iter()
        .map(|(id, _, _)| field_value(document, id))
        .collect();
    clear_children(container);

    let card = create_card(document, Some("Create an account"))?;
    card.class_list().add_1("auth-card")?;

    if let Some(error) = &state.auth.error {
        let error_el = create_text(document, "p", "error", error)?;
        error_el.set_attribute("role", "alert")?;
        card.append_child(&error_el)?;
    }

    for ((id, label, input_type), value) in TEXT_FIELDS.iter().zip(&typed) {
        let mut config = FormFieldConfig::new(id, label, input_type).with_value(value);
        if *id == ID_REGISTER_EMAIL || *id == ID_REGISTER_NAME {
            config = config.required();
        }
        let (row, _) = create_form_field(document, config)?;
        card.append_child(&row)?;
    }

    for (id, label) in [
        (ID_REGISTER_PASSWORD, "Password"),
        (ID_REGISTER_CONFIRM, "Confirm password"),
    ] {
        let (row, _) = create_form_field(document, FormFieldConfig::new(id, label, "password").required())?;
        card.append_child(&row)?;
    }

    let label = if state.auth.is_submitting { "Creating account..." } else { "Sign up" };
    let button = create_primary_button(document, label, state.auth.is_submitting)?;
    button.set_id("register-submit");
    on_click(&button, submit)?;
    card.append_child(&button)?;

    let footer = create_text(document, "p", "muted", "Already registered? ")?;
    let link = create_text(document, "a", "link", "Sign in")?;
    link.set_attribute("href", &Route::new(ActiveView::Login).to_hash())?;
    footer.append_child(&link)?;
    card.append_child(&footer)?;

    container.append_child(&card)?;
    Ok(())
}

fn submit() {
    let Ok(document) = document() else {
        return;
    };
    let form = RegisterForm {
        email: field_value(&document, ID_REGISTER_EMAIL),
        name: field_value(&document, ID_REGISTER_NAME),
        department: field_value(&document, ID_REGISTER_DEPARTMENT),
        position: field_value(&document, ID_REGISTER_POSITION),
        password: field_value(&document, ID_REGISTER_PASSWORD),
        confirm_password: field_value(&document, ID_REGISTER_CONFIRM),
    };
    dispatch_global_message(Message::RegisterRequested(form));
}
