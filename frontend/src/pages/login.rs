// frontend/src/pages/login.rs
//
// Email + password sign-in form.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::{APP_TITLE, ID_LOGIN_EMAIL, ID_LOGIN_PASSWORD, QUERY_REGISTERED};
use crate::dom_utils::{clear_children, document, field_value};
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState};
use crate::storage::{ActiveView, Route};
use crate::ui_components::{
    append_text, create_card, create_form_field, create_primary_button, create_text, on_click, on_enter,
    FormFieldConfig,
};

pub fn render(document: &Document, container: &Element, state: &AppState) -> Result<(), JsValue> {
    // Survive the re-render after a failed attempt.
    let typed_email = field_value(document, ID_LOGIN_EMAIL);
    clear_children(container);

    let card = create_card(document, Some(APP_TITLE))?;
    card.class_list().add_1("auth-card")?;
    append_text(document, &card, "p", "muted", "Sign in to continue.")?;

    if state.route.query_value(QUERY_REGISTERED) == Some("true") {
        append_text(
            document,
            &card,
            "p",
            "notice",
            "Registration complete. Please sign in with your new account.",
        )?;
    }
    if let Some(error) = &state.auth.error {
        let error_el = create_text(document, "p", "error", error)?;
        error_el.set_attribute("role", "alert")?;
        card.append_child(&error_el)?;
    }

    let (email_row, _) = create_form_field(
        document,
        FormFieldConfig::new(ID_LOGIN_EMAIL, "Email", "email")
            .with_value(&typed_email)
            .required(),
    )?;
    card.append_child(&email_row)?;

    let (password_row, password) = create_form_field(
        document,
        FormFieldConfig::new(ID_LOGIN_PASSWORD, "Password", "password").required(),
    )?;
    on_enter(&password, submit)?;
    card.append_child(&password_row)?;

    let label = if state.auth.is_submitting { "Signing in..." } else { "Sign in" };
    let button = create_primary_button(document, label, state.auth.is_submitting)?;
    button.set_id("login-submit");
    on_click(&button, submit)?;
    card.append_child(&button)?;

    let footer = create_text(document, "p", "muted", "No account yet? ")?;
    let link = create_text(document, "a", "link", "Sign up")?;
    link.set_attribute("href", &Route::new(ActiveView::Register).to_hash())?;
    footer.append_child(&link)?;
    card.append_child(&footer)?;

    container.append_child(&card)?;
    Ok(())
}

fn submit() {
    let Ok(document) = document() else {
        return;
    };
    dispatch_global_message(Message::LoginRequested {
        email: field_value(&document, ID_LOGIN_EMAIL),
        password: field_value(&document, ID_LOGIN_PASSWORD),
    });
}
