// frontend/src/views.rs
//
// Renders the page for the current route from the global state. Called once
// per dispatch by the command executor.
//
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::layout;
use crate::constants::{ID_AUTH_CONTAINER, ID_CONTENT, ID_SHELL};
use crate::dom_utils::{clear_children, document, hide, require_element, show};
use crate::pages;
use crate::state::{AppState, APP_STATE};
use crate::storage::ActiveView;
use crate::ui_components::create_spinner;

pub fn render_active_view() -> Result<(), JsValue> {
    let document = document()?;
    APP_STATE.with(|state| render(&state.borrow(), &document))
}

/// Render `state` into the base layout built by `ui::setup`.
pub fn render(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let auth = require_element(document, ID_AUTH_CONTAINER)?;
    let shell = require_element(document, ID_SHELL)?;

    match state.route.view {
        ActiveView::Login | ActiveView::Register => {
            hide(&shell);
            show(&auth);
            // Auth pages clear the container themselves after reading back
            // what the user typed.
            if state.route.view == ActiveView::Login {
                pages::login::render(document, &auth, state)
            } else {
                pages::register::render(document, &auth, state)
            }
        }
        view => {
            hide(&auth);
            clear_children(&auth);
            show(&shell);

            layout::render_header(document, state)?;
            layout::render_sidebar(document, state)?;

            let content = require_element(document, ID_CONTENT)?;
            clear_children(&content);

            if state.current_user.is_none() {
                let spinner = create_spinner(document, "Loading...")?;
                content.append_child(&spinner)?;
                return Ok(());
            }

            match view {
                ActiveView::Dashboard => pages::dashboard::render(document, &content, state),
                ActiveView::Evaluation => pages::evaluation::render(document, &content, state),
                ActiveView::Profile => pages::profile::render(document, &content, state),
                ActiveView::CareerPlan => pages::career_plan::render(document, &content, state),
                ActiveView::Login | ActiveView::Register => Ok(()),
            }
        }
    }
}
