// frontend/src/pages/career_plan.rs
//
// Dedicated career plan form. Always editable; saving returns to the
// dashboard.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::career_plan_form;
use crate::state::{AppState, CareerPlanTarget};
use crate::ui_components::{append_text, create_card, create_spinner};

pub fn render(document: &Document, content: &Element, state: &AppState) -> Result<(), JsValue> {
    let target = CareerPlanTarget::Page;
    let editor = state.career_plan.editor(target);

    append_text(document, content, "h2", "page-title", "Career plan")?;
    append_text(
        document,
        content,
        "p",
        "muted",
        "Describe where you want your career to go. The AI feedback uses this plan as context.",
    )?;

    if editor.is_loading {
        let spinner = create_spinner(document, "Loading career plan...")?;
        content.append_child(&spinner)?;
        return Ok(());
    }

    let card = create_card(document, None)?;
    card.set_id("career-plan-page");
    career_plan_form::render_form(document, &card, editor, target, true)?;
    content.append_child(&card)?;
    Ok(())
}
