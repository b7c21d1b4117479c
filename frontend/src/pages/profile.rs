// frontend/src/pages/profile.rs
//
// Basic user information plus the career plan section.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::components::career_plan_form;
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState, CareerPlanTarget, ProfileField, ProfileState};
use crate::ui_components::{
    append_text, create_actions_row, create_card, create_form_field, create_primary_button,
    create_secondary_button, create_spinner, on_click, on_input, FormFieldConfig,
};

pub fn render(document: &Document, content: &Element, state: &AppState) -> Result<(), JsValue> {
    append_text(document, content, "h2", "page-title", "Profile")?;

    render_basic_info(document, content, &state.profile)?;
    render_career_plan(document, content, state)?;
    Ok(())
}

fn render_basic_info(document: &Document, content: &Element, profile: &ProfileState) -> Result<(), JsValue> {
    let card = create_card(document, Some("Basic information"))?;
    card.set_id("profile-basic");
    let actions = create_actions_row(document)?;

    if profile.is_editing {
        for field in ProfileField::ALL {
            let input_type = if field == ProfileField::Email { "email" } else { "text" };
            let (row, control) = create_form_field(
                document,
                FormFieldConfig::new(field.input_id(), field.label(), input_type)
                    .with_value(profile.form.get(field)),
            )?;
            on_input(&control, move |value| {
                dispatch_global_message(Message::UpdateProfileField { field, value });
            })?;
            card.append_child(&row)?;
        }

        let save = create_primary_button(document, "Save", false)?;
        save.set_id("profile-save");
        on_click(&save, || dispatch_global_message(Message::SaveProfile))?;
        actions.append_child(&save)?;

        let cancel = create_secondary_button(document, "Cancel", false)?;
        on_click(&cancel, || dispatch_global_message(Message::CancelProfileEdit))?;
        actions.append_child(&cancel)?;
    } else {
        let list = document.create_element("dl")?;
        for field in ProfileField::ALL {
            let value = profile.form.get(field);
            let shown = if value.is_empty() { "Not set" } else { value };
            append_text(document, &list, "dt", "", field.label())?;
            append_text(document, &list, "dd", "field-value", shown)?;
        }
        card.append_child(&list)?;

        let edit = create_secondary_button(document, "Edit", false)?;
        edit.set_id("profile-edit");
        on_click(&edit, || dispatch_global_message(Message::EditProfile))?;
        actions.append_child(&edit)?;
    }

    card.append_child(&actions)?;
    content.append_child(&card)?;
    Ok(())
}

fn render_career_plan(document: &Document, content: &Element, state: &AppState) -> Result<(), JsValue> {
    let target = CareerPlanTarget::Profile;
    let editor = state.career_plan.editor(target);

    let card = create_card(document, Some("Career plan"))?;
    card.set_id("profile-career-plan");

    if editor.is_loading {
        let spinner = create_spinner(document, "Loading career plan...")?;
        card.append_child(&spinner)?;
    } else if editor.is_editing {
        career_plan_form::render_form(document, &card, editor, target, false)?;
    } else {
        career_plan_form::render_summary(document, &card, editor)?;

        let actions = create_actions_row(document)?;
        let label = if editor.has_plan() { "Edit" } else { "Create" };
        let button = create_primary_button(document, label, false)?;
        button.set_id("career-plan-edit");
        on_click(&button, move || dispatch_global_message(Message::EditCareerPlan(target)))?;
        actions.append_child(&button)?;
        card.append_child(&actions)?;
    }

    content.append_child(&card)?;
    Ok(())
}
