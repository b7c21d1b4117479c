//! Career plan editor used by both the profile section and the dedicated
//! page. `target` decides which copy of the form a control writes to.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::messages::Message;
use crate::models::CareerPlanField;
use crate::state::{dispatch_global_message, CareerPlanEditor, CareerPlanTarget};
use crate::toast;
use crate::ui_components::{
    append_text, create_actions_row, create_danger_button, create_form_field, create_primary_button,
    create_secondary_button, on_click, on_input, FormFieldConfig,
};

const DELETE_CONFIRMATION: &str = "Delete your career plan? This cannot be undone.";

fn input_id(target: CareerPlanTarget, field: CareerPlanField) -> String {
    let prefix = match target {
        CareerPlanTarget::Profile => "profile-plan",
        CareerPlanTarget::Page => "career-plan",
    };
    format!("{}-{}", prefix, field.key().replace('_', "-"))
}

/// Editable form over every career plan field plus the Save / Cancel row.
/// `show_delete` adds a Delete button when a stored plan exists.
pub fn render_form(
    document: &Document,
    parent: &Element,
    editor: &CareerPlanEditor,
    target: CareerPlanTarget,
    show_delete: bool,
) -> Result<(), JsValue> {
    let form = document.create_element("div")?;
    form.set_class_name("career-plan-form");

    for field in CareerPlanField::ALL {
        let mut config = FormFieldConfig::new(&input_id(target, field), field.label(), "text")
            .with_value(editor.form.get(field))
            .with_placeholder(field.placeholder());
        if field.is_multiline() {
            config = config.textarea_with_rows(3);
        }
        let (row, control) = create_form_field(document, config)?;
        on_input(&control, move |value| {
            dispatch_global_message(Message::UpdateCareerPlanField { target, field, value });
        })?;
        form.append_child(&row)?;
    }

    let actions = create_actions_row(document)?;

    let save_label = if editor.is_saving { "Saving..." } else { "Save" };
    let save = create_primary_button(document, save_label, editor.is_saving)?;
    on_click(&save, move || dispatch_global_message(Message::SaveCareerPlan(target)))?;
    actions.append_child(&save)?;

    let cancel = create_secondary_button(document, "Cancel", editor.is_saving)?;
    on_click(&cancel, move || dispatch_global_message(Message::CancelCareerPlanEdit(target)))?;
    actions.append_child(&cancel)?;

    if show_delete && editor.has_plan() {
        let label = if editor.is_deleting { "Deleting..." } else { "Delete" };
        let delete = create_danger_button(document, label, editor.is_deleting || editor.is_saving)?;
        on_click(&delete, move || confirm_delete(target))?;
        actions.append_child(&delete)?;
    }

    form.append_child(&actions)?;
    parent.append_child(&form)?;
    Ok(())
}

/// Read-only view of the stored plan; blank fields are skipped.
pub fn render_summary(document: &Document, parent: &Element, editor: &CareerPlanEditor) -> Result<(), JsValue> {
    let Some(plan) = &editor.plan else {
        append_text(
            document,
            parent,
            "p",
            "muted",
            "You have not written a career plan yet. It helps the AI tailor its feedback.",
        )?;
        return Ok(());
    };

    let list = document.create_element("dl")?;
    list.set_class_name("career-plan-summary");
    let mut shown = 0;
    for field in CareerPlanField::ALL {
        let value = plan.fields.get(field);
        if value.trim().is_empty() {
            continue;
        }
        append_text(document, &list, "dt", "", field.label())?;
        append_text(document, &list, "dd", "field-value", value)?;
        shown += 1;
    }
    if shown == 0 {
        append_text(document, parent, "p", "muted", "Your career plan is empty.")?;
    } else {
        parent.append_child(&list)?;
    }
    Ok(())
}

/// Ask before deleting; only a confirmed dialog reaches the reducer.
pub fn confirm_delete(target: CareerPlanTarget) {
    if toast::confirm(DELETE_CONFIRMATION) {
        dispatch_global_message(Message::DeleteCareerPlan(target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_ids_are_unique_per_target() {
        let profile = input_id(CareerPlanTarget::Profile, CareerPlanField::TargetPosition);
        let page = input_id(CareerPlanTarget::Page, CareerPlanField::TargetPosition);
        assert_eq!(profile, "profile-plan-target-position");
        assert_eq!(page, "career-plan-target-position");
    }
}
