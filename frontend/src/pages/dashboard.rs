// frontend/src/pages/dashboard.rs
//
// Results overview: summary figures, the radar chart against the company
// average and the AI feedback panel.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::{feedback_panel, radar_chart};
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState, DashboardState};
use crate::storage::{ActiveView, Route};
use crate::ui_components::{
    append_text, create_card, create_primary_button, create_spinner, on_click,
};
use crate::utils::format_score;

pub fn render(document: &Document, content: &Element, state: &AppState) -> Result<(), JsValue> {
    let dashboard = &state.dashboard;
    append_text(document, content, "h2", "page-title", "Dashboard")?;

    if dashboard.is_loading {
        let spinner = create_spinner(document, "Loading your results...")?;
        content.append_child(&spinner)?;
        return Ok(());
    }

    if let Some(error) = &dashboard.error {
        let card = create_card(document, None)?;
        append_text(document, &card, "p", "error", error)?;
        let reload = create_primary_button(document, "Reload", false)?;
        on_click(&reload, || dispatch_global_message(Message::ReloadResults))?;
        card.append_child(&reload)?;
        content.append_child(&card)?;
        return Ok(());
    }

    if !dashboard.has_evaluation() {
        let card = create_card(document, Some("You have not been evaluated yet"))?;
        card.set_id("no-evaluation");
        append_text(
            document,
            &card,
            "p",
            "muted",
            "Answer the questionnaire to see how your competencies compare with the company average.",
        )?;
        let start = create_primary_button(document, "Start evaluation", false)?;
        on_click(&start, || {
            dispatch_global_message(Message::Navigate(Route::new(ActiveView::Evaluation)))
        })?;
        card.append_child(&start)?;
        content.append_child(&card)?;
        return Ok(());
    }

    render_summary(document, content, dashboard)?;

    let chart_card = create_card(document, Some("Competency overview"))?;
    radar_chart::mount(document, &chart_card, &dashboard.radar_data())?;
    content.append_child(&chart_card)?;

    feedback_panel::render(document, content, dashboard)?;
    Ok(())
}

fn render_summary(document: &Document, content: &Element, dashboard: &DashboardState) -> Result<(), JsValue> {
    let grid = document.create_element("div")?;
    grid.set_class_name("summary-grid");

    let figures = [
        ("Evaluated competencies", dashboard.competency_count().to_string()),
        ("Average score", format_score(dashboard.average_score())),
        ("Participants", dashboard.participant_count().to_string()),
    ];
    for (label, value) in figures {
        let card = create_card(document, None)?;
        append_text(document, &card, "div", "muted", label)?;
        append_text(document, &card, "div", "summary-value", &value)?;
        grid.append_child(&card)?;
    }

    content.append_child(&grid)?;
    Ok(())
}
