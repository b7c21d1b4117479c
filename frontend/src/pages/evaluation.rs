// frontend/src/pages/evaluation.rs
//
// The questionnaire, one statement at a time on a five point scale.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::SCORE_OPTIONS;
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState, EvaluationState};
use crate::ui_components::{
    append_text, create_actions_row, create_button, create_card, create_primary_button,
    create_secondary_button, create_spinner, on_click, ButtonConfig,
};

pub fn render(document: &Document, content: &Element, state: &AppState) -> Result<(), JsValue> {
    let eval = &state.evaluation;
    append_text(document, content, "h2", "page-title", "Competency evaluation")?;

    if eval.is_loading {
        let spinner = create_spinner(document, "Loading questions...")?;
        content.append_child(&spinner)?;
        return Ok(());
    }
    if let Some(error) = &eval.error {
        let card = create_card(document, None)?;
        append_text(document, &card, "p", "error", error)?;
        content.append_child(&card)?;
        return Ok(());
    }
    let Some(question) = eval.current_question() else {
        let card = create_card(document, None)?;
        append_text(document, &card, "p", "muted", "No questions found.")?;
        content.append_child(&card)?;
        return Ok(());
    };

    render_progress(document, content, eval)?;

    let card = create_card(document, None)?;
    card.set_id("question-card");
    if let Some(name) = question.competency_name() {
        append_text(document, &card, "div", "muted competency-name", name)?;
    }
    append_text(document, &card, "h3", "question-text", &question.question.text)?;

    let options = document.create_element("div")?;
    options.set_class_name("score-options");
    options.set_attribute("role", "radiogroup")?;
    let selected = eval.current_answer();
    let question_id = question.id();
    for (score, label) in SCORE_OPTIONS {
        let is_selected = selected == Some(score);
        let class_name = if is_selected { "btn score-option selected" } else { "btn score-option" };
        let option = create_button(
            document,
            ButtonConfig::new(&format!("{}. {}", score, label))
                .with_id(&format!("score-{}", score))
                .with_class(class_name)
                .disabled_if(eval.is_submitting),
        )?;
        option.set_attribute("role", "radio")?;
        option.set_attribute("aria-checked", if is_selected { "true" } else { "false" })?;
        on_click(&option, move || {
            dispatch_global_message(Message::SelectAnswer { question_id, score })
        })?;
        options.append_child(&option)?;
    }
    card.append_child(&options)?;

    let actions = create_actions_row(document)?;

    let previous = create_secondary_button(document, "Previous", eval.is_first() || eval.is_submitting)?;
    previous.set_id("previous-question");
    on_click(&previous, || dispatch_global_message(Message::PreviousQuestion))?;
    actions.append_child(&previous)?;

    if eval.is_last() {
        let label = if eval.is_submitting { "Submitting..." } else { "Submit" };
        let submit = create_primary_button(document, label, !eval.can_submit())?;
        submit.set_id("submit-answers");
        on_click(&submit, || dispatch_global_message(Message::SubmitAnswers))?;
        actions.append_child(&submit)?;
    } else {
        let next = create_primary_button(document, "Next", eval.is_submitting)?;
        next.set_id("next-question");
        on_click(&next, || dispatch_global_message(Message::NextQuestion))?;
        actions.append_child(&next)?;
    }

    card.append_child(&actions)?;
    content.append_child(&card)?;
    Ok(())
}

fn render_progress(document: &Document, content: &Element, eval: &EvaluationState) -> Result<(), JsValue> {
    let wrapper = document.create_element("div")?;
    wrapper.set_class_name("progress-wrapper");

    let caption = format!(
        "Question {} of {} · {} answered",
        eval.current_index + 1,
        eval.questions.len(),
        eval.answered_count()
    );
    append_text(document, &wrapper, "p", "muted", &caption)?;

    let track = document.create_element("div")?;
    track.set_class_name("progress");
    let bar = document.create_element("div")?;
    bar.set_class_name("progress-bar");
    bar.set_attribute(
        "style",
        &format!("width: {:.0}%; background: {};", eval.progress_percent(), css_var!("primary")),
    )?;
    track.append_child(&bar)?;
    wrapper.append_child(&track)?;

    content.append_child(&wrapper)?;
    Ok(())
}
