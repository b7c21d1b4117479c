//! AI feedback card on the dashboard.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::messages::Message;
use crate::models::{AiFeedback, AiFeedbackResponse, BookRecommendation};
use crate::state::{dispatch_global_message, DashboardState};
use crate::ui_components::{append_text, create_card, create_primary_button, create_spinner, on_click};
use crate::utils::format_timestamp;

/// One narrative block of the feedback bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackSection {
    Strengths,
    Improvements,
    ActionPlan,
    RealityCheck,
    LearningResources,
    Overall,
}

impl FeedbackSection {
    pub const ALL: [FeedbackSection; 6] = [
        FeedbackSection::Strengths,
        FeedbackSection::Improvements,
        FeedbackSection::ActionPlan,
        FeedbackSection::RealityCheck,
        FeedbackSection::LearningResources,
        FeedbackSection::Overall,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FeedbackSection::Strengths => "Strengths",
            FeedbackSection::Improvements => "Areas for improvement",
            FeedbackSection::ActionPlan => "Action plan",
            FeedbackSection::RealityCheck => "Reality check",
            FeedbackSection::LearningResources => "Learning resources",
            FeedbackSection::Overall => "Overall assessment",
        }
    }

    /// Shown when the backend left the section empty.
    pub fn fallback(self) -> &'static str {
        match self {
            FeedbackSection::Strengths => "No strengths were identified in this analysis.",
            FeedbackSection::Improvements => "No improvement areas were identified in this analysis.",
            FeedbackSection::ActionPlan => "No action plan was generated.",
            FeedbackSection::RealityCheck => "No reality check was generated.",
            FeedbackSection::LearningResources => "No learning resources were suggested.",
            FeedbackSection::Overall => "No overall assessment was generated.",
        }
    }

    pub fn text(self, feedback: &AiFeedback) -> &str {
        match self {
            FeedbackSection::Strengths => &feedback.strengths,
            FeedbackSection::Improvements => &feedback.improvements,
            FeedbackSection::ActionPlan => &feedback.action_plan,
            FeedbackSection::RealityCheck => &feedback.reality_check,
            FeedbackSection::LearningResources => &feedback.learning_resources,
            FeedbackSection::Overall => &feedback.overall,
        }
    }

    /// Section text, or the fallback sentence when blank.
    pub fn display_text(self, feedback: &AiFeedback) -> &str {
        let text = self.text(feedback);
        if text.trim().is_empty() {
            self.fallback()
        } else {
            text
        }
    }
}

pub fn render(document: &Document, parent: &Element, dashboard: &DashboardState) -> Result<(), JsValue> {
    let card = create_card(document, Some("AI feedback"))?;
    card.set_id("feedback-panel");

    if let Some(error) = &dashboard.feedback_error {
        append_text(document, &card, "p", "error", error)?;
    }

    let bundle = dashboard
        .feedback
        .as_ref()
        .and_then(|response| response.feedback.as_ref().map(|f| (response, f)));

    match bundle {
        _ if dashboard.is_loading_feedback() => {
            let spinner = create_spinner(document, "Generating AI feedback. This can take up to a minute...")?;
            card.append_child(&spinner)?;
        }
        Some((response, feedback)) => render_feedback(document, &card, response, feedback)?,
        None => {
            append_text(
                document,
                &card,
                "p",
                "muted",
                "Get personalised feedback on your results, based on your evaluation and career plan.",
            )?;
            let button = create_primary_button(document, "Request AI feedback", false)?;
            button.set_id("request-feedback");
            on_click(&button, || dispatch_global_message(Message::RequestFeedback))?;
            card.append_child(&button)?;
        }
    }

    parent.append_child(&card)?;
    Ok(())
}

fn render_feedback(
    document: &Document,
    card: &Element,
    response: &AiFeedbackResponse,
    feedback: &AiFeedback,
) -> Result<(), JsValue> {
    for section in FeedbackSection::ALL {
        let block = document.create_element("section")?;
        block.set_class_name("feedback-section");
        append_text(document, &block, "h4", "", section.title())?;
        append_text(document, &block, "p", "", section.display_text(feedback))?;

        match section {
            FeedbackSection::LearningResources if !response.book_recommendations.is_empty() => {
                let books = render_books(document, &response.book_recommendations)?;
                block.append_child(&books)?;
            }
            FeedbackSection::Overall if !response.career_suggestions.is_empty() => {
                append_text(document, &block, "h5", "", "Suggested career paths")?;
                let list = document.create_element("ul")?;
                for suggestion in &response.career_suggestions {
                    append_text(document, &list, "li", "", suggestion)?;
                }
                block.append_child(&list)?;
            }
            _ => {}
        }

        card.append_child(&block)?;
    }

    if let Some(generated_at) = &response.generated_at {
        let stamp = format!("Generated at {}", format_timestamp(generated_at));
        append_text(document, card, "p", "muted", &stamp)?;
    }
    Ok(())
}

fn render_books(document: &Document, books: &[BookRecommendation]) -> Result<Element, JsValue> {
    let list = document.create_element("ul")?;
    list.set_class_name("book-list");
    for book in books {
        let item = document.create_element("li")?;
        let heading = if book.author.is_empty() {
            book.title.clone()
        } else {
            format!("{} by {}", book.title, book.author)
        };
        append_text(document, &item, "strong", "", &heading)?;
        if !book.category.is_empty() {
            append_text(document, &item, "span", "muted", &format!(" [{}]", book.category))?;
        }
        if !book.reason.is_empty() {
            append_text(document, &item, "p", "", &book.reason)?;
        }
        list.append_child(&item)?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sections_fall_back() {
        let feedback = AiFeedback {
            strengths: "Clear communicator".into(),
            improvements: "   ".into(),
            ..Default::default()
        };
        assert_eq!(FeedbackSection::Strengths.display_text(&feedback), "Clear communicator");
        assert_eq!(
            FeedbackSection::Improvements.display_text(&feedback),
            FeedbackSection::Improvements.fallback()
        );
        assert_eq!(
            FeedbackSection::Overall.display_text(&feedback),
            "No overall assessment was generated."
        );
    }

    #[test]
    fn sections_cover_every_field_once() {
        let feedback = AiFeedback {
            strengths: "a".into(),
            improvements: "b".into(),
            action_plan: "c".into(),
            reality_check: "d".into(),
            learning_resources: "e".into(),
            overall: "f".into(),
        };
        let texts: Vec<&str> = FeedbackSection::ALL.iter().map(|s| s.text(&feedback)).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d", "e", "f"]);
    }
}
