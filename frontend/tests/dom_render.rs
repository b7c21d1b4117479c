//! Browser tests for the render layer.
//!
//! Run with: wasm-pack test --headless --chrome frontend
#![cfg(target_arch = "wasm32")]

use competency_dashboard_frontend::constants::{ID_CONTENT, ID_RADAR_CANVAS, ID_SIDEBAR};
use competency_dashboard_frontend::models::{
    CompanyAverageCompetency, CompetencyItem, CompetencyResult, Question, QuestionWithAnswer, User,
    UserCompetency,
};
use competency_dashboard_frontend::state::AppState;
use competency_dashboard_frontend::storage::{ActiveView, Route};
use competency_dashboard_frontend::ui_components::append_text;
use competency_dashboard_frontend::{ui, views};
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    ui::setup::create_base_ui(&document).unwrap();
    document
}

fn signed_in(view: ActiveView) -> AppState {
    let mut state = AppState::new();
    state.route = Route::new(view);
    state.current_user = Some(User {
        id: 1,
        email: "hanako@example.com".into(),
        name: "Hanako".into(),
        department: None,
        position: None,
        is_active: true,
        is_superuser: false,
    });
    state
}

#[wasm_bindgen_test]
fn sidebar_highlights_the_active_page() {
    let document = document();
    let state = signed_in(ActiveView::Profile);
    views::render(&state, &document).unwrap();

    let sidebar = document.get_element_by_id(ID_SIDEBAR).unwrap();
    assert_eq!(sidebar.children().length(), 4);
    let active = document.get_element_by_id("nav-profile").unwrap();
    assert!(active.class_list().contains("active"));
    let other = document.get_element_by_id("nav-dashboard").unwrap();
    assert!(!other.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn dashboard_without_results_invites_evaluation() {
    let document = document();
    let state = signed_in(ActiveView::Dashboard);
    views::render(&state, &document).unwrap();

    assert!(document.get_element_by_id("no-evaluation").is_some());
    assert!(document.get_element_by_id(ID_RADAR_CANVAS).is_none());
}

#[wasm_bindgen_test]
fn dashboard_with_results_draws_the_chart() {
    let document = document();
    let mut state = signed_in(ActiveView::Dashboard);
    state.dashboard.results = Some(CompetencyResult {
        user_competencies: vec![UserCompetency {
            id: 1,
            user_id: 1,
            competency_item_id: 1,
            score: 3.0,
            calculated_at: None,
            competency_item: Some(CompetencyItem {
                id: 1,
                name: "Communication".into(),
                description: None,
                order: 1,
                created_at: None,
                updated_at: None,
            }),
        }],
        company_averages: vec![CompanyAverageCompetency {
            id: 1,
            competency_item_id: 1,
            average_score: 2.5,
            total_users: 30,
            calculated_at: None,
            competency_item: None,
        }],
    });
    views::render(&state, &document).unwrap();

    assert!(document.get_element_by_id(ID_RADAR_CANVAS).is_some());
    assert!(document.get_element_by_id("request-feedback").is_some());
    let content = document.get_element_by_id(ID_CONTENT).unwrap();
    assert!(content.text_content().unwrap().contains("30"));
}

#[wasm_bindgen_test]
fn loading_user_shows_spinner() {
    let document = document();
    let mut state = signed_in(ActiveView::Evaluation);
    state.current_user = None;
    views::render(&state, &document).unwrap();

    let content = document.get_element_by_id(ID_CONTENT).unwrap();
    assert_eq!(content.children().length(), 1);
    assert!(content.first_element_child().unwrap().class_list().contains("loading"));
}

#[wasm_bindgen_test]
fn append_text_adds_a_styled_child() {
    let document = document();
    let parent = document.create_element("div").unwrap();
    let line = append_text(&document, &parent, "p", "muted", "Hello").unwrap();

    assert_eq!(parent.children().length(), 1);
    assert_eq!(line.class_name(), "muted");
    assert_eq!(parent.text_content().unwrap(), "Hello");
}

#[wasm_bindgen_test]
fn next_is_enabled_before_answering() {
    let document = document();
    let mut state = signed_in(ActiveView::Evaluation);
    state.evaluation.questions = (1..=2)
        .map(|id| QuestionWithAnswer {
            question: Question {
                id,
                text: format!("Statement {}", id),
                competency_item_id: 1,
                order: id as i32,
                max_score: 5,
                created_at: None,
                updated_at: None,
                competency_item: None,
            },
            user_answer: None,
        })
        .collect();
    views::render(&state, &document).unwrap();

    let next = document.get_element_by_id("next-question").unwrap();
    assert!(!next.has_attribute("disabled"));
}
