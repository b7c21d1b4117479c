//! Property tests for the questionnaire walk, route parsing and radar
//! geometry.

use competency_dashboard_frontend::components::radar_chart::vertex;
use competency_dashboard_frontend::models::{Question, QuestionWithAnswer};
use competency_dashboard_frontend::state::EvaluationState;
use competency_dashboard_frontend::storage::{ActiveView, Route};
use proptest::prelude::*;
use proptest::test_runner::TestRunner;

fn questions(ids: &[u32]) -> Vec<QuestionWithAnswer> {
    ids.iter()
        .map(|&id| QuestionWithAnswer {
            question: Question {
                id,
                text: format!("Q{}", id),
                competency_item_id: 1,
                order: 0,
                max_score: 5,
                created_at: None,
                updated_at: None,
                competency_item: None,
            },
            user_answer: None,
        })
        .collect()
}

#[derive(Clone, Debug)]
enum Step {
    Next,
    Previous,
    Answer(usize, u8),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Next),
        Just(Step::Previous),
        (0usize..20, 0u8..8).prop_map(|(i, s)| Step::Answer(i, s)),
    ]
}

#[test]
fn navigation_index_stays_in_bounds() {
    let strategy = (
        proptest::collection::btree_set(1u32..500, 1..15),
        proptest::collection::vec(step_strategy(), 0..60),
    );

    TestRunner::default()
        .run(&strategy, |(ids, steps)| {
            let ids: Vec<u32> = ids.into_iter().collect();
            let mut eval = EvaluationState::default();
            eval.load(questions(&ids));

            for step in steps {
                match step {
                    Step::Next => eval.next(),
                    Step::Previous => eval.previous(),
                    Step::Answer(i, score) => {
                        let id = ids[i % ids.len()];
                        eval.select_answer(id, score);
                    }
                }
                prop_assert!(eval.current_index < ids.len());
                prop_assert!(eval.current_question().is_some());
                prop_assert!(eval.progress_percent() > 0.0 && eval.progress_percent() <= 100.0);
            }

            // Only valid scores for known questions were kept.
            for (id, score) in &eval.answers {
                prop_assert!(ids.contains(id));
                prop_assert!((1..=5).contains(score));
            }

            prop_assert_eq!(eval.can_submit(), eval.answers.len() == ids.len());

            let submitted: Vec<u32> = eval.submission().iter().map(|a| a.question_id).collect();
            let mut sorted = submitted.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(submitted, sorted);
            Ok(())
        })
        .unwrap();
}

#[test]
fn route_round_trips_through_hash() {
    let views = prop_oneof![
        Just(ActiveView::Login),
        Just(ActiveView::Register),
        Just(ActiveView::Dashboard),
        Just(ActiveView::Evaluation),
        Just(ActiveView::Profile),
        Just(ActiveView::CareerPlan),
    ];
    let strategy = (views, proptest::option::of(("[a-z]{1,8}", "[a-z0-9]{1,8}")));

    TestRunner::default()
        .run(&strategy, |(view, query)| {
            let mut route = Route::new(view);
            if let Some((key, value)) = &query {
                route = route.with_query(key, value);
            }
            let parsed = Route::parse_hash(&route.to_hash());
            prop_assert_eq!(parsed.view, view);
            if let Some((key, value)) = &query {
                prop_assert_eq!(parsed.query_value(key), Some(value.as_str()));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn radar_vertices_stay_inside_the_circle() {
    let strategy = (0usize..12, 1usize..12, -10.0f64..10.0, 1.0f64..200.0);

    TestRunner::default()
        .run(&strategy, |(index, count, value, radius)| {
            let center = (300.0, 200.0);
            let (x, y) = vertex(index, count, value, 5.0, center, radius);
            let distance = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
            prop_assert!(distance <= radius + 1e-9);
            Ok(())
        })
        .unwrap();
}
