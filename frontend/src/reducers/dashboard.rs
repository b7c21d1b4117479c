//! Dashboard domain reducer: competency results and the AI feedback panel.

use crate::constants::{
    MSG_FEEDBACK_FAILED, MSG_RESULTS_FAILED, QUERY_EVALUATION, QUERY_EVALUATION_COMPLETED,
};
use crate::messages::{Command, FeedbackRequest, Message};
use crate::models::CompetencyResult;
use crate::state::AppState;
use crate::storage::ActiveView;

/// Handles dashboard-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ResultsLoaded(results) => {
            // A response for a dashboard visit the user already left.
            if state.route.view != ActiveView::Dashboard {
                return true;
            }
            let just_completed = state.route.query_value(QUERY_EVALUATION)
                == Some(QUERY_EVALUATION_COMPLETED);

            let dashboard = &mut state.dashboard;
            dashboard.results = Some(results.clone());
            dashboard.is_loading = false;
            dashboard.error = None;

            if dashboard.has_evaluation() {
                let request = if just_completed {
                    dashboard.pending_feedback = Some(FeedbackRequest::AfterEvaluation);
                    FeedbackRequest::AfterEvaluation
                } else {
                    FeedbackRequest::CachedOnly
                };
                commands.push(Command::FetchFeedback(request));
            }
            commands.push(Command::RenderView);
            true
        }
        Message::ResultsLoadFailed(error) => {
            if state.route.view != ActiveView::Dashboard {
                return true;
            }
            crate::debug_log!("Fetching results failed: {}", error);
            let dashboard = &mut state.dashboard;
            dashboard.is_loading = false;
            dashboard.error = Some(MSG_RESULTS_FAILED.to_string());
            dashboard.results = Some(CompetencyResult::default());
            commands.push(Command::RenderView);
            true
        }
        Message::ReloadResults => {
            let dashboard = &mut state.dashboard;
            dashboard.is_loading = true;
            dashboard.error = None;
            commands.push(Command::FetchResults);
            commands.push(Command::RenderView);
            true
        }
        Message::RequestFeedback => {
            let dashboard = &mut state.dashboard;
            if dashboard.is_loading_feedback() {
                return true;
            }
            dashboard.pending_feedback = Some(FeedbackRequest::Manual);
            dashboard.feedback_error = None;
            commands.push(Command::FetchFeedback(FeedbackRequest::Manual));
            commands.push(Command::RenderView);
            true
        }
        Message::FeedbackLoaded { request, response } => {
            let dashboard = &mut state.dashboard;

            match request {
                FeedbackRequest::CachedOnly => {
                    // A regenerating request or its answer supersedes the cache.
                    if dashboard.is_loading_feedback() || dashboard.feedback.is_some() {
                        crate::debug_log!("Dropping cached AI feedback; newer feedback wins");
                        return true;
                    }
                    if response.feedback.is_some() && response.from_cache {
                        dashboard.feedback = Some(response.clone());
                    } else {
                        crate::debug_log!("No cached AI feedback; waiting for a manual request");
                    }
                }
                FeedbackRequest::AfterEvaluation | FeedbackRequest::Manual => {
                    if dashboard.pending_feedback != Some(*request) {
                        crate::debug_log!("Dropping stale AI feedback ({:?})", request);
                        return true;
                    }
                    dashboard.pending_feedback = None;
                    if let Some(error) = &response.error {
                        dashboard.feedback = None;
                        dashboard.feedback_error = Some(error.clone());
                    } else {
                        dashboard.feedback = Some(response.clone());
                        dashboard.feedback_error = None;
                    }
                }
            }
            commands.push(Command::RenderView);
            true
        }
        Message::FeedbackFailed { request, error } => {
            crate::debug_log!("AI feedback unavailable ({:?}): {}", request, error);
            let dashboard = &mut state.dashboard;
            if request.force_regenerate() {
                if dashboard.pending_feedback != Some(*request) {
                    return true;
                }
                dashboard.pending_feedback = None;
            }
            if *request == FeedbackRequest::Manual {
                commands.push(Command::Alert(MSG_FEEDBACK_FAILED.to_string()));
            }
            commands.push(Command::RenderView);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiFeedback, AiFeedbackResponse, UserCompetency};
    use crate::network::ApiError;
    use crate::storage::Route;

    fn results_with_one_competency() -> CompetencyResult {
        CompetencyResult {
            user_competencies: vec![UserCompetency {
                id: 1,
                user_id: 1,
                competency_item_id: 1,
                score: 3.5,
                calculated_at: None,
                competency_item: None,
            }],
            company_averages: vec![],
        }
    }

    fn on_dashboard(hash: &str) -> AppState {
        let mut state = AppState::new();
        state.route = Route::parse_hash(hash);
        state.dashboard.is_loading = true;
        state
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands));
        commands
    }

    fn feedback_response(from_cache: bool) -> AiFeedbackResponse {
        AiFeedbackResponse {
            feedback: Some(AiFeedback { strengths: "Calm under pressure".into(), ..Default::default() }),
            from_cache,
            ..Default::default()
        }
    }

    #[test]
    fn completed_evaluation_regenerates_feedback() {
        let mut state = on_dashboard("#/dashboard?evaluation=completed");
        let commands = run(&mut state, Message::ResultsLoaded(results_with_one_competency()));

        assert!(matches!(commands[0], Command::FetchFeedback(FeedbackRequest::AfterEvaluation)));
        assert!(state.dashboard.is_loading_feedback());
        assert!(!state.dashboard.is_loading);
    }

    #[test]
    fn ordinary_visit_only_checks_the_cache() {
        let mut state = on_dashboard("#/dashboard");
        let commands = run(&mut state, Message::ResultsLoaded(results_with_one_competency()));

        assert!(matches!(commands[0], Command::FetchFeedback(FeedbackRequest::CachedOnly)));
        assert!(!state.dashboard.is_loading_feedback());
    }

    #[test]
    fn no_competencies_means_no_feedback_request() {
        let mut state = on_dashboard("#/dashboard?evaluation=completed");
        let commands = run(&mut state, Message::ResultsLoaded(CompetencyResult::default()));

        assert!(!commands.iter().any(|c| matches!(c, Command::FetchFeedback(_))));
        assert!(!state.dashboard.has_evaluation());
    }

    #[test]
    fn results_failure_shows_error_and_empty_results() {
        let mut state = on_dashboard("#/dashboard");
        run(&mut state, Message::ResultsLoadFailed(ApiError::Network("offline".into())));

        assert_eq!(state.dashboard.error.as_deref(), Some(MSG_RESULTS_FAILED));
        assert_eq!(state.dashboard.results, Some(CompetencyResult::default()));
        assert!(!state.dashboard.is_loading);
    }

    #[test]
    fn late_results_after_leaving_are_ignored() {
        let mut state = on_dashboard("#/profile");
        let commands = run(&mut state, Message::ResultsLoaded(results_with_one_competency()));
        assert!(commands.is_empty());
        assert!(state.dashboard.results.is_none());
    }

    #[test]
    fn fresh_feedback_is_not_kept_from_cache_only_request() {
        let mut state = on_dashboard("#/dashboard");
        run(
            &mut state,
            Message::FeedbackLoaded {
                request: FeedbackRequest::CachedOnly,
                response: feedback_response(false),
            },
        );
        assert!(state.dashboard.feedback.is_none());

        run(
            &mut state,
            Message::FeedbackLoaded {
                request: FeedbackRequest::CachedOnly,
                response: feedback_response(true),
            },
        );
        assert!(state.dashboard.feedback.is_some());
    }

    #[test]
    fn manual_request_keeps_generated_feedback() {
        let mut state = on_dashboard("#/dashboard");
        let commands = run(&mut state, Message::RequestFeedback);
        assert!(matches!(commands[0], Command::FetchFeedback(FeedbackRequest::Manual)));
        assert!(state.dashboard.is_loading_feedback());

        run(
            &mut state,
            Message::FeedbackLoaded { request: FeedbackRequest::Manual, response: feedback_response(false) },
        );
        assert!(!state.dashboard.is_loading_feedback());
        assert!(state.dashboard.feedback.is_some());
    }

    #[test]
    fn error_payload_is_surfaced_inline() {
        let mut state = on_dashboard("#/dashboard");
        run(&mut state, Message::RequestFeedback);
        run(
            &mut state,
            Message::FeedbackLoaded {
                request: FeedbackRequest::Manual,
                response: AiFeedbackResponse { error: Some("No results".into()), ..Default::default() },
            },
        );
        assert_eq!(state.dashboard.feedback_error.as_deref(), Some("No results"));
        assert!(state.dashboard.feedback.is_none());
    }

    #[test]
    fn only_manual_failures_alert() {
        let mut state = on_dashboard("#/dashboard");
        let silent = run(
            &mut state,
            Message::FeedbackFailed {
                request: FeedbackRequest::AfterEvaluation,
                error: ApiError::Network("x".into()),
            },
        );
        assert!(!silent.iter().any(|c| matches!(c, Command::Alert(_))));
    }

    #[test]
    fn cache_reply_does_not_cancel_a_manual_request() {
        let mut state = on_dashboard("#/dashboard");
        let commands = run(&mut state, Message::ResultsLoaded(results_with_one_competency()));
        assert!(matches!(commands[0], Command::FetchFeedback(FeedbackRequest::CachedOnly)));

        run(&mut state, Message::RequestFeedback);
        run(
            &mut state,
            Message::FeedbackLoaded {
                request: FeedbackRequest::CachedOnly,
                response: feedback_response(true),
            },
        );
        assert!(state.dashboard.is_loading_feedback());
        assert!(state.dashboard.feedback.is_none());

        // Still loading, so a second click is ignored.
        assert!(run(&mut state, Message::RequestFeedback).is_empty());

        run(
            &mut state,
            Message::FeedbackLoaded { request: FeedbackRequest::Manual, response: feedback_response(false) },
        );
        assert!(!state.dashboard.is_loading_feedback());
        assert!(!state.dashboard.feedback.as_ref().unwrap().from_cache);
    }

    #[test]
    fn late_cache_reply_keeps_regenerated_feedback() {
        let mut state = on_dashboard("#/dashboard");
        run(&mut state, Message::RequestFeedback);
        run(
            &mut state,
            Message::FeedbackLoaded { request: FeedbackRequest::Manual, response: feedback_response(false) },
        );
        run(
            &mut state,
            Message::FeedbackLoaded {
                request: FeedbackRequest::CachedOnly,
                response: feedback_response(true),
            },
        );
        assert!(!state.dashboard.feedback.as_ref().unwrap().from_cache);
    }

    #[test]
    fn cache_failure_leaves_manual_request_loading() {
        let mut state = on_dashboard("#/dashboard");
        run(&mut state, Message::RequestFeedback);
        let commands = run(
            &mut state,
            Message::FeedbackFailed {
                request: FeedbackRequest::CachedOnly,
                error: ApiError::Network("x".into()),
            },
        );
        assert!(state.dashboard.is_loading_feedback());
        assert!(!commands.iter().any(|c| matches!(c, Command::Alert(_))));

        let commands = run(
            &mut state,
            Message::FeedbackFailed { request: FeedbackRequest::Manual, error: ApiError::Network("x".into()) },
        );
        assert!(!state.dashboard.is_loading_feedback());
        assert!(commands.iter().any(|c| matches!(c, Command::Alert(_))));
    }
}
