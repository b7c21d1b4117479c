//! Evaluation reducer: questionnaire loading, answering and submission.

use crate::constants::{MSG_SUBMIT_FAILED, QUERY_EVALUATION, QUERY_EVALUATION_COMPLETED};
use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::storage::{ActiveView, Route};

/// Handles evaluation messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let eval = &mut state.evaluation;
    match msg {
        Message::QuestionsLoaded(questions) => {
            crate::debug_log!("Loaded {} questions", questions.len());
            eval.load(questions.clone());
            commands.push(Command::RenderView);
            true
        }
        Message::QuestionsLoadFailed(error) => {
            eval.is_loading = false;
            eval.error = Some(error.user_message());
            commands.push(Command::RenderView);
            true
        }
        Message::SelectAnswer { question_id, score } => {
            if eval.select_answer(*question_id, *score) {
                commands.push(Command::RenderView);
            }
            true
        }
        Message::NextQuestion => {
            eval.next();
            commands.push(Command::RenderView);
            commands.push(Command::UpdateUI(Box::new(scroll_to_top)));
            true
        }
        Message::PreviousQuestion => {
            eval.previous();
            commands.push(Command::RenderView);
            commands.push(Command::UpdateUI(Box::new(scroll_to_top)));
            true
        }
        Message::SubmitAnswers => {
            if !eval.can_submit() {
                return true;
            }
            eval.is_submitting = true;
            commands.push(Command::SubmitAnswers(eval.submission()));
            commands.push(Command::RenderView);
            true
        }
        Message::AnswersSubmitted => {
            eval.is_submitting = false;
            commands.push(Command::Navigate(
                Route::new(ActiveView::Dashboard)
                    .with_query(QUERY_EVALUATION, QUERY_EVALUATION_COMPLETED),
            ));
            true
        }
        Message::AnswersSubmitFailed(error) => {
            crate::debug_log!("Submitting answers failed: {}", error);
            eval.is_submitting = false;
            commands.push(Command::Alert(MSG_SUBMIT_FAILED.to_string()));
            commands.push(Command::RenderView);
            true
        }
        _ => false,
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuestionWithAnswer};
    use crate::network::ApiError;

    fn question(id: u32) -> QuestionWithAnswer {
        QuestionWithAnswer {
            question: Question {
                id,
                text: format!("Statement {}", id),
                competency_item_id: 1,
                order: 0,
                max_score: 5,
                created_at: None,
                updated_at: None,
                competency_item: None,
            },
            user_answer: None,
        }
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands));
        commands
    }

    #[test]
    fn incomplete_questionnaire_cannot_be_submitted() {
        let mut state = AppState::new();
        run(&mut state, Message::QuestionsLoaded(vec![question(1), question(2)]));
        run(&mut state, Message::SelectAnswer { question_id: 1, score: 3 });

        let commands = run(&mut state, Message::SubmitAnswers);
        assert!(commands.is_empty());
        assert!(!state.evaluation.is_submitting);
    }

    #[test]
    fn submit_sends_every_answer_once() {
        let mut state = AppState::new();
        run(&mut state, Message::QuestionsLoaded(vec![question(2), question(1)]));
        run(&mut state, Message::SelectAnswer { question_id: 2, score: 5 });
        run(&mut state, Message::SelectAnswer { question_id: 1, score: 1 });
        run(&mut state, Message::SelectAnswer { question_id: 1, score: 2 });

        let commands = run(&mut state, Message::SubmitAnswers);
        match &commands[0] {
            Command::SubmitAnswers(answers) => {
                let pairs: Vec<(u32, u8)> = answers.iter().map(|a| (a.question_id, a.score)).collect();
                assert_eq!(pairs, vec![(1, 2), (2, 5)]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(state.evaluation.is_submitting);

        // A second click while the first request is in flight does nothing.
        assert!(run(&mut state, Message::SubmitAnswers).is_empty());
    }

    #[test]
    fn success_hands_over_to_dashboard() {
        let mut state = AppState::new();
        state.evaluation.is_submitting = true;
        let commands = run(&mut state, Message::AnswersSubmitted);

        match &commands[..] {
            [Command::Navigate(route)] => {
                assert_eq!(route.to_hash(), "#/dashboard?evaluation=completed");
            }
            other => panic!("unexpected commands: {:?}", other),
        }
    }

    #[test]
    fn failure_alerts_and_reenables_submit() {
        let mut state = AppState::new();
        run(&mut state, Message::QuestionsLoaded(vec![question(1)]));
        run(&mut state, Message::SelectAnswer { question_id: 1, score: 4 });
        run(&mut state, Message::SubmitAnswers);

        let commands = run(
            &mut state,
            Message::AnswersSubmitFailed(ApiError::Http { status: 500, detail: String::new() }),
        );

        assert!(matches!(&commands[0], Command::Alert(text) if text == MSG_SUBMIT_FAILED));
        assert!(state.evaluation.can_submit());
    }

    #[test]
    fn invalid_score_does_not_rerender() {
        let mut state = AppState::new();
        run(&mut state, Message::QuestionsLoaded(vec![question(1)]));
        let commands = run(&mut state, Message::SelectAnswer { question_id: 1, score: 9 });
        assert!(commands.is_empty());
        assert!(state.evaluation.answers.is_empty());
    }
}
