//! Career plan reducer, shared by the profile section and the dedicated page.

use crate::constants::MSG_CAREER_PLAN_SAVE_FAILED;
use crate::messages::{Command, Message};
use crate::state::{AppState, CareerPlanTarget};
use crate::storage::{ActiveView, Route};
use crate::toast::ToastKind;

/// Handles career plan messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::CareerPlanLoaded { target, plan } => {
            let editor = state.career_plan.editor_mut(*target);
            editor.plan = Some(plan.clone());
            editor.is_loading = false;
            editor.restore_form();
            commands.push(Command::RenderView);
            true
        }
        Message::CareerPlanMissing { target } => {
            let editor = state.career_plan.editor_mut(*target);
            editor.plan = None;
            editor.is_loading = false;
            editor.restore_form();
            commands.push(Command::RenderView);
            true
        }
        Message::EditCareerPlan(target) => {
            let editor = state.career_plan.editor_mut(*target);
            editor.is_editing = true;
            editor.restore_form();
            commands.push(Command::RenderView);
            true
        }
        Message::UpdateCareerPlanField { target, field, value } => {
            state.career_plan.editor_mut(*target).form.set(*field, value.clone());
            true
        }
        Message::SaveCareerPlan(target) => {
            let editor = state.career_plan.editor_mut(*target);
            if editor.is_saving {
                return true;
            }
            editor.is_saving = true;
            commands.push(Command::SaveCareerPlan {
                target: *target,
                payload: editor.form.clone(),
                exists: editor.has_plan(),
            });
            commands.push(Command::RenderView);
            true
        }
        Message::CareerPlanSaved { target, plan } => {
            let editor = state.career_plan.editor_mut(*target);
            editor.is_saving = false;
            editor.plan = Some(plan.clone());
            editor.restore_form();

            // The dashboard's feedback was generated from the old plan.
            state.dashboard.feedback = None;

            commands.push(Command::Toast {
                kind: ToastKind::Success,
                text: "Career plan saved.".to_string(),
            });
            match target {
                CareerPlanTarget::Profile => {
                    state.career_plan.profile.is_editing = false;
                    commands.push(Command::RenderView);
                }
                CareerPlanTarget::Page => {
                    commands.push(Command::Navigate(Route::new(ActiveView::Dashboard)));
                }
            }
            true
        }
        Message::CareerPlanSaveFailed { target, error } => {
            crate::debug_log!("Saving career plan failed: {}", error);
            state.career_plan.editor_mut(*target).is_saving = false;
            match target {
                CareerPlanTarget::Profile => {
                    commands.push(Command::Alert(MSG_CAREER_PLAN_SAVE_FAILED.to_string()));
                }
                CareerPlanTarget::Page => {
                    commands.push(Command::Toast {
                        kind: ToastKind::Error,
                        text: MSG_CAREER_PLAN_SAVE_FAILED.to_string(),
                    });
                }
            }
            commands.push(Command::RenderView);
            true
        }
        Message::CancelCareerPlanEdit(target) => {
            let editor = state.career_plan.editor_mut(*target);
            editor.restore_form();
            match target {
                CareerPlanTarget::Profile => {
                    editor.is_editing = false;
                    commands.push(Command::RenderView);
                }
                CareerPlanTarget::Page => {
                    commands.push(Command::Navigate(Route::new(ActiveView::Dashboard)));
                }
            }
            true
        }
        Message::DeleteCareerPlan(target) => {
            let editor = state.career_plan.editor_mut(*target);
            if !editor.has_plan() || editor.is_deleting {
                return true;
            }
            editor.is_deleting = true;
            commands.push(Command::DeleteCareerPlan(*target));
            commands.push(Command::RenderView);
            true
        }
        Message::CareerPlanDeleted(target) => {
            let editor = state.career_plan.editor_mut(*target);
            editor.is_deleting = false;
            editor.plan = None;
            editor.restore_form();
            if *target == CareerPlanTarget::Profile {
                editor.is_editing = false;
            }
            state.dashboard.feedback = None;
            commands.push(Command::Toast {
                kind: ToastKind::Info,
                text: "Career plan deleted.".to_string(),
            });
            commands.push(Command::RenderView);
            true
        }
        Message::CareerPlanDeleteFailed { target, error } => {
            state.career_plan.editor_mut(*target).is_deleting = false;
            commands.push(Command::Toast {
                kind: ToastKind::Error,
                text: format!("Failed to delete the career plan: {}", error.user_message()),
            });
            commands.push(Command::RenderView);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiFeedbackResponse, CareerPlanField, UserCareerPlan, UserCareerPlanCreate};
    use crate::network::ApiError;

    fn stored_plan() -> UserCareerPlan {
        UserCareerPlan {
            id: 5,
            user_id: 1,
            fields: UserCareerPlanCreate {
                career_direction: Some("Specialist".into()),
                ..Default::default()
            },
            created_at: None,
            updated_at: None,
        }
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands));
        commands
    }

    #[test]
    fn missing_plan_leaves_blank_form() {
        let mut state = AppState::new();
        state.career_plan.page.is_loading = true;
        run(&mut state, Message::CareerPlanMissing { target: CareerPlanTarget::Page });

        let editor = &state.career_plan.page;
        assert!(!editor.is_loading);
        assert!(!editor.has_plan());
        assert!(editor.form.is_blank());
    }

    #[test]
    fn save_creates_when_no_plan_exists() {
        let mut state = AppState::new();
        run(
            &mut state,
            Message::UpdateCareerPlanField {
                target: CareerPlanTarget::Page,
                field: CareerPlanField::SpecificGoals,
                value: "Lead a project".into(),
            },
        );
        let commands = run(&mut state, Message::SaveCareerPlan(CareerPlanTarget::Page));

        match &commands[0] {
            Command::SaveCareerPlan { target, payload, exists } => {
                assert_eq!(*target, CareerPlanTarget::Page);
                assert!(!exists);
                assert_eq!(payload.get(CareerPlanField::SpecificGoals), "Lead a project");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn save_updates_existing_plan() {
        let mut state = AppState::new();
        run(
            &mut state,
            Message::CareerPlanLoaded { target: CareerPlanTarget::Profile, plan: stored_plan() },
        );
        run(&mut state, Message::EditCareerPlan(CareerPlanTarget::Profile));
        let commands = run(&mut state, Message::SaveCareerPlan(CareerPlanTarget::Profile));

        assert!(matches!(commands[0], Command::SaveCareerPlan { exists: true, .. }));
    }

    #[test]
    fn saved_plan_invalidates_dashboard_feedback() {
        let mut state = AppState::new();
        state.dashboard.feedback = Some(AiFeedbackResponse::default());
        state.career_plan.profile.is_editing = true;
        state.career_plan.profile.is_saving = true;

        run(
            &mut state,
            Message::CareerPlanSaved { target: CareerPlanTarget::Profile, plan: stored_plan() },
        );

        assert!(state.dashboard.feedback.is_none());
        assert!(!state.career_plan.profile.is_editing);
        assert!(state.career_plan.profile.has_plan());
    }

    #[test]
    fn page_save_returns_to_dashboard() {
        let mut state = AppState::new();
        let commands = run(
            &mut state,
            Message::CareerPlanSaved { target: CareerPlanTarget::Page, plan: stored_plan() },
        );
        assert!(commands
            .iter()
            .any(|c| matches!(c, Command::Navigate(route) if route.view == ActiveView::Dashboard)));
    }

    #[test]
    fn profile_save_failure_alerts() {
        let mut state = AppState::new();
        state.career_plan.profile.is_saving = true;
        let commands = run(
            &mut state,
            Message::CareerPlanSaveFailed {
                target: CareerPlanTarget::Profile,
                error: ApiError::Http { status: 422, detail: "bad".into() },
            },
        );
        assert!(!state.career_plan.profile.is_saving);
        assert!(matches!(&commands[0], Command::Alert(text) if text == MSG_CAREER_PLAN_SAVE_FAILED));
    }

    #[test]
    fn cancel_restores_stored_values() {
        let mut state = AppState::new();
        run(
            &mut state,
            Message::CareerPlanLoaded { target: CareerPlanTarget::Profile, plan: stored_plan() },
        );
        run(&mut state, Message::EditCareerPlan(CareerPlanTarget::Profile));
        run(
            &mut state,
            Message::UpdateCareerPlanField {
                target: CareerPlanTarget::Profile,
                field: CareerPlanField::CareerDirection,
                value: "Manager".into(),
            },
        );
        run(&mut state, Message::CancelCareerPlanEdit(CareerPlanTarget::Profile));

        let editor = &state.career_plan.profile;
        assert!(!editor.is_editing);
        assert_eq!(editor.form.get(CareerPlanField::CareerDirection), "Specialist");
    }

    #[test]
    fn page_cancel_returns_to_dashboard() {
        let mut state = AppState::new();
        run(
            &mut state,
            Message::UpdateCareerPlanField {
                target: CareerPlanTarget::Page,
                field: CareerPlanField::CareerDirection,
                value: "Manager".into(),
            },
        );
        let commands = run(&mut state, Message::CancelCareerPlanEdit(CareerPlanTarget::Page));

        assert!(matches!(
            &commands[..],
            [Command::Navigate(route)] if route.view == ActiveView::Dashboard
        ));
        assert!(state.career_plan.page.form.is_blank());
    }

    #[test]
    fn delete_requires_a_stored_plan() {
        let mut state = AppState::new();
        assert!(run(&mut state, Message::DeleteCareerPlan(CareerPlanTarget::Page)).is_empty());

        run(
            &mut state,
            Message::CareerPlanLoaded { target: CareerPlanTarget::Page, plan: stored_plan() },
        );
        let commands = run(&mut state, Message::DeleteCareerPlan(CareerPlanTarget::Page));
        assert!(matches!(commands[0], Command::DeleteCareerPlan(CareerPlanTarget::Page)));

        run(&mut state, Message::CareerPlanDeleted(CareerPlanTarget::Page));
        assert!(!state.career_plan.page.has_plan());
        assert!(state.career_plan.page.form.is_blank());
    }
}
