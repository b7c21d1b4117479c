//! Session reducer: login, sign-up, current user and logout.

use crate::constants::QUERY_REGISTERED;
use crate::messages::{Command, Message};
use crate::state::{AppState, ProfileForm};
use crate::storage::{ActiveView, Route};

/// Handles auth-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoginRequested { email, password } => {
            if state.auth.is_submitting {
                return true;
            }
            let email = email.trim();
            if email.is_empty() || password.is_empty() {
                state.auth.error = Some("Please enter your email and password.".to_string());
            } else {
                state.auth.is_submitting = true;
                state.auth.error = None;
                commands.push(Command::Login {
                    email: email.to_string(),
                    password: password.clone(),
                });
            }
            commands.push(Command::RenderView);
            true
        }
        Message::LoginSucceeded => {
            state.auth = Default::default();
            state.current_user = None;
            commands.push(Command::Navigate(Route::new(ActiveView::Dashboard)));
            true
        }
        Message::LoginFailed(error) => {
            state.auth.is_submitting = false;
            state.auth.error = Some(match error.status() {
                Some(400) | Some(401) => "Incorrect email or password.".to_string(),
                _ => error.user_message(),
            });
            commands.push(Command::RenderView);
            true
        }
        Message::RegisterRequested(form) => {
            if state.auth.is_submitting {
                return true;
            }
            match form.validate() {
                Ok(request) => {
                    state.auth.is_submitting = true;
                    state.auth.error = None;
                    commands.push(Command::Register(request));
                }
                Err(reason) => state.auth.error = Some(reason),
            }
            commands.push(Command::RenderView);
            true
        }
        Message::RegisterSucceeded => {
            state.auth = Default::default();
            commands.push(Command::Navigate(
                Route::new(ActiveView::Login).with_query(QUERY_REGISTERED, "true"),
            ));
            true
        }
        Message::RegisterFailed(error) => {
            state.auth.is_submitting = false;
            state.auth.error = Some(error.user_message());
            commands.push(Command::RenderView);
            true
        }
        Message::CurrentUserLoaded(user) => {
            state.current_user = Some(user.clone());
            if state.route.view == ActiveView::Profile && !state.profile.is_editing {
                state.profile.form = ProfileForm::from_user(user);
            }
            commands.push(Command::RenderView);
            true
        }
        Message::CurrentUserFailed(error) => {
            crate::debug_log!("Could not load the current user: {}", error);
            commands.push(Command::SendMessage(Message::Logout));
            true
        }
        Message::Logout => {
            *state = AppState::new();
            commands.push(Command::ClearSession);
            commands.push(Command::Navigate(Route::new(ActiveView::Login)));
            true
        }
        _ => false,
    }
}
