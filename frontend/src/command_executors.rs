use wasm_bindgen_futures::spawn_local;

use crate::messages::{Command, Message};
use crate::network::{ApiClient, ApiError};
use crate::state::dispatch_global_message;
use crate::storage::{self, Route};
use crate::{toast, utils, views};

/// Run the commands produced by one `update` call. Renders are coalesced into
/// a single pass at the end.
pub fn execute_commands(commands: Vec<Command>) {
    let mut render = false;
    for cmd in commands {
        match cmd {
            Command::RenderView => render = true,
            other => execute(other),
        }
    }
    if render {
        if let Err(e) = views::render_active_view() {
            web_sys::console::error_1(&format!("Failed to render view: {:?}", e).into());
        }
    }
}

fn execute(cmd: Command) {
    match cmd {
        Command::SendMessage(msg) => dispatch_global_message(msg),
        Command::UpdateUI(ui_fn) => ui_fn(),
        Command::RenderView => {}
        Command::Navigate(route) => navigate(route),
        Command::Alert(text) => toast::alert(&text),
        Command::Toast { kind, text } => toast::show(&text, kind),
        Command::ClearSession => {
            if let Err(e) = storage::clear_token() {
                web_sys::console::warn_1(&format!("Failed to clear token: {:?}", e).into());
            }
        }
        other => execute_fetch_command(other),
    }
}

/// Move to `route`. Setting the same hash again fires no `hashchange`, so in
/// that case the route is re-entered directly.
fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let target = route.to_hash();
    if location.hash().ok().as_deref() == Some(target.as_str()) {
        dispatch_global_message(Message::RouteChanged {
            route,
            authenticated: utils::is_logged_in(),
        });
    } else if let Err(e) = location.set_hash(&target) {
        web_sys::console::error_1(&format!("Failed to navigate to {}: {:?}", target, e).into());
    }
}

/// Report a failed request. A 401 has already torn the session down and sent
/// the browser to the login page, so the page that asked gets no message.
fn fail(context: &str, error: ApiError, to_msg: impl FnOnce(ApiError) -> Message) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
    if error != ApiError::Unauthorized {
        dispatch_global_message(to_msg(error));
    }
}

pub fn execute_fetch_command(cmd: Command) {
    match cmd {
        Command::Login { email, password } => {
            spawn_local(async move {
                match ApiClient::login(&email, &password).await {
                    Ok(token) => match storage::store_token(&token.access_token) {
                        Ok(()) => dispatch_global_message(Message::LoginSucceeded),
                        Err(e) => dispatch_global_message(Message::LoginFailed(e.into())),
                    },
                    Err(e) => {
                        debug_log!("Login failed: {}", e);
                        dispatch_global_message(Message::LoginFailed(e));
                    }
                }
            });
        }
        Command::Register(request) => {
            spawn_local(async move {
                match ApiClient::register(&request).await {
                    Ok(user) => {
                        debug_log!("Registered {}", user.email);
                        dispatch_global_message(Message::RegisterSucceeded);
                    }
                    Err(e) => fail("Registration failed", e, Message::RegisterFailed),
                }
            });
        }
        Command::FetchCurrentUser => {
            spawn_local(async move {
                match ApiClient::current_user().await {
                    Ok(user) => dispatch_global_message(Message::CurrentUserLoaded(user)),
                    Err(e) => fail("Failed to fetch current user", e, Message::CurrentUserFailed),
                }
            });
        }
        Command::FetchQuestions => {
            spawn_local(async move {
                match ApiClient::questions_with_answers().await {
                    Ok(questions) => dispatch_global_message(Message::QuestionsLoaded(questions)),
                    Err(e) => fail("Failed to fetch questions", e, Message::QuestionsLoadFailed),
                }
            });
        }
        Command::SubmitAnswers(answers) => {
            spawn_local(async move {
                debug_log!("Submitting {} answers", answers.len());
                match ApiClient::submit_answers(answers).await {
                    Ok(_) => dispatch_global_message(Message::AnswersSubmitted),
                    Err(e) => fail("Failed to submit answers", e, Message::AnswersSubmitFailed),
                }
            });
        }
        Command::FetchResults => {
            spawn_local(async move {
                match ApiClient::competency_results().await {
                    Ok(results) => {
                        utils::log_payload("Competency results:", &results);
                        dispatch_global_message(Message::ResultsLoaded(results));
                    }
                    Err(e) => fail("Failed to fetch results", e, Message::ResultsLoadFailed),
                }
            });
        }
        Command::FetchFeedback(request) => {
            spawn_local(async move {
                match ApiClient::ai_feedback(request.force_regenerate()).await {
                    Ok(response) => {
                        utils::log_payload("AI feedback response:", &response);
                        dispatch_global_message(Message::FeedbackLoaded { request, response });
                    }
                    Err(e) => fail("Failed to fetch AI feedback", e, |error| {
                        Message::FeedbackFailed { request, error }
                    }),
                }
            });
        }
        Command::FetchCareerPlan(target) => {
            spawn_local(async move {
                match ApiClient::career_plan().await {
                    Ok(plan) => dispatch_global_message(Message::CareerPlanLoaded { target, plan }),
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => {
                        // 404 simply means the user has not written a plan yet.
                        if e.is_not_found() {
                            debug_log!("No career plan yet");
                        } else {
                            web_sys::console::warn_1(&format!("Failed to fetch career plan: {}", e).into());
                        }
                        dispatch_global_message(Message::CareerPlanMissing { target });
                    }
                }
            });
        }
        Command::SaveCareerPlan { target, payload, exists } => {
            spawn_local(async move {
                let result = if exists {
                    ApiClient::update_career_plan(&payload).await
                } else {
                    ApiClient::create_career_plan(&payload).await
                };
                match result {
                    Ok(plan) => dispatch_global_message(Message::CareerPlanSaved { target, plan }),
                    Err(e) => fail("Failed to save career plan", e, |error| {
                        Message::CareerPlanSaveFailed { target, error }
                    }),
                }
            });
        }
        Command::DeleteCareerPlan(target) => {
            spawn_local(async move {
                match ApiClient::delete_career_plan().await {
                    Ok(()) => dispatch_global_message(Message::CareerPlanDeleted(target)),
                    Err(e) => fail("Failed to delete career plan", e, |error| {
                        Message::CareerPlanDeleteFailed { target, error }
                    }),
                }
            });
        }
        other => {
            web_sys::console::warn_1(&format!("Not a fetch command: {:?}", other).into());
        }
    }
}
