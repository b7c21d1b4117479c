//! Navigation reducer: route guard and per-page data loading.

use crate::messages::{Command, Message};
use crate::state::{
    AppState, CareerPlanEditor, CareerPlanTarget, DashboardState, EvaluationState, ProfileForm,
};
use crate::storage::{ActiveView, Route};

/// Handles routing messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::RouteChanged { route, authenticated } => {
            enter_route(state, route.clone(), *authenticated, commands);
            true
        }
        Message::Navigate(route) => {
            commands.push(Command::Navigate(route.clone()));
            true
        }
        _ => false,
    }
}

fn enter_route(state: &mut AppState, route: Route, authenticated: bool, commands: &mut Vec<Command>) {
    if route.requires_auth() && !authenticated {
        state.current_user = None;
        commands.push(Command::Navigate(Route::new(ActiveView::Login)));
        return;
    }
    if !route.requires_auth() && authenticated {
        commands.push(Command::Navigate(Route::new(ActiveView::Dashboard)));
        return;
    }

    crate::debug_log!("Entering {}", route.to_hash());

    // Every visit starts from fresh page data; edits never survive leaving a
    // page.
    match route.view {
        ActiveView::Login | ActiveView::Register => {
            state.auth = Default::default();
        }
        ActiveView::Dashboard => {
            state.dashboard = DashboardState { is_loading: true, ..Default::default() };
            commands.push(Command::FetchResults);
        }
        ActiveView::Evaluation => {
            state.evaluation = EvaluationState { is_loading: true, ..Default::default() };
            commands.push(Command::FetchQuestions);
        }
        ActiveView::Profile => {
            state.profile.is_editing = false;
            state.profile.form = state
                .current_user
                .as_ref()
                .map(ProfileForm::from_user)
                .unwrap_or_default();
            state.career_plan.profile = CareerPlanEditor { is_loading: true, ..Default::default() };
            commands.push(Command::FetchCareerPlan(CareerPlanTarget::Profile));
        }
        ActiveView::CareerPlan => {
            state.career_plan.page = CareerPlanEditor {
                is_loading: true,
                is_editing: true,
                ..Default::default()
            };
            commands.push(Command::FetchCareerPlan(CareerPlanTarget::Page));
        }
    }

    state.route = route;

    if authenticated && state.current_user.is_none() {
        commands.push(Command::FetchCurrentUser);
    }
    commands.push(Command::RenderView);
}
