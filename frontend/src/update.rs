// frontend/src/update.rs
//
use crate::messages::{Command, Message};
use crate::reducers;
use crate::state::AppState;

/// Apply `msg` to `state` and collect the side effects it asks for.
///
/// Never touches the DOM or the network; everything observable happens when
/// the returned commands are executed.
pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if reducers::navigation::update(state, &msg, &mut commands) {
        return commands;
    }
    if reducers::session::update(state, &msg, &mut commands) {
        return commands;
    }
    if reducers::evaluation::update(state, &msg, &mut commands) {
        return commands;
    }
    if reducers::dashboard::update(state, &msg, &mut commands) {
        return commands;
    }
    if reducers::profile::update(state, &msg, &mut commands) {
        return commands;
    }
    if reducers::career_plan::update(state, &msg, &mut commands) {
        return commands;
    }

    crate::debug_log!("Unhandled message: {:?}", msg);
    commands
}
