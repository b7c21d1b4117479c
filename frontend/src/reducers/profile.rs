//! Profile reducer: the basic-information card. There is no backend endpoint
//! for editing a user, so saving only updates the local copy.

use crate::messages::{Command, Message};
use crate::state::{AppState, ProfileForm};
use crate::toast::ToastKind;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::EditProfile => {
            state.profile.is_editing = true;
            commands.push(Command::RenderView);
            true
        }
        Message::UpdateProfileField { field, value } => {
            // Keystrokes only touch state; re-rendering would steal focus.
            state.profile.form.set(*field, value.clone());
            true
        }
        Message::SaveProfile => {
            state.profile.is_editing = false;
            commands.push(Command::Toast {
                kind: ToastKind::Success,
                text: "Profile updated.".to_string(),
            });
            commands.push(Command::RenderView);
            true
        }
        Message::CancelProfileEdit => {
            state.profile.is_editing = false;
            state.profile.form = state
                .current_user
                .as_ref()
                .map(ProfileForm::from_user)
                .unwrap_or_default();
            commands.push(Command::RenderView);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::state::ProfileField;

    fn user() -> User {
        User {
            id: 1,
            email: "hana@example.com".into(),
            name: "Hana".into(),
            department: Some("Sales".into()),
            position: None,
            is_active: true,
            is_superuser: false,
        }
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands));
        commands
    }

    #[test]
    fn typing_does_not_rerender() {
        let mut state = AppState::new();
        let commands = run(
            &mut state,
            Message::UpdateProfileField { field: ProfileField::Position, value: "Lead".into() },
        );
        assert!(commands.is_empty());
        assert_eq!(state.profile.form.position, "Lead");
    }

    #[test]
    fn save_is_local_and_keeps_edits() {
        let mut state = AppState::new();
        state.current_user = Some(user());
        state.profile.form = ProfileForm::from_user(&user());
        run(&mut state, Message::EditProfile);
        run(
            &mut state,
            Message::UpdateProfileField { field: ProfileField::Department, value: "Marketing".into() },
        );
        let commands = run(&mut state, Message::SaveProfile);

        assert!(!state.profile.is_editing);
        assert_eq!(state.profile.form.department, "Marketing");
        assert!(matches!(&commands[0], Command::Toast { kind: ToastKind::Success, .. }));
    }

    #[test]
    fn cancel_restores_fetched_user() {
        let mut state = AppState::new();
        state.current_user = Some(user());
        run(&mut state, Message::EditProfile);
        run(
            &mut state,
            Message::UpdateProfileField { field: ProfileField::Name, value: "Someone else".into() },
        );
        run(&mut state, Message::CancelProfileEdit);

        assert!(!state.profile.is_editing);
        assert_eq!(state.profile.form, ProfileForm::from_user(&user()));
    }
}
