//! Sign-in/sign-up message handler.
//!
//! Validates locally before submitting, keeps the form disabled while a
//! request is in flight, and moves to the dashboard (kicking off the first
//! reload) on success.

use iced::Task;

use super::MessageHandler;
use super::dashboard::start_reload;
use crate::message::{AuthMessage, Message};
use crate::service;
use crate::state::{AppState, DashboardState, ViewState};

/// Handler for the signed-out view.
pub struct AuthHandler;

impl MessageHandler<AuthMessage> for AuthHandler {
    fn handle(&self, state: &mut AppState, msg: AuthMessage) -> Task<Message> {
        let ViewState::SignedOut(form) = &mut state.view else {
            return Task::none();
        };

        match msg {
            AuthMessage::EmailChanged(email) => {
                form.email = email;
                Task::none()
            }

            AuthMessage::PasswordChanged(password) => {
                form.password = password;
                Task::none()
            }

            AuthMessage::ModeToggled => {
                form.mode = form.mode.toggled();
                form.error = None;
                Task::none()
            }

            AuthMessage::SubmitClicked => {
                if form.authenticating {
                    return Task::none();
                }
                if let Some(error) = form.validation_error() {
                    form.error = Some(error);
                    return Task::none();
                }
                let Some(backend) = &state.backend else {
                    return Task::none();
                };
                form.error = None;
                form.authenticating = true;
                service::authenticate(
                    backend.auth.clone(),
                    form.mode,
                    form.email.clone(),
                    form.password.clone(),
                )
            }

            AuthMessage::Completed(Ok(session)) => {
                tracing::info!(email = %session.email, "signed in");
                state.session = Some(session);
                state.view = ViewState::Dashboard(DashboardState::default());
                start_reload(state)
            }

            AuthMessage::Completed(Err(message)) => {
                form.authenticating = false;
                form.error = Some(message);
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use specforge_backend::Session;

    use super::*;
    use crate::state::AuthForm;

    fn signed_out_state() -> AppState {
        AppState {
            backend: None,
            session: None,
            view: ViewState::SignedOut(AuthForm::default()),
        }
    }

    fn form(state: &AppState) -> &AuthForm {
        match &state.view {
            ViewState::SignedOut(form) => form,
            _ => panic!("expected signed-out view"),
        }
    }

    #[test]
    fn submit_with_short_password_sets_inline_error() {
        let mut state = signed_out_state();
        let _ = AuthHandler.handle(
            &mut state,
            AuthMessage::EmailChanged("dev@example.com".to_string()),
        );
        let _ = AuthHandler.handle(&mut state, AuthMessage::PasswordChanged("12345".to_string()));
        let _ = AuthHandler.handle(&mut state, AuthMessage::SubmitClicked);
        assert!(form(&state).error.as_deref().unwrap().contains("at least 6"));
        assert!(!form(&state).authenticating);
    }

    #[test]
    fn successful_sign_in_moves_to_a_loading_dashboard() {
        let mut state = signed_out_state();
        let session = Session {
            access_token: "token".to_string(),
            email: "dev@example.com".to_string(),
        };
        let _ = AuthHandler.handle(&mut state, AuthMessage::Completed(Ok(session)));
        assert!(state.session.is_some());
        let ViewState::Dashboard(dashboard) = &state.view else {
            panic!("expected dashboard view");
        };
        assert!(dashboard.data.loading);
    }

    #[test]
    fn failed_sign_in_reenables_the_form_with_the_message() {
        let mut state = signed_out_state();
        if let ViewState::SignedOut(form) = &mut state.view {
            form.authenticating = true;
        }
        let _ = AuthHandler.handle(
            &mut state,
            AuthMessage::Completed(Err("Invalid login credentials".to_string())),
        );
        assert!(!form(&state).authenticating);
        assert_eq!(form(&state).error.as_deref(), Some("Invalid login credentials"));
        assert!(state.session.is_none());
    }

    #[test]
    fn toggling_mode_clears_the_previous_error() {
        let mut state = signed_out_state();
        if let ViewState::SignedOut(form) = &mut state.view {
            form.error = Some("old".to_string());
        }
        let _ = AuthHandler.handle(&mut state, AuthMessage::ModeToggled);
        assert_eq!(form(&state).error, None);
    }
}
