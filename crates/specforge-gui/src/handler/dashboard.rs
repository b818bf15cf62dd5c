//! Dashboard message handler.
//!
//! Handles:
//! - Workspace/module selection and the derived variable form
//! - Reload triggers and settled reload results (version-gated)
//! - Sign-out, which always clears the local session

use iced::Task;

use super::MessageHandler;
use crate::message::{DashboardMessage, Message};
use crate::service;
use crate::state::{AppState, AuthForm, ViewState};

/// Handler for the authenticated dashboard.
pub struct DashboardHandler;

impl MessageHandler<DashboardMessage> for DashboardHandler {
    fn handle(&self, state: &mut AppState, msg: DashboardMessage) -> Task<Message> {
        // Sign-out results matter even if the user navigated elsewhere.
        if let DashboardMessage::SignedOut { error } = msg {
            return handle_signed_out(state, error);
        }

        let ViewState::Dashboard(dashboard) = &mut state.view else {
            return Task::none();
        };

        match msg {
            DashboardMessage::WorkspacePicked(choice) => {
                dashboard.selection.select_workspace(
                    Some(choice.id),
                    &dashboard.data.workspaces,
                    &dashboard.data.modules,
                );
                dashboard.refresh();
                Task::none()
            }

            DashboardMessage::ModulePicked(choice) => {
                dashboard.selection.select_module(Some(choice.id));
                dashboard.refresh();
                Task::none()
            }

            DashboardMessage::VariableChanged { key, value } => {
                dashboard.selection.values.insert(key, value);
                Task::none()
            }

            DashboardMessage::VariableEdited { key, action } => {
                if let Some(editor) = dashboard.editors.get_mut(&key) {
                    editor.perform(action);
                    dashboard.selection.values.insert(key, editor.text());
                }
                Task::none()
            }

            DashboardMessage::ReloadClicked => start_reload(state),

            DashboardMessage::Loaded { version, outcome } => {
                if dashboard.data.apply(version, outcome) {
                    dashboard.refresh();
                }
                Task::none()
            }

            DashboardMessage::LoadFailed { version, message } => {
                if dashboard.data.apply_failure(version, message) {
                    dashboard.refresh();
                }
                Task::none()
            }

            DashboardMessage::SignOutClicked => {
                if dashboard.signing_out {
                    return Task::none();
                }
                dashboard.signing_out = true;
                match (&state.backend, &state.session) {
                    (Some(backend), Some(session)) => {
                        service::sign_out(backend.auth.clone(), session.clone())
                    }
                    // Nothing to invalidate remotely; clear locally.
                    _ => Task::done(Message::Dashboard(DashboardMessage::SignedOut {
                        error: None,
                    })),
                }
            }

            // Handled above.
            DashboardMessage::SignedOut { .. } => Task::none(),
        }
    }
}

/// Start a reload of the seeded tables for the current dashboard.
///
/// Captures the data version so a straggling result from an older reload
/// never overwrites a newer one. Reused by the auth handler for the initial
/// load after sign-in.
pub(crate) fn start_reload(state: &mut AppState) -> Task<Message> {
    let ViewState::Dashboard(dashboard) = &mut state.view else {
        return Task::none();
    };
    let version = dashboard.data.begin_reload();
    match (&state.backend, &state.session) {
        (Some(backend), Some(session)) => service::reload_tables(
            backend.tables.clone(),
            session.clone(),
            dashboard.data.missing_tables().clone(),
            version,
        ),
        _ => Task::done(Message::Dashboard(DashboardMessage::LoadFailed {
            version,
            message: "Failed to load data.".to_string(),
        })),
    }
}

/// The remote sign-out settled (or was abandoned after its timeout). The
/// local session is cleared regardless; a failure only adds a notice to the
/// sign-in form.
fn handle_signed_out(state: &mut AppState, error: Option<String>) -> Task<Message> {
    if let Some(error) = &error {
        tracing::warn!("sign-out failed: {error}");
    }
    state.session = None;
    state.view = ViewState::SignedOut(AuthForm::with_error(
        error.map(|e| format!("{e} Clearing local session.")),
    ));
    Task::none()
}
