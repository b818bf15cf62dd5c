//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task results flow through these
//! types; the `update` function is the only place state changes.

use iced::widget::text_editor;

use specforge_backend::Session;
use specforge_core::{LoadOutcome, TemplateKey};

use crate::state::RowChoice;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Template generator view messages
    Generator(GeneratorMessage),

    /// Sign-in/sign-up view messages
    Auth(AuthMessage),

    /// Dashboard view messages
    Dashboard(DashboardMessage),

    /// Switch to the template generator view
    ShowGenerator,

    /// Leave the template generator (back to sign-in or dashboard)
    CloseGenerator,
}

/// Template generator interactions. Pure and synchronous.
#[derive(Debug, Clone)]
pub enum GeneratorMessage {
    /// A template was picked in the selector.
    TemplatePicked(TemplateKey),
    /// The Generate button was clicked.
    GenerateClicked,
}

/// Sign-in/sign-up form interactions and results.
#[derive(Debug, Clone)]
pub enum AuthMessage {
    EmailChanged(String),
    PasswordChanged(String),
    /// Toggle between the sign-in and sign-up submodes.
    ModeToggled,
    SubmitClicked,
    /// Sign-in or sign-up settled.
    Completed(Result<Session, String>),
}

/// Dashboard interactions and background-task results.
#[derive(Debug, Clone)]
pub enum DashboardMessage {
    WorkspacePicked(RowChoice),
    ModulePicked(RowChoice),
    /// A text or number variable input changed.
    VariableChanged { key: String, value: String },
    /// A textarea variable editor received an action.
    VariableEdited {
        key: String,
        action: text_editor::Action,
    },
    ReloadClicked,
    /// A reload settled; `version` gates stale results.
    Loaded { version: u64, outcome: LoadOutcome },
    /// A reload failed before producing any outcome.
    LoadFailed { version: u64, message: String },
    SignOutClicked,
    /// Remote sign-out settled (or was abandoned after its timeout).
    SignedOut { error: Option<String> },
}
