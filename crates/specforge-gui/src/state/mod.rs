//! Application state.
//!
//! The root `AppState` holds what outlives any single view (the backend
//! clients and the session); everything else is scoped to the current
//! `ViewState` variant, so navigating automatically clears transient UI
//! state.

pub mod dashboard;

pub use dashboard::{DashboardState, RowChoice};

use specforge_backend::{
    AuthClient, BackendConfig, Result as BackendResult, Session, TableClient,
};
use specforge_core::{TemplateKey, template};

/// Clients for the hosted service. Absent when configuration validation
/// failed, in which case the app shows the static config-error view.
#[derive(Debug, Clone)]
pub struct Backend {
    pub auth: AuthClient,
    pub tables: TableClient,
}

impl Backend {
    fn from_config(config: &BackendConfig) -> BackendResult<Self> {
        Ok(Self {
            auth: AuthClient::new(config)?,
            tables: TableClient::new(config)?,
        })
    }
}

/// Top-level application state.
pub struct AppState {
    /// Backend clients, absent on configuration error.
    pub backend: Option<Backend>,
    /// Current session; presence gates the dashboard.
    pub session: Option<Session>,
    /// Current view and its UI state.
    pub view: ViewState,
}

impl AppState {
    /// Build initial state from the environment.
    ///
    /// An invalid configuration produces the fatal error view; no client
    /// is constructed and nothing else is interactive.
    pub fn from_env() -> Self {
        match BackendConfig::from_env().and_then(|config| Backend::from_config(&config)) {
            Ok(backend) => Self {
                backend: Some(backend),
                session: None,
                view: ViewState::SignedOut(AuthForm::default()),
            },
            Err(err) => {
                tracing::error!("configuration error: {err}");
                Self {
                    backend: None,
                    session: None,
                    view: ViewState::ConfigError(err.to_string()),
                }
            }
        }
    }
}

/// Current view and its associated UI state.
pub enum ViewState {
    /// Fatal configuration error; nothing is interactive.
    ConfigError(String),
    /// The template generator. Never touches the network.
    Generator(GeneratorState),
    /// Sign-in/sign-up form.
    SignedOut(AuthForm),
    /// The authenticated dashboard.
    Dashboard(DashboardState),
}

// =============================================================================
// TEMPLATE GENERATOR
// =============================================================================

/// Template generator view state.
#[derive(Debug, Clone)]
pub struct GeneratorState {
    pub selected: TemplateKey,
    pub heading: String,
    pub body: String,
}

impl GeneratorState {
    /// Fresh generator with the feature template pre-rendered, matching
    /// the initial render of the page this view replaces.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            selected: TemplateKey::Feature,
            heading: String::new(),
            body: String::new(),
        };
        state.generate();
        state
    }

    /// Write the selected template into the output.
    pub fn generate(&mut self) {
        let selected = template(self.selected);
        self.heading = selected.heading.to_string();
        self.body = selected.body.to_string();
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// AUTH FORM
// =============================================================================

/// Sign-in vs sign-up submode of the signed-out view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// Submit button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Sign up",
        }
    }

    /// Label of the link that switches to the other submode.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Sign up",
            Self::SignUp => "Have an account? Sign in",
        }
    }

    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Signed-out view state.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    /// Inline, human-readable failure from the last attempt.
    pub error: Option<String>,
    /// True while a sign-in/sign-up request is in flight.
    pub authenticating: bool,
}

impl AuthForm {
    /// A form carrying an initial error, used after a forced sign-out.
    #[must_use]
    pub fn with_error(error: Option<String>) -> Self {
        Self {
            error,
            ..Self::default()
        }
    }

    /// Validate the form before submission.
    #[must_use]
    pub fn validation_error(&self) -> Option<String> {
        if self.email.trim().is_empty() {
            return Some("Enter an email address.".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Some(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generator_pre_renders_the_feature_template() {
        let state = GeneratorState::new();
        assert_eq!(state.heading, "Feature Spec");
        assert!(state.body.starts_with("## Problem"));
    }

    #[test]
    fn short_password_fails_validation() {
        let form = AuthForm {
            email: "dev@example.com".to_string(),
            password: "12345".to_string(),
            ..AuthForm::default()
        };
        assert!(form.validation_error().unwrap().contains("at least 6"));

        let form = AuthForm {
            email: "dev@example.com".to_string(),
            password: "123456".to_string(),
            ..AuthForm::default()
        };
        assert_eq!(form.validation_error(), None);
    }

    #[test]
    fn mode_toggles_between_submodes() {
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
    }
}
