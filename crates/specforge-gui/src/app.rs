//! Main application struct.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State, Message, Update, View. All
//! state changes happen in `update`; views are pure functions.

use iced::{Element, Task};

use crate::handler::{AuthHandler, DashboardHandler, GeneratorHandler, MessageHandler};
use crate::message::Message;
use crate::state::{AppState, AuthForm, DashboardState, GeneratorState, ViewState};
use crate::view;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Reads the backend configuration from the environment; an invalid
    /// configuration shows the fatal error view instead of the sign-in form.
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::from_env(),
        };
        (app, Task::none())
    }

    /// Window title.
    pub fn title(&self) -> String {
        "SpecForge".to_string()
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Generator(msg) => GeneratorHandler.handle(&mut self.state, msg),

            Message::Auth(msg) => AuthHandler.handle(&mut self.state, msg),

            Message::Dashboard(msg) => DashboardHandler.handle(&mut self.state, msg),

            Message::ShowGenerator => {
                if !matches!(self.state.view, ViewState::ConfigError(_)) {
                    self.state.view = ViewState::Generator(GeneratorState::new());
                }
                Task::none()
            }

            Message::CloseGenerator => {
                // Back to wherever the session says we belong. Leaving the
                // dashboard drops its rows, so returning triggers a reload.
                if self.state.session.is_some() {
                    self.state.view = ViewState::Dashboard(DashboardState::default());
                    crate::handler::start_reload(&mut self.state)
                } else {
                    self.state.view = ViewState::SignedOut(AuthForm::default());
                    Task::none()
                }
            }
        }
    }

    /// Render the current view.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_the_generator_without_a_session_returns_to_sign_in() {
        let mut app = App {
            state: AppState {
                backend: None,
                session: None,
                view: ViewState::Generator(GeneratorState::new()),
            },
        };
        let _ = app.update(Message::CloseGenerator);
        assert!(matches!(app.state.view, ViewState::SignedOut(_)));
    }

    #[test]
    fn the_generator_never_opens_over_a_config_error() {
        let mut app = App {
            state: AppState {
                backend: None,
                session: None,
                view: ViewState::ConfigError("missing".to_string()),
            },
        };
        let _ = app.update(Message::ShowGenerator);
        assert!(matches!(app.state.view, ViewState::ConfigError(_)));
    }
}
