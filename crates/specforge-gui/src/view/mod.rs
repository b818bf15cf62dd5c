//! View implementations.
//!
//! Views are pure functions that render UI based on application state.
//!
//! ## Module Structure
//!
//! - `auth.rs` - Sign-in/sign-up form
//! - `dashboard.rs` - Seeded workspace catalog and variable form
//! - `generator.rs` - Static spec-template generator

pub mod auth;
pub mod dashboard;
pub mod generator;

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{AppState, ViewState};
use crate::theme::{SPACING_SM, SPACING_XL, text_error};

pub use auth::view_auth;
pub use dashboard::view_dashboard;
pub use generator::view_generator;

/// Render the current view.
pub fn view(state: &AppState) -> Element<'_, Message> {
    match &state.view {
        ViewState::ConfigError(message) => view_config_error(message),
        ViewState::Generator(generator) => view_generator(generator),
        ViewState::SignedOut(form) => view_auth(form),
        ViewState::Dashboard(dashboard) => view_dashboard(state, dashboard),
    }
}

/// Fatal configuration error screen. Nothing is interactive; the fix is an
/// environment change and a restart.
fn view_config_error(message: &str) -> Element<'_, Message> {
    container(
        column![
            text("Configuration error").size(24),
            text(message).style(text_error),
            text("Fix the environment variables and restart the application."),
        ]
        .spacing(SPACING_SM),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .padding(SPACING_XL)
    .into()
}
