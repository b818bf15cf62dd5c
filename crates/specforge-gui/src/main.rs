//! SpecForge - Desktop Application
//!
//! Generates engineering-spec starters and browses the seeded workspace
//! catalog of a hosted backend.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

mod app;
mod component;
mod handler;
mod message;
mod service;
mod state;
mod theme;
mod view;

use app::App;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting SpecForge");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: Size::new(960.0, 720.0),
            min_size: Some(Size::new(720.0, 540.0)),
            ..Default::default()
        })
        .run()
}
