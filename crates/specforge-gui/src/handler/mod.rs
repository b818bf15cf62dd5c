//! Message handlers, grouped by view.
//!
//! Each handler implements [`MessageHandler`] for one message type and is
//! dispatched from `App::update`. Handlers own all state transitions; views
//! stay pure.

mod auth;
mod dashboard;
mod generator;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use auth::AuthHandler;
pub use dashboard::DashboardHandler;
pub(crate) use dashboard::start_reload;
pub use generator::GeneratorHandler;

/// Trait for handling messages in the Elm architecture.
///
/// Separates message handling from the `App` struct so each view's
/// transitions can be tested independently of the widget tree.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
