//! Template generator message handler.
//!
//! Entirely synchronous: picking a template only changes the selection, the
//! Generate button renders the selected template into the output pane.

use iced::Task;

use super::MessageHandler;
use crate::message::{GeneratorMessage, Message};
use crate::state::{AppState, ViewState};

/// Handler for template generator messages.
pub struct GeneratorHandler;

impl MessageHandler<GeneratorMessage> for GeneratorHandler {
    fn handle(&self, state: &mut AppState, msg: GeneratorMessage) -> Task<Message> {
        let ViewState::Generator(generator) = &mut state.view else {
            return Task::none();
        };

        match msg {
            GeneratorMessage::TemplatePicked(key) => {
                generator.selected = key;
            }
            GeneratorMessage::GenerateClicked => {
                generator.generate();
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use specforge_core::TemplateKey;

    use super::*;
    use crate::state::GeneratorState;

    fn generator_state() -> AppState {
        AppState {
            backend: None,
            session: None,
            view: ViewState::Generator(GeneratorState::new()),
        }
    }

    #[test]
    fn picking_a_template_does_not_rerender_until_generate() {
        let mut state = generator_state();
        let _ = GeneratorHandler.handle(
            &mut state,
            GeneratorMessage::TemplatePicked(TemplateKey::Bugfix),
        );
        let ViewState::Generator(generator) = &state.view else {
            panic!("expected generator view");
        };
        assert_eq!(generator.selected, TemplateKey::Bugfix);
        // Output still shows the pre-rendered feature template.
        assert_eq!(generator.heading, "Feature Spec");

        let _ = GeneratorHandler.handle(&mut state, GeneratorMessage::GenerateClicked);
        let ViewState::Generator(generator) = &state.view else {
            panic!("expected generator view");
        };
        assert_eq!(generator.heading, "Bugfix Spec");
    }

    #[test]
    fn messages_outside_the_generator_view_are_ignored() {
        let mut state = generator_state();
        state.view = ViewState::ConfigError("bad".to_string());
        let _ = GeneratorHandler.handle(&mut state, GeneratorMessage::GenerateClicked);
        assert!(matches!(state.view, ViewState::ConfigError(_)));
    }
}
