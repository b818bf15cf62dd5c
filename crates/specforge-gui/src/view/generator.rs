//! Spec-template generator view.
//!
//! Offline: a template picker, a Generate button, and the rendered starter
//! in a monospaced, scrollable pane ready to copy out.

use iced::widget::{button, column, container, pick_list, row, scrollable, text};
use iced::{Element, Font, Length};

use specforge_core::TemplateKey;

use crate::message::{GeneratorMessage, Message};
use crate::state::GeneratorState;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, card};

/// Render the template generator.
pub fn view_generator(generator: &GeneratorState) -> Element<'_, Message> {
    let controls = row![
        pick_list(
            TemplateKey::ALL.to_vec(),
            Some(generator.selected),
            |key| Message::Generator(GeneratorMessage::TemplatePicked(key)),
        ),
        button(text("Generate"))
            .on_press(Message::Generator(GeneratorMessage::GenerateClicked)),
        button(text("Back"))
            .style(button::secondary)
            .on_press(Message::CloseGenerator),
    ]
    .spacing(SPACING_SM);

    let output = container(
        scrollable(
            column![
                text(&generator.heading).size(20),
                text(&generator.body).font(Font::MONOSPACE).size(13),
            ]
            .spacing(SPACING_MD)
            .padding(SPACING_MD),
        )
        .height(Length::Fill),
    )
    .style(card)
    .width(Length::Fill)
    .height(Length::Fill);

    container(
        column![text("Spec Templates").size(24), controls, output].spacing(SPACING_MD),
    )
    .padding(SPACING_LG)
    .into()
}
