//! Sign-in / sign-up view.
//!
//! A centered credential form with an inline error line and a link to the
//! offline template generator.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::component::TextField;
use crate::message::{AuthMessage, Message};
use crate::state::AuthForm;
use crate::theme::{SPACING_MD, SPACING_SM, text_error, text_muted};

/// Width of the credential form.
const FORM_WIDTH: f32 = 360.0;

/// Render the signed-out view.
pub fn view_auth(form: &AuthForm) -> Element<'_, Message> {
    let email = TextField::new("Email", &form.email, "you@example.com", |value| {
        Message::Auth(AuthMessage::EmailChanged(value))
    })
    .required(true)
    .view();

    let password = TextField::new("Password", &form.password, "At least 6 characters", |value| {
        Message::Auth(AuthMessage::PasswordChanged(value))
    })
    .secure(true)
    .required(true)
    .on_submit(Message::Auth(AuthMessage::SubmitClicked))
    .view();

    let submit_label = if form.authenticating {
        "Working..."
    } else {
        form.mode.label()
    };
    let submit = button(text(submit_label))
        .width(Length::Fill)
        .on_press_maybe((!form.authenticating).then_some(Message::Auth(AuthMessage::SubmitClicked)));

    let toggle = button(text(form.mode.toggle_label()).size(13))
        .style(button::text)
        .on_press(Message::Auth(AuthMessage::ModeToggled));

    let generator_link = button(text("Browse spec templates without signing in").size(13))
        .style(button::text)
        .on_press(Message::ShowGenerator);

    let mut card = column![
        text("SpecForge").size(28),
        text("Sign in to browse your workspace catalog").style(text_muted),
        email,
        password,
    ]
    .spacing(SPACING_MD)
    .width(FORM_WIDTH)
    .align_x(Alignment::Center);

    if let Some(error) = &form.error {
        card = card.push(text(error).size(13).style(text_error));
    }

    card = card.push(submit).push(toggle).push(generator_link);

    container(card)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(SPACING_SM)
        .into()
}
