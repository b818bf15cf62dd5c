//! Reusable form components.
//!
//! Builder-style widgets shared by the sign-in form and the variable form,
//! keeping labels, required markers, and inline errors consistent.

use iced::widget::{column, text, text_input};
use iced::Element;

use crate::theme::{SPACING_XS, text_error, text_muted};

/// A labelled single-line text field with an optional required marker and
/// inline error.
///
/// # Example
/// ```ignore
/// TextField::new("Email", &form.email, "you@example.com", |s| {
///     Message::Auth(AuthMessage::EmailChanged(s))
/// })
/// .required(true)
/// .view()
/// ```
pub struct TextField<M> {
    label: String,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
    on_submit: Option<M>,
    secure: bool,
    required: bool,
    error: Option<String>,
}

impl<M: Clone + 'static> TextField<M> {
    /// Create a new text field.
    pub fn new(
        label: impl Into<String>,
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
            on_submit: None,
            secure: false,
            required: false,
            error: None,
        }
    }

    /// Mask the input (passwords).
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Mark field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Message produced when Enter is pressed in the field.
    pub fn on_submit(mut self, message: M) -> Self {
        self.on_submit = Some(message);
        self
    }

    /// Set an error message to display below the field.
    pub fn error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Build the text field element.
    pub fn view(self) -> Element<'static, M> {
        let label = if self.required {
            format!("{} *", self.label)
        } else {
            self.label
        };

        let mut input = text_input(&self.placeholder, &self.value)
            .on_input(self.on_change)
            .secure(self.secure);
        if let Some(message) = self.on_submit {
            input = input.on_submit(message);
        }

        let mut field = column![text(label).size(13).style(text_muted), input];
        if let Some(error) = self.error {
            field = field.push(text(error).size(12).style(text_error));
        }
        field.spacing(SPACING_XS).into()
    }
}

/// Section heading used above form groups and lists.
pub fn section_title<M: 'static>(label: &str) -> Element<'_, M> {
    text(label).size(16).into()
}
