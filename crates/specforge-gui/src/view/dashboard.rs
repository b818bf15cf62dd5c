//! Authenticated dashboard view.
//!
//! Header with reload/sign-out, status lines from the last reload,
//! workspace/module pickers, the schema-driven variable form, and the tag
//! and taxonomy catalogs.

use iced::widget::{
    Space, button, column, container, pick_list, row, scrollable, text, text_editor,
};
use iced::{Alignment, Element, Length};

use specforge_core::{FieldType, Row, row_label};

use crate::component::{TextField, section_title};
use crate::message::{DashboardMessage, Message};
use crate::state::{AppState, DashboardState};
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, card, text_error, text_muted, text_warning,
};

/// Render the dashboard.
pub fn view_dashboard<'a>(state: &'a AppState, dashboard: &'a DashboardState) -> Element<'a, Message> {
    let content = column![
        view_header(state, dashboard),
        view_status(dashboard),
        view_selectors(dashboard),
        view_variable_form(dashboard),
        view_catalog("Tags", &dashboard.data.tags),
        view_catalog("Taxonomy", &dashboard.data.taxonomy),
    ]
    .spacing(SPACING_LG);

    scrollable(container(content).padding(SPACING_LG).width(Length::Fill)).into()
}

/// Title row with the signed-in email and the global actions.
fn view_header<'a>(state: &'a AppState, dashboard: &'a DashboardState) -> Element<'a, Message> {
    let email: Element<'a, Message> = match &state.session {
        Some(session) => text(&session.email).size(13).style(text_muted).into(),
        None => Space::new().into(),
    };

    let reload_label = if dashboard.data.loading {
        "Loading..."
    } else {
        "Reload"
    };
    let sign_out_label = if dashboard.signing_out {
        "Signing out..."
    } else {
        "Sign out"
    };

    row![
        text("Workspace Catalog").size(24),
        Space::new().width(Length::Fill),
        email,
        button(text("Templates"))
            .style(button::secondary)
            .on_press(Message::ShowGenerator),
        button(text(reload_label)).on_press_maybe(
            (!dashboard.data.loading).then_some(Message::Dashboard(DashboardMessage::ReloadClicked))
        ),
        button(text(sign_out_label))
            .style(button::danger)
            .on_press_maybe(
                (!dashboard.signing_out)
                    .then_some(Message::Dashboard(DashboardMessage::SignOutClicked))
            ),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

/// Status lines from the last reload: error, warning, and the empty-data
/// hint/guidance pair. Absent lines render nothing.
fn view_status(dashboard: &DashboardState) -> Element<'_, Message> {
    let mut lines = column![].spacing(SPACING_XS);

    if let Some(error) = &dashboard.data.error {
        lines = lines.push(text(error).style(text_error));
    }
    if let Some(warning) = &dashboard.data.warning {
        lines = lines.push(text(warning).style(text_warning));
    }
    if let Some(hint) = &dashboard.data.hint {
        lines = lines.push(text(hint).style(text_muted));
    }
    if let Some(guidance) = &dashboard.data.guidance {
        lines = lines.push(text(guidance).style(text_muted));
    }

    lines.into()
}

/// Workspace and module pickers. The module list follows the workspace.
fn view_selectors(dashboard: &DashboardState) -> Element<'_, Message> {
    let workspace_picker = column![
        text("Workspace").size(13).style(text_muted),
        pick_list(
            dashboard.workspace_choices(),
            dashboard.selected_workspace_choice(),
            |choice| Message::Dashboard(DashboardMessage::WorkspacePicked(choice)),
        )
        .placeholder("No workspaces"),
    ]
    .spacing(SPACING_XS);

    let module_picker = column![
        text("Module").size(13).style(text_muted),
        pick_list(
            dashboard.module_choices(),
            dashboard.selected_module_choice(),
            |choice| Message::Dashboard(DashboardMessage::ModulePicked(choice)),
        )
        .placeholder("No modules"),
    ]
    .spacing(SPACING_XS);

    row![workspace_picker, module_picker]
        .spacing(SPACING_MD)
        .into()
}

/// The variable form derived from the selected module's schema.
fn view_variable_form(dashboard: &DashboardState) -> Element<'_, Message> {
    let mut form = column![section_title("Variables")].spacing(SPACING_SM);

    if dashboard.fields.is_empty() {
        form = form.push(
            text("The selected module declares no variables.").style(text_muted),
        );
        return container(form).style(card).padding(SPACING_MD).width(Length::Fill).into();
    }

    for field in &dashboard.fields {
        form = form.push(view_field(dashboard, field));
    }

    container(form)
        .style(card)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .into()
}

/// One input in the variable form.
fn view_field<'a>(
    dashboard: &'a DashboardState,
    field: &'a specforge_core::VariableField,
) -> Element<'a, Message> {
    match field.field_type {
        FieldType::Textarea => {
            let Some(content) = dashboard.editors.get(&field.key) else {
                return Space::new().into();
            };
            let key = field.key.clone();
            let label = if field.required {
                format!("{} *", field.label)
            } else {
                field.label.clone()
            };
            column![
                text(label).size(13).style(text_muted),
                text_editor(content)
                    .placeholder(field.placeholder.as_str())
                    .height(96.0)
                    .on_action(move |action| {
                        Message::Dashboard(DashboardMessage::VariableEdited {
                            key: key.clone(),
                            action,
                        })
                    }),
            ]
            .spacing(SPACING_XS)
            .into()
        }
        FieldType::Text | FieldType::Number => {
            let key = field.key.clone();
            let value = dashboard
                .selection
                .values
                .get(&field.key)
                .map_or("", |v| v.as_str());
            TextField::new(&field.label, value, &field.placeholder, move |value| {
                Message::Dashboard(DashboardMessage::VariableChanged {
                    key: key.clone(),
                    value,
                })
            })
            .required(field.required)
            .view()
        }
    }
}

/// A read-only catalog card listing row labels with a count.
fn view_catalog<'a>(title: &'a str, rows: &'a [Row]) -> Element<'a, Message> {
    let names: Vec<String> = rows.iter().map(row_label).collect();
    let body: Element<'a, Message> = if names.is_empty() {
        text("No entries.").style(text_muted).into()
    } else {
        text(names.join(", ")).size(13).into()
    };

    container(
        column![
            section_title(title),
            text(format!("{} entries", rows.len())).size(12).style(text_muted),
            body,
        ]
        .spacing(SPACING_XS),
    )
    .style(card)
    .padding(SPACING_MD)
    .width(Length::Fill)
    .into()
}
