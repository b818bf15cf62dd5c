//! Dashboard view state.
//!
//! Wraps the seeded [`DashboardData`] container with the current
//! workspace/module selection, the schema-derived form fields, and the
//! editing buffers for textarea fields.

use std::collections::BTreeMap;
use std::fmt;

use iced::widget::text_editor;

use specforge_core::{
    DashboardData, FieldType, Row, Selection, VariableField, filtered_modules,
    parse_variables_schema, row_id, row_label, set_default_selections,
};

/// A selectable row in a pick list: stringified id plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowChoice {
    pub id: String,
    pub label: String,
}

impl RowChoice {
    /// Build a choice from a row; rows without an id are not selectable.
    #[must_use]
    pub fn from_row(row: &Row) -> Option<Self> {
        Some(Self {
            id: row_id(row)?,
            label: row_label(row),
        })
    }
}

impl fmt::Display for RowChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// State of the authenticated dashboard view.
#[derive(Default)]
pub struct DashboardState {
    /// Seeded rows, status strings, and reload bookkeeping.
    pub data: DashboardData,
    /// Current workspace/module selection and variable values.
    pub selection: Selection,
    /// Form fields derived from the selected module's variables schema.
    pub fields: Vec<VariableField>,
    /// Editing buffers for textarea fields, keyed by variable key.
    pub editors: BTreeMap<String, text_editor::Content>,
    /// True while a sign-out request is in flight.
    pub signing_out: bool,
}

impl DashboardState {
    /// Re-establish the selection invariant and rebuild the derived form.
    ///
    /// Called after every reload and selection change.
    pub fn refresh(&mut self) {
        set_default_selections(&mut self.selection, &self.data.workspaces, &self.data.modules);
        self.refresh_fields();
    }

    /// The currently selected module row.
    #[must_use]
    pub fn selected_module(&self) -> Option<&Row> {
        let id = self.selection.module_id.as_deref()?;
        self.data
            .modules
            .iter()
            .find(|m| row_id(m).as_deref() == Some(id))
    }

    /// Workspace pick-list entries.
    #[must_use]
    pub fn workspace_choices(&self) -> Vec<RowChoice> {
        self.data
            .workspaces
            .iter()
            .filter_map(RowChoice::from_row)
            .collect()
    }

    /// Module pick-list entries, filtered to the selected workspace.
    #[must_use]
    pub fn module_choices(&self) -> Vec<RowChoice> {
        filtered_modules(&self.data.modules, self.selection.workspace_id.as_deref())
            .into_iter()
            .filter_map(|m| RowChoice::from_row(m))
            .collect()
    }

    /// The choice entry matching the selected workspace.
    #[must_use]
    pub fn selected_workspace_choice(&self) -> Option<RowChoice> {
        let id = self.selection.workspace_id.as_deref()?;
        self.workspace_choices().into_iter().find(|c| c.id == id)
    }

    /// The choice entry matching the selected module.
    #[must_use]
    pub fn selected_module_choice(&self) -> Option<RowChoice> {
        let id = self.selection.module_id.as_deref()?;
        self.module_choices().into_iter().find(|c| c.id == id)
    }

    /// Rebuild the field list and textarea buffers from the selected
    /// module's `variables_schema`, keeping buffers whose key survives.
    fn refresh_fields(&mut self) {
        self.fields =
            parse_variables_schema(self.selected_module().and_then(|m| m.get("variables_schema")));

        let mut editors = BTreeMap::new();
        for field in &self.fields {
            if field.field_type != FieldType::Textarea {
                continue;
            }
            let content = match self.editors.remove(&field.key) {
                Some(existing) => existing,
                None => text_editor::Content::with_text(
                    self.selection.values.get(&field.key).map_or("", |v| v),
                ),
            };
            editors.insert(field.key.clone(), content);
        }
        self.editors = editors;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn state_with_rows() -> DashboardState {
        let mut state = DashboardState::default();
        state.data.workspaces = vec![json!({"id": 1, "name": "Platform"})];
        state.data.modules = vec![
            json!({
                "id": 10,
                "workspace_id": 1,
                "name": "Auth",
                "variables_schema": [
                    {"key": "owner", "required": true},
                    {"key": "notes", "type": "textarea"},
                ],
            }),
            json!({"id": 11, "workspace_id": 1, "name": "Billing"}),
        ];
        state
    }

    #[test]
    fn refresh_selects_defaults_and_derives_fields() {
        let mut state = state_with_rows();
        state.refresh();
        assert_eq!(state.selection.workspace_id.as_deref(), Some("1"));
        assert_eq!(state.selection.module_id.as_deref(), Some("10"));
        assert_eq!(state.fields.len(), 2);
        // Only the textarea field gets an editing buffer.
        assert!(state.editors.contains_key("notes"));
        assert!(!state.editors.contains_key("owner"));
    }

    #[test]
    fn module_choices_follow_the_selected_workspace() {
        let mut state = state_with_rows();
        state
            .data
            .modules
            .push(json!({"id": 20, "workspace_id": 2, "name": "Other"}));
        state.refresh();
        let choices = state.module_choices();
        assert_eq!(choices.len(), 2);
        assert!(choices.iter().all(|c| c.id != "20"));
    }

    #[test]
    fn rows_without_id_are_not_selectable() {
        assert!(RowChoice::from_row(&json!({"name": "x"})).is_none());
        let choice = RowChoice::from_row(&json!({"id": 3})).unwrap();
        assert_eq!(choice.label, "3");
    }
}
