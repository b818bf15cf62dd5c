//! Workspace/module selection state.
//!
//! Invariant: the selected module always belongs to the filtered module list
//! for the selected workspace, or is empty. Violated selections are
//! corrected by resetting to the first available entry, and variable values
//! are cleared whenever the module changes.

use std::collections::BTreeMap;

use crate::filter::filtered_modules;
use crate::row::{Row, row_id};

/// Current workspace/module selection plus the variable input values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected workspace id, stringified. Empty means none.
    pub workspace_id: Option<String>,
    /// Selected module id, stringified. Empty means none.
    pub module_id: Option<String>,
    /// Variable key → current input value for the selected module.
    pub values: BTreeMap<String, String>,
}

impl Selection {
    /// Select a workspace and re-establish the module invariant.
    pub fn select_workspace(
        &mut self,
        workspace_id: Option<String>,
        workspaces: &[Row],
        modules: &[Row],
    ) {
        self.workspace_id = workspace_id;
        set_default_selections(self, workspaces, modules);
    }

    /// Select a module, clearing variable values on change.
    pub fn select_module(&mut self, module_id: Option<String>) {
        if self.module_id != module_id {
            self.module_id = module_id;
            self.values.clear();
        }
    }
}

/// Correct an invalid selection.
///
/// Auto-selects the first workspace and the first matching module whenever
/// the current selection is empty or no longer present in the filtered
/// list. Clears variable values whenever the module ends up changing.
pub fn set_default_selections(selection: &mut Selection, workspaces: &[Row], modules: &[Row]) {
    let workspace_valid = selection
        .workspace_id
        .as_deref()
        .is_some_and(|id| workspaces.iter().any(|w| row_id(w).as_deref() == Some(id)));
    if !workspace_valid {
        selection.workspace_id = workspaces.first().and_then(row_id);
    }

    let filtered = filtered_modules(modules, selection.workspace_id.as_deref());
    let module_valid = selection
        .module_id
        .as_deref()
        .is_some_and(|id| filtered.iter().any(|m| row_id(m).as_deref() == Some(id)));
    if !module_valid {
        let next = filtered.first().and_then(|m| row_id(m));
        selection.select_module(next);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn seed() -> (Vec<Row>, Vec<Row>) {
        let workspaces = vec![json!({"id": 1, "name": "One"}), json!({"id": 2})];
        let modules = vec![
            json!({"id": 10, "workspace_id": 1}),
            json!({"id": 11, "workspace_id": 1}),
            json!({"id": 20, "workspace_id": 2}),
        ];
        (workspaces, modules)
    }

    #[test]
    fn empty_selection_picks_first_workspace_and_module() {
        let (workspaces, modules) = seed();
        let mut selection = Selection::default();
        set_default_selections(&mut selection, &workspaces, &modules);
        assert_eq!(selection.workspace_id.as_deref(), Some("1"));
        assert_eq!(selection.module_id.as_deref(), Some("10"));
    }

    #[test]
    fn valid_selection_is_left_alone() {
        let (workspaces, modules) = seed();
        let mut selection = Selection {
            workspace_id: Some("1".into()),
            module_id: Some("11".into()),
            values: BTreeMap::from([("k".to_string(), "v".to_string())]),
        };
        set_default_selections(&mut selection, &workspaces, &modules);
        assert_eq!(selection.module_id.as_deref(), Some("11"));
        assert_eq!(selection.values.len(), 1);
    }

    #[test]
    fn switching_workspace_resets_module_and_values() {
        let (workspaces, modules) = seed();
        let mut selection = Selection {
            workspace_id: Some("1".into()),
            module_id: Some("10".into()),
            values: BTreeMap::from([("k".to_string(), "v".to_string())]),
        };
        selection.select_workspace(Some("2".into()), &workspaces, &modules);
        assert_eq!(selection.workspace_id.as_deref(), Some("2"));
        assert_eq!(selection.module_id.as_deref(), Some("20"));
        assert!(selection.values.is_empty());
    }

    #[test]
    fn stale_workspace_resets_to_first() {
        let (workspaces, modules) = seed();
        let mut selection = Selection {
            workspace_id: Some("99".into()),
            module_id: Some("10".into()),
            values: BTreeMap::new(),
        };
        set_default_selections(&mut selection, &workspaces, &modules);
        assert_eq!(selection.workspace_id.as_deref(), Some("1"));
        assert_eq!(selection.module_id.as_deref(), Some("10"));
    }

    #[test]
    fn no_modules_leaves_selection_empty() {
        let workspaces = vec![json!({"id": 1})];
        let mut selection = Selection {
            workspace_id: None,
            module_id: Some("10".into()),
            values: BTreeMap::from([("k".to_string(), "v".to_string())]),
        };
        set_default_selections(&mut selection, &workspaces, &[]);
        assert_eq!(selection.module_id, None);
        assert!(selection.values.is_empty());
    }

    #[test]
    fn reselecting_same_module_keeps_values() {
        let mut selection = Selection {
            module_id: Some("10".into()),
            values: BTreeMap::from([("k".to_string(), "v".to_string())]),
            ..Selection::default()
        };
        selection.select_module(Some("10".into()));
        assert_eq!(selection.values.len(), 1);
        selection.select_module(Some("11".into()));
        assert!(selection.values.is_empty());
    }
}
