//! Workspace/module filtering.

use crate::row::{Row, row_str};

/// Property names a module may use to reference its workspace, in priority
/// order. The first one present on the row wins.
const WORKSPACE_REF_KEYS: [&str; 3] = ["workspace_id", "workspaceId", "workspace"];

/// The module's workspace reference, stringified.
#[must_use]
pub fn module_workspace_ref(module: &Row) -> Option<String> {
    WORKSPACE_REF_KEYS
        .iter()
        .find_map(|key| row_str(module, key))
}

/// Modules belonging to the selected workspace.
///
/// Ids are compared stringwise since the store does not fix their type.
/// With no workspace selected, the full list is returned unfiltered.
#[must_use]
pub fn filtered_modules<'a>(
    modules: &'a [Row],
    selected_workspace_id: Option<&str>,
) -> Vec<&'a Row> {
    match selected_workspace_id {
        None | Some("") => modules.iter().collect(),
        Some(workspace_id) => modules
            .iter()
            .filter(|module| module_workspace_ref(module).as_deref() == Some(workspace_id))
            .collect(),
    }
}
