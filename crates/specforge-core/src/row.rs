//! Untyped table rows.
//!
//! The remote store returns loosely typed key-value records. Ids come back
//! as numbers or strings depending on the column type, so all comparisons
//! go through the stringified form.

use serde_json::Value;

/// A single row from the remote store.
pub type Row = Value;

/// Read a field as a display string.
///
/// Strings are returned as-is, numbers and booleans are stringified,
/// everything else (objects, arrays, null) is absent.
#[must_use]
pub fn row_str(row: &Row, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The row's `id` field, stringified.
#[must_use]
pub fn row_id(row: &Row) -> Option<String> {
    row_str(row, "id")
}

/// A human-readable label for a row: `name`, then `title`, then the id.
#[must_use]
pub fn row_label(row: &Row) -> String {
    row_str(row, "name")
        .or_else(|| row_str(row, "title"))
        .or_else(|| row_id(row))
        .unwrap_or_else(|| "(unnamed)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_ids_stringify() {
        let row = json!({"id": 7, "name": "Core"});
        assert_eq!(row_id(&row), Some("7".to_string()));
    }

    #[test]
    fn label_prefers_name_over_id() {
        assert_eq!(row_label(&json!({"id": 1, "name": "Alpha"})), "Alpha");
        assert_eq!(row_label(&json!({"id": 1, "title": "Beta"})), "Beta");
        assert_eq!(row_label(&json!({"id": 1})), "1");
        assert_eq!(row_label(&json!({})), "(unnamed)");
    }

    #[test]
    fn nested_values_are_absent() {
        let row = json!({"meta": {"a": 1}, "list": [1]});
        assert_eq!(row_str(&row, "meta"), None);
        assert_eq!(row_str(&row, "list"), None);
    }
}
