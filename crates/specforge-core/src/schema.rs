//! Variables-schema parsing.
//!
//! A module row may carry a `variables_schema` column describing the inputs
//! its spec needs. The column is loosely typed: absent, a JSON-encoded
//! string, an ordered list of field descriptors, or an object keyed by field
//! name (optionally nested under `fields`/`properties`). Parsing is a
//! tagged-variant decode that tries each shape in turn and falls back to an
//! empty list, never an error.

use std::fmt;

use serde_json::{Map, Value};

/// Input widget kind for a variable field.
///
/// Anything outside this closed set normalizes to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Textarea,
}

impl FieldType {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("number") => Self::Number,
            Some("textarea") => Self::Textarea,
            _ => Self::Text,
        }
    }

    /// Canonical type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Textarea => "textarea",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized form-field descriptor derived from the schema.
///
/// Derived, never persisted. `key` is the only mandatory part; everything
/// else has a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableField {
    pub key: String,
    pub label: String,
    pub field_type: FieldType,
    pub placeholder: String,
    pub required: bool,
}

/// Parse a `variables_schema` column into an ordered field list.
///
/// Never panics and never errors: every malformed shape collapses to an
/// empty list, so a broken schema degrades to a module without variables.
#[must_use]
pub fn parse_variables_schema(schema: Option<&Value>) -> Vec<VariableField> {
    let Some(schema) = schema else {
        return Vec::new();
    };

    match schema {
        Value::Null => Vec::new(),
        // JSON-encoded string: parse and recurse once into the result.
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => parse_variables_schema(Some(&parsed)),
            Err(err) => {
                tracing::debug!("variables_schema is not valid JSON: {err}");
                Vec::new()
            }
        },
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| field_from_descriptor(entry, None))
            .collect(),
        Value::Object(map) => fields_from_map(map),
        _ => Vec::new(),
    }
}

/// Interpret an object as a field-keyed map, preferring a nested
/// `fields`/`properties` member when one is present.
fn fields_from_map(map: &Map<String, Value>) -> Vec<VariableField> {
    for nested_key in ["fields", "properties"] {
        match map.get(nested_key) {
            Some(Value::Array(entries)) => {
                return entries
                    .iter()
                    .filter_map(|entry| field_from_descriptor(entry, None))
                    .collect();
            }
            Some(Value::Object(nested)) => {
                return nested
                    .iter()
                    .filter_map(|(key, value)| field_from_descriptor(value, Some(key)))
                    .collect();
            }
            _ => {}
        }
    }

    map.iter()
        .filter_map(|(key, value)| field_from_descriptor(value, Some(key)))
        .collect()
}

/// Normalize one descriptor entry.
///
/// The key resolves from the descriptor's `key`, then `name`, then the
/// enclosing map key; entries without any of those are dropped.
fn field_from_descriptor(entry: &Value, map_key: Option<&str>) -> Option<VariableField> {
    let descriptor = entry.as_object();

    let get_str = |name: &str| -> Option<String> {
        descriptor?
            .get(name)
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
    };

    let key = get_str("key")
        .or_else(|| get_str("name"))
        .or_else(|| map_key.map(ToOwned::to_owned))
        .filter(|k| !k.is_empty())?;

    let label = get_str("label").unwrap_or_else(|| key.clone());
    let field_type = FieldType::parse(
        descriptor
            .and_then(|d| d.get("type"))
            .and_then(Value::as_str),
    );
    let placeholder = get_str("placeholder").unwrap_or_default();
    let required = descriptor
        .and_then(|d| d.get("required"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Some(VariableField {
        key,
        label,
        field_type,
        placeholder,
        required,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_schema_is_empty() {
        assert!(parse_variables_schema(None).is_empty());
        assert!(parse_variables_schema(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn malformed_json_string_is_empty() {
        let schema = json!("{not valid json");
        assert!(parse_variables_schema(Some(&schema)).is_empty());
    }

    #[test]
    fn json_string_parses_recursively() {
        let schema = json!("[{\"key\": \"env\", \"type\": \"textarea\"}]");
        let fields = parse_variables_schema(Some(&schema));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "env");
        assert_eq!(fields[0].field_type, FieldType::Textarea);
    }

    #[test]
    fn array_normalizes_in_order_with_defaults() {
        let schema = json!([{"name": "x"}, {"key": "y", "type": "number"}]);
        let fields = parse_variables_schema(Some(&schema));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].key, "x");
        assert_eq!(fields[0].label, "x");
        assert_eq!(fields[0].field_type, FieldType::Text);
        assert!(!fields[0].required);
        assert_eq!(fields[1].key, "y");
        assert_eq!(fields[1].field_type, FieldType::Number);
    }

    #[test]
    fn entries_without_a_key_are_dropped() {
        let schema = json!([{"label": "no key"}, {"key": "kept"}, "junk", 42]);
        let fields = parse_variables_schema(Some(&schema));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "kept");
    }

    #[test]
    fn object_is_a_field_keyed_map() {
        let schema = json!({
            "title": {"label": "Title", "required": true},
            "count": {"type": "number", "placeholder": "0"},
        });
        let mut fields = parse_variables_schema(Some(&schema));
        fields.sort_by(|a, b| a.key.cmp(&b.key));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].key, "count");
        assert_eq!(fields[0].field_type, FieldType::Number);
        assert_eq!(fields[0].placeholder, "0");
        assert_eq!(fields[1].key, "title");
        assert_eq!(fields[1].label, "Title");
        assert!(fields[1].required);
    }

    #[test]
    fn nested_fields_member_wins_over_siblings() {
        let schema = json!({
            "version": 2,
            "fields": [{"key": "a"}, {"key": "b"}],
        });
        let fields = parse_variables_schema(Some(&schema));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].key, "a");
        assert_eq!(fields[1].key, "b");
    }

    #[test]
    fn nested_properties_object_is_supported() {
        let schema = json!({"properties": {"p": {"type": "textarea"}}});
        let fields = parse_variables_schema(Some(&schema));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "p");
        assert_eq!(fields[0].field_type, FieldType::Textarea);
    }

    #[test]
    fn unknown_type_normalizes_to_text() {
        let schema = json!([{"key": "k", "type": "datetime"}]);
        let fields = parse_variables_schema(Some(&schema));
        assert_eq!(fields[0].field_type, FieldType::Text);
    }

    proptest! {
        /// Any string input parses without panicking.
        #[test]
        fn arbitrary_strings_never_panic(raw in ".*") {
            let schema = Value::String(raw);
            let _ = parse_variables_schema(Some(&schema));
        }
    }
}
