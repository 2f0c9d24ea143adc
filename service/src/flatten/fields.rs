//! Column metadata derived from flattened schema nodes
//!
//! Turns each [`FlattenedEntry`] into the [`FlattenedField`] that backs a
//! template column: display type, permitted values, codelist name, and
//! the guidance line shown to people filling the template in.

use rdls_core::{
    schema::SchemaNode,
    template::{FieldValues, FlattenedField},
};
use tracing::warn;

use super::FlattenedEntry;

/// Downstream tooling splits array cells on semicolons, so every
/// scalar-array column carries this note.
const ARRAY_GUIDANCE: &str = "Separate multiple values with a semicolon (;).";
const ENUM_GUIDANCE: &str = "Enter one of the permitted values.";
const DATE_GUIDANCE: &str = "Enter the date in YYYY-MM-DD format.";
const IRI_GUIDANCE: &str = "Enter a resolvable web address.";
const EMAIL_GUIDANCE: &str = "Enter an email address.";

/// Build the template column for a flattened entry.
pub(crate) fn build_field(entry: &FlattenedEntry) -> FlattenedField {
    let node = &entry.node;
    let is_array = node.is_array();

    // For scalar arrays the value constraints live on the item schema.
    let constrained: &SchemaNode = if is_array {
        node.items.as_deref().unwrap_or(node)
    } else {
        node
    };

    let data_type = if is_array {
        match node
            .items
            .as_deref()
            .and_then(|items| items.type_field.primary())
        {
            Some(item_type) => format!("array[{item_type}]"),
            None => "array".to_string(),
        }
    } else {
        match node.type_field.primary() {
            Some(type_name) => type_name.to_string(),
            None => {
                warn!("Field '{}' declares no type", entry.path);
                String::new()
            }
        }
    };

    let values = if constrained.enum_values.is_empty() {
        match &constrained.format {
            Some(format) => FieldValues::Format(format.clone()),
            None => FieldValues::Unconstrained,
        }
    } else {
        FieldValues::Enum(
            constrained
                .enum_values
                .iter()
                .map(render_enum_value)
                .collect(),
        )
    };

    let codelist = node
        .codelist
        .clone()
        .or_else(|| constrained.codelist.clone());

    let input_guidance = node
        .input_guidance
        .clone()
        .or_else(|| constrained.input_guidance.clone())
        .unwrap_or_else(|| derived_guidance(is_array, &values, codelist.is_some()));

    let title = match node.title.as_ref().or(constrained.title.as_ref()) {
        Some(title) => title.clone(),
        None => {
            warn!("Field '{}' has no title", entry.path);
            String::new()
        }
    };
    let description = match node
        .description
        .as_ref()
        .or(constrained.description.as_ref())
    {
        Some(description) => description.clone(),
        None => {
            warn!("Field '{}' has no description", entry.path);
            String::new()
        }
    };

    FlattenedField {
        path: entry.path.clone(),
        title,
        description,
        required: entry.required,
        data_type,
        values,
        codelist,
        input_guidance,
    }
}

fn render_enum_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn derived_guidance(is_array: bool, values: &FieldValues, has_codelist: bool) -> String {
    if is_array {
        return ARRAY_GUIDANCE.to_string();
    }
    if has_codelist || matches!(values, FieldValues::Enum(_)) {
        return ENUM_GUIDANCE.to_string();
    }
    if let FieldValues::Format(name) = values {
        let text = match name.as_str() {
            "date" => DATE_GUIDANCE,
            "iri" | "uri" => IRI_GUIDANCE,
            "email" => EMAIL_GUIDANCE,
            _ => "",
        };
        return text.to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rdls_core::path::FieldPath;

    fn entry(path: &str, required: bool, json: &str) -> FlattenedEntry {
        let node: SchemaNode = serde_json::from_str(json).expect("node should deserialize");
        let mut field_path = FieldPath::root();
        for segment in path.split('/') {
            field_path = if segment == "0" {
                field_path.item()
            } else {
                field_path.child(segment)
            };
        }
        FlattenedEntry {
            path: field_path,
            sheet_key: None,
            required,
            node,
        }
    }

    #[test]
    fn test_plain_string_field() {
        let field = build_field(&entry(
            "title",
            true,
            r#"{"type": "string", "title": "Title", "description": "A short name."}"#,
        ));
        assert_eq!(field.title, "Title");
        assert_eq!(field.description, "A short name.");
        assert_eq!(field.data_type, "string");
        assert!(field.required);
        assert_eq!(field.values, FieldValues::Unconstrained);
        assert_eq!(field.input_guidance, "");
    }

    #[test]
    fn test_enum_field() {
        let field = build_field(&entry(
            "status",
            false,
            r#"{"type": "string", "enum": ["draft", "active"]}"#,
        ));
        assert_eq!(
            field.values,
            FieldValues::Enum(vec!["draft".to_string(), "active".to_string()])
        );
        assert_eq!(field.input_guidance, "Enter one of the permitted values.");
    }

    #[test]
    fn test_non_string_enum_values_render_as_json() {
        let field = build_field(&entry(
            "level",
            false,
            r#"{"type": "integer", "enum": [1, 2, 3]}"#,
        ));
        assert_eq!(
            field.values,
            FieldValues::Enum(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn test_date_format_field() {
        let field = build_field(&entry(
            "publication_date",
            false,
            r#"{"type": "string", "format": "date"}"#,
        ));
        assert_eq!(field.values, FieldValues::Format("date".to_string()));
        assert!(field.is_date());
        assert_eq!(field.input_guidance, "Enter the date in YYYY-MM-DD format.");
    }

    #[test]
    fn test_iri_and_email_guidance() {
        let iri = build_field(&entry(
            "url",
            false,
            r#"{"type": "string", "format": "iri"}"#,
        ));
        assert_eq!(iri.input_guidance, "Enter a resolvable web address.");

        let email = build_field(&entry(
            "contact",
            false,
            r#"{"type": "string", "format": "email"}"#,
        ));
        assert_eq!(email.input_guidance, "Enter an email address.");
    }

    #[test]
    fn test_scalar_array_of_strings() {
        let field = build_field(&entry(
            "tags",
            false,
            r#"{"type": "array", "items": {"type": "string"}}"#,
        ));
        assert_eq!(field.data_type, "array[string]");
        assert_eq!(
            field.input_guidance,
            "Separate multiple values with a semicolon (;)."
        );
    }

    #[test]
    fn test_array_guidance_wins_over_enum_guidance() {
        let field = build_field(&entry(
            "risk_data_type",
            true,
            r#"{
                "type": "array",
                "items": {"type": "string", "enum": ["hazard", "loss"]},
                "codelist": "risk_data_type.csv",
                "openCodelist": false
            }"#,
        ));
        assert_eq!(field.data_type, "array[string]");
        assert_eq!(
            field.values,
            FieldValues::Enum(vec!["hazard".to_string(), "loss".to_string()])
        );
        assert_eq!(field.codelist, Some("risk_data_type.csv".to_string()));
        assert_eq!(
            field.input_guidance,
            "Separate multiple values with a semicolon (;)."
        );
    }

    #[test]
    fn test_codelist_on_items_is_picked_up() {
        let field = build_field(&entry(
            "hazard_type",
            false,
            r#"{
                "type": "array",
                "items": {"type": "string", "codelist": "hazard_type.csv"}
            }"#,
        ));
        assert_eq!(field.codelist, Some("hazard_type.csv".to_string()));
    }

    #[test]
    fn test_explicit_guidance_wins_over_derived() {
        let field = build_field(&entry(
            "bbox",
            false,
            r#"{
                "type": "array",
                "items": {"type": "number"},
                "input_guidance": "Enter west;south;east;north."
            }"#,
        ));
        assert_eq!(field.input_guidance, "Enter west;south;east;north.");
    }

    #[test]
    fn test_missing_annotations_leave_cells_empty() {
        let field = build_field(&entry("mystery", false, r#"{}"#));
        assert_eq!(field.title, "");
        assert_eq!(field.description, "");
        assert_eq!(field.data_type, "");
        assert_eq!(field.values, FieldValues::Unconstrained);
    }

    #[test]
    fn test_array_item_title_fills_missing_array_title() {
        let field = build_field(&entry(
            "codes",
            false,
            r#"{
                "type": "array",
                "items": {"type": "string", "title": "Code", "description": "A code."}
            }"#,
        ));
        assert_eq!(field.title, "Code");
        assert_eq!(field.description, "A code.");
    }
}
