//! Output-side types: flattened columns and assembled worksheets.

use crate::path::FieldPath;

/// Value constraint recorded in a column's `values` header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValues {
    /// No constraint declared.
    #[default]
    Unconstrained,
    /// A closed list of permitted values.
    Enum(Vec<String>),
    /// A string format name (`date`, `iri`, `email`, ...).
    Format(String),
}

impl FieldValues {
    /// Render the constraint the way the template's `values` row shows it.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Unconstrained => String::new(),
            Self::Enum(values) => format!("Enum: {}", values.join(", ")),
            Self::Format(name) => name.clone(),
        }
    }
}

/// One template column with the metadata carried in its header rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedField {
    /// Full path from the schema root, array steps rendered as `0`
    pub path: FieldPath,
    /// Field title (empty when the schema omits one)
    pub title: String,
    /// Field description (empty when the schema omits one)
    pub description: String,
    /// Whether the field is required by its immediate parent object
    pub required: bool,
    /// Declared type; scalar arrays render as `array[<items type>]`
    pub data_type: String,
    /// Value constraint for the `values` header row
    pub values: FieldValues,
    /// Codelist file name, when annotated
    pub codelist: Option<String>,
    /// Guidance for publishers filling in the column
    pub input_guidance: String,
}

impl FlattenedField {
    /// Whether the column holds `date`-formatted values.
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(&self.values, FieldValues::Format(name) if name == "date")
    }
}

/// One worksheet of the template: a named group of columns drawn from the
/// same enclosing array (or from the schema root).
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSheet {
    /// Worksheet name, workbook-unique and at most 31 characters
    pub name: String,
    /// Path of the enclosing array; `None` for the root sheet
    pub key: Option<FieldPath>,
    /// Columns in traversal order, linking identifiers first
    pub fields: Vec<FlattenedField>,
}

impl TemplateSheet {
    /// Whether this is the root sheet holding top-level fields.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_rendering() {
        let values = FieldValues::Enum(vec![
            "hazard".to_string(),
            "exposure".to_string(),
            "loss".to_string(),
        ]);
        assert_eq!(values.render(), "Enum: hazard, exposure, loss");

        assert_eq!(FieldValues::Format("iri".to_string()).render(), "iri");
        assert_eq!(FieldValues::Unconstrained.render(), "");
    }

    #[test]
    fn test_date_detection() {
        let field = FlattenedField {
            path: FieldPath::root().child("publication_date"),
            title: "Publication date".to_string(),
            description: String::new(),
            required: false,
            data_type: "string".to_string(),
            values: FieldValues::Format("date".to_string()),
            codelist: None,
            input_guidance: String::new(),
        };
        assert!(field.is_date());

        let iri = FlattenedField {
            values: FieldValues::Format("iri".to_string()),
            ..field
        };
        assert!(!iri.is_date());
    }
}
