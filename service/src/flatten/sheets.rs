//! Worksheet assembly: grouping, naming, linking columns, sheet order
//!
//! Columns sharing a `sheet_key` become one worksheet. Every non-root
//! worksheet is prefixed with linking identifier columns (the root
//! identifier plus one per enclosing array) so filled rows can be joined
//! back into nested JSON. Worksheet names are derived from the key path
//! and must stay unique after truncation; a clash is a schema problem
//! the generator refuses to paper over.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use rdls_core::{
    error::{RdlsError, Result},
    path::FieldPath,
    template::{FlattenedField, TemplateSheet},
};
use tracing::warn;

use crate::config::{MAX_SHEET_NAME_LENGTH, TemplateConfig};

use super::{FlattenedEntry, fields};

/// Names claimed by the workbook's own sheets.
const RESERVED_SHEET_NAMES: [&str; 3] = ["Meta", "# Enums", "# Documentation"];

/// Groups flattened entries into named, ordered worksheets.
pub struct WorksheetAssembler<'a> {
    config: &'a TemplateConfig,
}

impl<'a> WorksheetAssembler<'a> {
    /// Create an assembler with the given configuration.
    #[must_use]
    pub const fn new(config: &'a TemplateConfig) -> Self {
        Self { config }
    }

    /// Assemble worksheets from flattened entries.
    ///
    /// # Errors
    ///
    /// Returns an `RdlsError` if two arrays produce the same worksheet
    /// name, or a name collides with one of the workbook's own sheets.
    pub fn assemble(&self, entries: &[FlattenedEntry]) -> Result<Vec<TemplateSheet>> {
        let mut groups: IndexMap<Option<FieldPath>, Vec<FlattenedField>> = IndexMap::new();
        let mut first_by_path: HashMap<String, FlattenedField> = HashMap::new();

        for entry in entries {
            let field = fields::build_field(entry);
            first_by_path
                .entry(field.path.to_string())
                .or_insert_with(|| field.clone());
            groups.entry(entry.sheet_key.clone()).or_default().push(field);
        }

        let array_keys: HashSet<String> = groups.keys().flatten().map(ToString::to_string).collect();

        let mut sheets = Vec::with_capacity(groups.len());
        for (key, mut sheet_fields) in groups {
            if let Some(key_path) = &key {
                let links = self.linking_fields(key_path, &array_keys, &first_by_path);
                sheet_fields.splice(0..0, links);
            }
            let name = match &key {
                None => self.config.main_sheet_name.clone(),
                Some(key_path) => self.sheet_name(key_path),
            };
            sheets.push(TemplateSheet {
                name,
                key,
                fields: sheet_fields,
            });
        }

        check_collisions(&sheets)?;
        Ok(self.order_sheets(sheets))
    }

    /// Identifier columns that tie a nested worksheet's rows back to
    /// their parents: the root identifier first, then one per enclosing
    /// array from the outside in.
    fn linking_fields(
        &self,
        key: &FieldPath,
        array_keys: &HashSet<String>,
        first_by_path: &HashMap<String, FlattenedField>,
    ) -> Vec<FlattenedField> {
        let mut links = Vec::new();
        if let Some(root_id) = first_by_path.get(&self.config.root_id) {
            links.push(root_id.clone());
        }
        for length in 1..key.depth() {
            let prefix = key.prefix(length);
            if !array_keys.contains(&prefix.to_string()) {
                continue;
            }
            let id_path = prefix.item().child(&self.config.root_id).to_string();
            if let Some(field) = first_by_path.get(&id_path) {
                links.push(field.clone());
            }
        }
        links
    }

    /// Derive a worksheet name from an array path: field names joined
    /// with `_`, every segment but the last truncated, reserved Excel
    /// characters stripped, the whole clamped to 31 characters.
    fn sheet_name(&self, key: &FieldPath) -> String {
        let names: Vec<&str> = key.field_names().collect();
        let mut parts = Vec::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if index + 1 < names.len() {
                parts.push(truncate_chars(name, self.config.truncation_length));
            } else {
                parts.push((*name).to_string());
            }
        }
        let joined = parts.join("_");
        let sanitized: String = joined
            .chars()
            .filter(|c| !matches!(c, '\\' | '/' | '?' | '*' | ':' | '[' | ']'))
            .collect();
        truncate_chars(&sanitized, MAX_SHEET_NAME_LENGTH)
    }

    fn order_sheets(&self, mut sheets: Vec<TemplateSheet>) -> Vec<TemplateSheet> {
        let mut ordered = Vec::with_capacity(sheets.len());
        for name in &self.config.sheet_order {
            if let Some(index) = sheets.iter().position(|sheet| sheet.name == *name) {
                ordered.push(sheets.remove(index));
            }
        }
        for sheet in sheets {
            warn!(
                "Worksheet '{}' is not listed in sheet_order; appending it after the configured sheets",
                sheet.name
            );
            ordered.push(sheet);
        }
        ordered
    }
}

fn check_collisions(sheets: &[TemplateSheet]) -> Result<()> {
    let mut seen: HashMap<&str, String> = HashMap::new();
    for sheet in sheets {
        let source = sheet.key.as_ref().map_or_else(
            || "the schema root".to_string(),
            |key| format!("'{key}'"),
        );
        if RESERVED_SHEET_NAMES.contains(&sheet.name.as_str()) {
            return Err(RdlsError::schema_validation_at(
                format!(
                    "Worksheet name '{}' (from {source}) is reserved for the workbook's own sheets",
                    sheet.name
                ),
                sheet.name.clone(),
            ));
        }
        if let Some(previous) = seen.insert(sheet.name.as_str(), source.clone()) {
            return Err(RdlsError::schema_validation_at(
                format!(
                    "Worksheet name '{}' is produced by both {previous} and {source}; rename one of the arrays",
                    sheet.name
                ),
                sheet.name.clone(),
            ));
        }
    }
    Ok(())
}

fn truncate_chars(text: &str, length: usize) -> String {
    text.chars().take(length).collect()
}
