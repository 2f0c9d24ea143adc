use rdls_core::template::{FieldValues, FlattenedField, TemplateSheet};
use rust_xlsxwriter::Color;
use tracing::warn;

use crate::codelist::CodelistRegistry;
use crate::config::{self, TemplateConfig};

use super::sheets::data::HEADER_ROW_COUNT;

/// Writes assembled template sheets into an XLSX workbook.
pub struct TemplateGenerator<'a> {
    pub(super) config: &'a TemplateConfig,
    codelists: &'a CodelistRegistry,
}

impl<'a> TemplateGenerator<'a> {
    /// Create a generator over the given configuration and codelists.
    #[must_use]
    pub const fn new(config: &'a TemplateConfig, codelists: &'a CodelistRegistry) -> Self {
        Self { config, codelists }
    }

    /// First and last data-entry rows, zero-based.
    pub(super) fn data_rows(&self) -> (u32, u32) {
        (HEADER_ROW_COUNT, HEADER_ROW_COUNT + self.config.input_rows - 1)
    }

    /// Tab color for a data sheet, keyed by the component its array
    /// belongs to. The root sheet and unlisted components get the
    /// default color.
    pub(super) fn tab_color(&self, sheet: &TemplateSheet) -> Option<Color> {
        let component = sheet.key.as_ref().and_then(|key| key.first_field());
        let hex = component
            .and_then(|name| self.config.tab_colors.get(name))
            .map_or(self.config.default_tab_color.as_str(), String::as_str);
        config::parse_color(hex).ok().map(Color::RGB)
    }

    /// Codes backing a column's dropdown: the schema enum when the list
    /// is closed, otherwise the codelist registry.
    pub(super) fn enum_codes(&self, field: &FlattenedField) -> Option<Vec<String>> {
        if let FieldValues::Enum(values) = &field.values {
            return Some(values.clone());
        }
        let name = field.codelist.as_deref()?;
        match self.codelists.get(name) {
            Some(codes) => Some(codes.to_vec()),
            None => {
                warn!(
                    "No codes available for codelist '{name}' (field '{}'); skipping its dropdown",
                    field.path
                );
                None
            }
        }
    }
}
