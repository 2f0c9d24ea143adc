//! Validation source bookkeeping across worksheets.
//!
//! Two kinds of list validation point elsewhere in the workbook: columns
//! repeated from an earlier sheet reference that sheet's data range, and
//! enum or codelist columns reference a code column on the hidden enum
//! sheet. Both need the workbook-order state collected here while the
//! data sheets are written.

use std::collections::HashMap;

use rust_xlsxwriter::utility;

use super::super::GeneratorResult;
use super::cast;

/// Name of the hidden worksheet holding validation source columns.
pub(crate) const ENUM_SHEET_NAME: &str = "# Enums";

/// Where each field path was first written.
pub(super) struct ColumnCatalog {
    first_data_row: u32,
    last_data_row: u32,
    columns: HashMap<String, ColumnRef>,
}

struct ColumnRef {
    sheet: String,
    column: u16,
}

impl ColumnCatalog {
    pub(super) fn new(first_data_row: u32, last_data_row: u32) -> Self {
        Self {
            first_data_row,
            last_data_row,
            columns: HashMap::new(),
        }
    }

    /// Record a written column. The first worksheet carrying a path stays
    /// the validation source for all later occurrences.
    pub(super) fn record(&mut self, path: &str, sheet: &str, column: u16) {
        self.columns
            .entry(path.to_string())
            .or_insert_with(|| ColumnRef {
                sheet: sheet.to_string(),
                column,
            });
    }

    /// List-validation formula pointing at the path's first occurrence.
    pub(super) fn reference_for(&self, path: &str) -> Option<String> {
        self.columns.get(path).map(|column_ref| {
            let name = utility::column_number_to_name(column_ref.column);
            format!(
                "={}!${name}${}:${name}${}",
                formula_sheet_reference(&column_ref.sheet),
                self.first_data_row + 1,
                self.last_data_row + 1,
            )
        })
    }
}

/// Code columns queued for the hidden enum sheet.
pub(super) struct EnumSheetPlan {
    columns: Vec<EnumColumn>,
}

pub(super) struct EnumColumn {
    pub(super) path: String,
    pub(super) codes: Vec<String>,
}

impl EnumSheetPlan {
    pub(super) fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Reserve a source column for the codes and return the validation
    /// formula referencing it. Identical columns are shared.
    pub(super) fn reference_for(&mut self, path: &str, codes: Vec<String>) -> GeneratorResult<String> {
        let index = match self
            .columns
            .iter()
            .position(|column| column.path == path && column.codes == codes)
        {
            Some(index) => index,
            None => {
                self.columns.push(EnumColumn {
                    path: path.to_string(),
                    codes,
                });
                self.columns.len() - 1
            }
        };
        let name = utility::column_number_to_name(cast::sheet_column(index)?);
        Ok(format!(
            "='{ENUM_SHEET_NAME}'!${name}$2:${name}${}",
            self.columns[index].codes.len() + 1
        ))
    }

    pub(super) fn columns(&self) -> &[EnumColumn] {
        &self.columns
    }
}

/// A worksheet name as it appears inside a formula: quoted unless it
/// could be mistaken for a cell reference or operator.
fn formula_sheet_reference(name: &str) -> String {
    let plain = !name.is_empty()
        && !name.chars().next().is_some_and(|c| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}
