use super::super::GeneratorError;

/// Excel's column limit per worksheet.
const MAX_EXCEL_COLUMNS: usize = 16_384;

/// Worksheet column for a zero-based column index.
pub(super) fn sheet_column(index: usize) -> Result<u16, GeneratorError> {
    if index >= MAX_EXCEL_COLUMNS {
        return Err(GeneratorError::Generation(format!(
            "Too many columns for Excel: {index} (max: {MAX_EXCEL_COLUMNS})"
        )));
    }
    u16::try_from(index)
        .map_err(|_| GeneratorError::Generation(format!("Column index {index} cannot fit in u16")))
}

/// Worksheet column for the `index`-th template field. Column 0 holds the
/// header row labels, so fields start at column 1.
pub(super) fn field_column(index: usize) -> Result<u16, GeneratorError> {
    sheet_column(index + 1)
}

/// Column width fitting `chars` characters, at least `minimum` and capped
/// at Excel's maximum of 255.
pub(super) fn column_width(chars: usize, minimum: usize) -> f64 {
    let width = chars.max(minimum).min(255);
    u32::try_from(width).map_or(255.0, f64::from)
}
