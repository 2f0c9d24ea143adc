//! Shared cell formats for the template workbook.

use rdls_core::template::FlattenedField;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// Background of the header block and the label column.
const HEADER_BACKGROUND: u32 = 0x00EF_EFEF;
/// Font size for the wrapped metadata rows.
const SMALL_FONT_SIZE: f64 = 8.0;
/// Font size for the label column.
const LABEL_FONT_SIZE: f64 = 11.0;

/// Formats shared by every data sheet.
pub(super) struct SheetFormats {
    /// Header row 0, carrying the field paths.
    pub(super) path_row: Format,
    /// Plain header rows: title, required, type, codelist.
    pub(super) header_row: Format,
    /// Wrapped header rows: description and values.
    pub(super) wrapped_row: Format,
    /// Last header row, closing the header block with a bottom border.
    pub(super) guidance_row: Format,
    /// Label column cells.
    pub(super) label: Format,
    /// Label column cell on the last header row.
    pub(super) label_last: Format,
    /// Data cells of text-like columns; keeps leading zeros intact.
    text: Format,
    /// Data cells of date columns.
    date: Format,
    /// Data cells of number columns.
    number: Format,
    /// Data cells of everything else.
    plain: Format,
}

impl SheetFormats {
    pub(super) fn new() -> Self {
        let background = Color::RGB(HEADER_BACKGROUND);
        let header_row = Format::new().set_background_color(background);
        let wrapped_row = Format::new()
            .set_background_color(background)
            .set_font_size(SMALL_FONT_SIZE)
            .set_text_wrap()
            .set_align(FormatAlign::Top);
        let label = Format::new()
            .set_background_color(background)
            .set_bold()
            .set_font_size(LABEL_FONT_SIZE);

        Self {
            path_row: header_row.clone().set_bold(),
            guidance_row: wrapped_row.clone().set_border_bottom(FormatBorder::Thin),
            label_last: label.clone().set_border_bottom(FormatBorder::Thin),
            header_row,
            wrapped_row,
            label,
            text: Format::new().set_num_format("@"),
            date: Format::new().set_num_format("yyyy-mm-dd"),
            number: Format::new().set_num_format("#,##0.00"),
            plain: Format::new(),
        }
    }

    /// Format for a column's data-entry cells.
    pub(super) fn input_format(&self, field: &FlattenedField) -> &Format {
        if field.is_date() {
            return &self.date;
        }
        match field.data_type.as_str() {
            "number" => &self.number,
            "string" | "object" => &self.text,
            data_type if data_type.starts_with("array") => &self.text,
            _ => &self.plain,
        }
    }
}
