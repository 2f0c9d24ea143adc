use rdls_core::template::TemplateSheet;
use rust_xlsxwriter::{Format, Workbook};

use crate::generator::GeneratorResult;

use super::super::generator::TemplateGenerator;
use super::data::HEADER_LABELS;

/// Name of the visible documentation sheet. The hash prefix keeps the
/// downstream unflattening tool from reading it as data.
pub(crate) const DOCUMENTATION_SHEET_NAME: &str = "# Documentation";

const INSTRUCTIONS: [&str; 4] = [
    "Enter one record per row in the data-entry area of each worksheet, starting on row 9.",
    "Identifier columns join rows across worksheets; keep their values consistent.",
    "Rows, columns and sheets whose first cell or name starts with # are ignored when the workbook is converted to JSON.",
    "Pick from the dropdown where a column offers one.",
];

/// One note per header row, in [`HEADER_LABELS`] order.
const ROW_NOTES: [&str; 8] = [
    "The field's position in the dataset; 0 marks an array entry.",
    "The field's title.",
    "What the field holds.",
    "'Required' when every record must fill the field in.",
    "The field's JSON type.",
    "Permitted values or the expected text format.",
    "The codelist the permitted values are drawn from.",
    "How to enter values in the column.",
];

impl TemplateGenerator<'_> {
    /// Write the documentation sheet: instructions, the header-row
    /// legend, and a summary of the workbook's data sheets.
    pub(crate) fn write_documentation_sheet(
        &self,
        workbook: &mut Workbook,
        sheets: &[TemplateSheet],
    ) -> GeneratorResult<()> {
        let worksheet = workbook.add_worksheet().set_name(DOCUMENTATION_SHEET_NAME)?;
        let heading = Format::new().set_bold().set_font_size(14.0);
        let section = Format::new().set_bold();

        worksheet.set_column_width(0, 32)?;
        worksheet.set_column_width(1, 80)?;
        worksheet.set_column_width(2, 12)?;

        worksheet.write_string_with_format(
            0,
            0,
            "Risk Data Library Standard template",
            &heading,
        )?;

        let mut row = 2;
        worksheet.write_string_with_format(row, 0, "How to fill this template in", &section)?;
        row += 1;
        for instruction in INSTRUCTIONS {
            worksheet.write_string(row, 0, instruction)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "Header rows", &section)?;
        row += 1;
        for (label, note) in HEADER_LABELS.iter().zip(ROW_NOTES) {
            worksheet.write_string(row, 0, format!("# {label}"))?;
            worksheet.write_string(row, 1, note)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "Worksheets", &section)?;
        row += 1;
        worksheet.write_string_with_format(row, 0, "Sheet", &section)?;
        worksheet.write_string_with_format(row, 1, "Source array", &section)?;
        worksheet.write_string_with_format(row, 2, "Columns", &section)?;
        row += 1;
        for sheet in sheets {
            worksheet.write_string(row, 0, &sheet.name)?;
            let source = sheet
                .key
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            worksheet.write_string(row, 1, source)?;
            worksheet.write_string(row, 2, sheet.fields.len().to_string())?;
            row += 1;
        }

        Ok(())
    }
}
