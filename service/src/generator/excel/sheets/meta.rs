use rust_xlsxwriter::Workbook;

use crate::generator::GeneratorResult;

use super::super::generator::TemplateGenerator;
use super::data::HEADER_ROW_COUNT;

/// Name of the hidden configuration sheet read by the downstream
/// unflattening tool.
pub(crate) const META_SHEET_NAME: &str = "Meta";

impl TemplateGenerator<'_> {
    /// Write the hidden `Meta` sheet. Its single row tells the
    /// unflattening tool how many header rows to skip and to ignore
    /// hash-prefixed rows, columns and sheets.
    pub(crate) fn write_meta_sheet(workbook: &mut Workbook) -> GeneratorResult<()> {
        let worksheet = workbook.add_worksheet().set_name(META_SHEET_NAME)?;
        worksheet.set_hidden(true);
        worksheet.write_row(
            0,
            0,
            [
                "#".to_string(),
                format!("HeaderRows {HEADER_ROW_COUNT}"),
                "hashComments".to_string(),
            ],
        )?;
        Ok(())
    }
}
