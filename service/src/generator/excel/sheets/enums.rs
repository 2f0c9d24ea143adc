use rust_xlsxwriter::Workbook;

use crate::generator::GeneratorResult;

use super::super::cast;
use super::super::generator::TemplateGenerator;
use super::super::validation::{ENUM_SHEET_NAME, EnumSheetPlan};

impl TemplateGenerator<'_> {
    /// Write the hidden sheet of validation source columns: one column
    /// per permitted-value list, the field path in the first cell and
    /// the codes below it.
    pub(crate) fn write_enum_sheet(
        workbook: &mut Workbook,
        plan: &EnumSheetPlan,
    ) -> GeneratorResult<()> {
        let worksheet = workbook.add_worksheet().set_name(ENUM_SHEET_NAME)?;
        worksheet.set_hidden(true);

        for (index, column) in plan.columns().iter().enumerate() {
            let col = cast::sheet_column(index)?;
            worksheet.write_string(0, col, &column.path)?;
            worksheet.write_column(1, col, &column.codes)?;
        }
        Ok(())
    }
}
