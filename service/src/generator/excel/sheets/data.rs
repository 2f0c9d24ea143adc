use rdls_core::template::{FlattenedField, TemplateSheet};
use rust_xlsxwriter::{DataValidation, DataValidationRule, ExcelDateTime, Formula, Workbook};

use crate::generator::GeneratorResult;

use super::super::cast;
use super::super::formats::SheetFormats;
use super::super::generator::TemplateGenerator;
use super::super::validation::{ColumnCatalog, EnumSheetPlan};

/// Labels for the header rows, in row order.
pub(crate) const HEADER_LABELS: [&str; 8] = [
    "path",
    "title",
    "description",
    "required",
    "type",
    "values",
    "codelist",
    "input guidance",
];

/// Header rows before the data-entry area.
pub(crate) const HEADER_ROW_COUNT: u32 = 8;

/// Rows given extra height for wrapped text.
const TALL_ROWS: [u32; 3] = [2, 5, 7];
const TALL_ROW_HEIGHT: f64 = 30.0;

/// Width of the label column.
const LABEL_COLUMN_WIDTH: f64 = 11.0;

/// Minimum width of a field column.
const MIN_FIELD_COLUMN_WIDTH: usize = 16;

impl TemplateGenerator<'_> {
    /// Write one data sheet: the header block, the blank data-entry
    /// area, and the column validations.
    pub(crate) fn write_data_sheet(
        &self,
        workbook: &mut Workbook,
        sheet: &TemplateSheet,
        formats: &SheetFormats,
        catalog: &mut ColumnCatalog,
        enum_plan: &mut EnumSheetPlan,
    ) -> GeneratorResult<()> {
        let worksheet = workbook.add_worksheet().set_name(&sheet.name)?;
        if let Some(color) = self.tab_color(sheet) {
            worksheet.set_tab_color(color);
        }

        // Row formats style the whole header block; explicitly formatted
        // cells below override them.
        worksheet.set_row_format(0, &formats.path_row)?;
        worksheet.set_row_format(1, &formats.header_row)?;
        worksheet.set_row_format(2, &formats.wrapped_row)?;
        worksheet.set_row_format(3, &formats.header_row)?;
        worksheet.set_row_format(4, &formats.header_row)?;
        worksheet.set_row_format(5, &formats.wrapped_row)?;
        worksheet.set_row_format(6, &formats.header_row)?;
        worksheet.set_row_format(7, &formats.guidance_row)?;
        for row in TALL_ROWS {
            worksheet.set_row_height(row, TALL_ROW_HEIGHT)?;
        }

        for (row, label) in (0u32..).zip(HEADER_LABELS) {
            let format = if row + 1 == HEADER_ROW_COUNT {
                &formats.label_last
            } else {
                &formats.label
            };
            worksheet.write_string_with_format(row, 0, format!("# {label}"), format)?;
        }
        worksheet.set_column_width(0, LABEL_COLUMN_WIDTH)?;

        let (first_data_row, last_data_row) = self.data_rows();

        for (index, field) in sheet.fields.iter().enumerate() {
            let column = cast::field_column(index)?;
            let path = field.path.to_string();

            worksheet.write_string(0, column, &path)?;
            worksheet.write_string(1, column, &field.title)?;
            worksheet.write_string(2, column, &field.description)?;
            worksheet.write_string(3, column, if field.required { "Required" } else { "" })?;
            worksheet.write_string(4, column, &field.data_type)?;
            worksheet.write_string(5, column, field.values.render())?;
            worksheet.write_string(6, column, field.codelist.as_deref().unwrap_or_default())?;
            worksheet.write_string(7, column, &field.input_guidance)?;

            let input_format = formats.input_format(field);
            for row in first_data_row..=last_data_row {
                worksheet.write_blank(row, column, input_format)?;
            }
            worksheet.set_column_width(
                column,
                cast::column_width(path.chars().count(), MIN_FIELD_COLUMN_WIDTH),
            )?;

            if let Some(validation) = self.column_validation(field, &path, catalog, enum_plan)? {
                worksheet.add_data_validation(
                    first_data_row,
                    column,
                    last_data_row,
                    column,
                    &validation,
                )?;
            }
            catalog.record(&path, &sheet.name, column);
        }

        worksheet.set_freeze_panes(1, 1)?;
        Ok(())
    }

    /// The validation attached to a column, if any: permitted-value
    /// dropdowns first, then date bounds, then identifier lists sourced
    /// from the sheet where the column first appeared.
    fn column_validation(
        &self,
        field: &FlattenedField,
        path: &str,
        catalog: &ColumnCatalog,
        enum_plan: &mut EnumSheetPlan,
    ) -> GeneratorResult<Option<DataValidation>> {
        if let Some(codes) = self.enum_codes(field) {
            let formula = enum_plan.reference_for(path, codes)?;
            return Ok(Some(
                DataValidation::new().allow_list_formula(Formula::new(formula)),
            ));
        }
        if field.is_date() {
            let floor = ExcelDateTime::from_ymd(1900, 1, 1)?;
            return Ok(Some(DataValidation::new().allow_date(
                DataValidationRule::GreaterThanOrEqualTo(floor),
            )));
        }
        if let Some(formula) = catalog.reference_for(path) {
            return Ok(Some(
                DataValidation::new().allow_list_formula(Formula::new(formula)),
            ));
        }
        Ok(None)
    }
}
