use std::path::Path;

use rdls_core::template::TemplateSheet;
use rust_xlsxwriter::Workbook;

use super::super::{GeneratorError, GeneratorResult};
use super::formats::SheetFormats;
use super::generator::TemplateGenerator;
use super::validation::{ColumnCatalog, EnumSheetPlan};

impl TemplateGenerator<'_> {
    /// Generate the template workbook and save it to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file exists and `overwrite` is not
    /// set, if workbook generation fails, or if the file cannot be
    /// written.
    pub fn generate_file(
        &self,
        sheets: &[TemplateSheet],
        path: &Path,
        overwrite: bool,
    ) -> GeneratorResult<()> {
        if path.exists() && !overwrite {
            return Err(GeneratorError::Generation(format!(
                "Output file {} already exists (pass --overwrite to replace it)",
                path.display()
            )));
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.generate_workbook(sheets)?;
        std::fs::write(path, content).map_err(|e| {
            GeneratorError::Generation(format!("Failed to write file {}: {e}", path.display()))
        })?;
        Ok(())
    }

    /// Generate the template workbook as a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if a sheet exceeds Excel's column limit or the
    /// XLSX writer rejects the workbook.
    pub fn generate_workbook(&self, sheets: &[TemplateSheet]) -> GeneratorResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let formats = SheetFormats::new();

        self.write_documentation_sheet(&mut workbook, sheets)?;

        let (first_data_row, last_data_row) = self.data_rows();
        let mut catalog = ColumnCatalog::new(first_data_row, last_data_row);
        let mut enum_plan = EnumSheetPlan::new();
        for sheet in sheets {
            self.write_data_sheet(&mut workbook, sheet, &formats, &mut catalog, &mut enum_plan)?;
        }

        Self::write_enum_sheet(&mut workbook, &enum_plan)?;
        Self::write_meta_sheet(&mut workbook)?;

        // Open on the main sheet when the schema produced one.
        if let Ok(main) = workbook.worksheet_from_name(&self.config.main_sheet_name) {
            main.set_active(true);
        }

        workbook
            .save_to_buffer()
            .map_err(|e| GeneratorError::Generation(format!("Failed to save workbook: {e}")))
    }
}
