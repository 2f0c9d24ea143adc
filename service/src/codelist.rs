//! Codelist loading for dropdown validation
//!
//! RDLS publishes its open codelists as CSV files with a `Code` column.
//! The registry loads every `*.csv` file from a local directory up front
//! and serves the codes by file name when the generator builds dropdown
//! validations. Closed codelists don't need the registry; their codes
//! are pinned in the schema `enum`.

use indexmap::IndexMap;
use rdls_core::{RdlsError, Result};
use std::path::Path;
use tracing::{debug, warn};

const CODE_COLUMN: &str = "Code";

/// Codes per codelist file, keyed by file name.
#[derive(Debug, Default)]
pub struct CodelistRegistry {
    lists: IndexMap<String, Vec<String>>,
}

impl CodelistRegistry {
    /// A registry with no codelists; open-codelist columns get no dropdown.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every `*.csv` file under `dir`.
    ///
    /// Files without a `Code` column or with malformed rows are skipped
    /// with a warning; generation continues without their dropdowns.
    ///
    /// # Errors
    ///
    /// Returns `RdlsError::IoError` if the directory cannot be read.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut files: Vec<_> = std::fs::read_dir(dir)
            .map_err(RdlsError::IoError)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("csv"))
            .collect();
        files.sort();

        let mut lists = IndexMap::new();
        for path in files {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match read_codes(&path) {
                Ok(Some(codes)) => {
                    debug!("Loaded codelist '{name}' with {} codes", codes.len());
                    lists.insert(name.to_string(), codes);
                }
                Ok(None) => {
                    warn!("Codelist '{name}' has no '{CODE_COLUMN}' column; skipping it");
                }
                Err(reason) => {
                    warn!("Codelist '{name}' could not be read ({reason}); skipping it");
                }
            }
        }

        Ok(Self { lists })
    }

    /// The codes for a codelist annotation value, matching the file name
    /// with or without its `.csv` suffix.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.lists
            .get(name)
            .or_else(|| self.lists.get(&format!("{name}.csv")))
            .map(Vec::as_slice)
    }

    /// Number of loaded codelists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether no codelists are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// Read the `Code` column of one CSV file. `Ok(None)` means the file has
/// no such column.
fn read_codes(path: &Path) -> std::result::Result<Option<Vec<String>>, String> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| e.to_string())?;
    let headers = reader.headers().map_err(|e| e.to_string())?;
    let Some(code_index) = headers.iter().position(|h| h == CODE_COLUMN) else {
        return Ok(None);
    };

    let mut codes = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        let code = record.get(code_index).unwrap_or("").trim();
        if !code.is_empty() {
            codes.push(code.to_string());
        }
    }
    Ok(Some(codes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file =
            std::fs::File::create(dir.join(name)).expect("test file should be creatable");
        file.write_all(content.as_bytes())
            .expect("test file should be writable");
    }

    #[test]
    fn test_loads_code_column() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        write_file(
            dir.path(),
            "risk_data_type.csv",
            "Code,Title,Description\nhazard,Hazard,Hazard data\nloss,Loss,Loss data\n",
        );

        let registry =
            CodelistRegistry::from_dir(dir.path()).expect("registry should load");
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("risk_data_type.csv"),
            Some(["hazard".to_string(), "loss".to_string()].as_slice())
        );
        // Annotation values without the extension also resolve.
        assert!(registry.get("risk_data_type").is_some());
        assert!(registry.get("missing.csv").is_none());
    }

    #[test]
    fn test_skips_files_without_code_column() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        write_file(dir.path(), "notes.csv", "Name,Value\na,1\n");
        write_file(dir.path(), "good.csv", "Code\nx\ny\n");

        let registry =
            CodelistRegistry::from_dir(dir.path()).expect("registry should load");
        assert_eq!(registry.len(), 1);
        assert!(registry.get("good.csv").is_some());
    }

    #[test]
    fn test_ignores_non_csv_files_and_blank_codes() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        write_file(dir.path(), "readme.txt", "not a codelist");
        write_file(dir.path(), "codes.csv", "Code\nalpha\n\n  \nbeta\n");

        let registry =
            CodelistRegistry::from_dir(dir.path()).expect("registry should load");
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("codes.csv"),
            Some(["alpha".to_string(), "beta".to_string()].as_slice())
        );
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let result = CodelistRegistry::from_dir(Path::new("/nonexistent/codelists"));
        assert!(matches!(result, Err(RdlsError::IoError(_))));
    }
}
