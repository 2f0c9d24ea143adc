//! Template workbook generation
//!
//! Turns assembled [`TemplateSheet`](rdls_core::template::TemplateSheet)s
//! into a finished XLSX workbook on disk. Writing is all-or-nothing: the
//! workbook is built in memory and only touches the output path once it
//! has been produced completely.

use rdls_core::error::RdlsError;
use thiserror::Error;

pub mod excel;

pub use excel::TemplateGenerator;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while writing a template workbook
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Workbook generation error
    #[error("Template generation failed: {0}")]
    Generation(String),

    /// Error reported by the XLSX writer
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<GeneratorError> for RdlsError {
    fn from(err: GeneratorError) -> Self {
        RdlsError::other(err.to_string())
    }
}
