//! JSON parser for RDLS schemas

use rdls_core::{
    error::{RdlsError, Result},
    schema::SchemaNode,
};
use std::fs;
use std::path::Path;

use super::SchemaParser;

/// JSON parser implementation
#[derive(Default)]
pub struct JsonParser;

impl JsonParser {
    /// Create a new JSON parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<SchemaNode> {
        serde_json::from_str(content)
            .map_err(|e| RdlsError::parse(format!("JSON parsing error: {e}")))
    }

    fn parse_file(&self, path: &Path) -> Result<SchemaNode> {
        let content = fs::read_to_string(path).map_err(RdlsError::IoError)?;

        self.parse_str(&content).map_err(|e| match e {
            RdlsError::ParseError { message, location } => RdlsError::ParseError {
                message: format!("{message} in file {}", path.display()),
                location,
            },
            other => other,
        })
    }
}
