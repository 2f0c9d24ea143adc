//! Schema loading for the template generator
//!
//! This module reads the RDLS JSON Schema from disk, resolves internal
//! `$ref` references, and applies the optional component filter before
//! the schema is handed to the flattener.

use rdls_core::{
    error::{RdlsError, Result},
    schema::SchemaNode,
};
use std::path::Path;

pub mod json_parser;
pub mod ref_resolver;

pub use json_parser::JsonParser;
pub use ref_resolver::RefResolver;

/// Trait for schema parsers
pub trait SchemaParser: Send + Sync {
    /// Parse a schema from string content
    ///
    /// # Errors
    ///
    /// Returns an `RdlsError` if parsing fails
    fn parse_str(&self, content: &str) -> Result<SchemaNode>;

    /// Parse a schema from a file
    ///
    /// # Errors
    ///
    /// Returns an `RdlsError` if:
    /// - File cannot be read
    /// - Parsing fails
    fn parse_file(&self, path: &Path) -> Result<SchemaNode>;
}

/// Load a schema file, checking the extension before parsing.
///
/// # Errors
///
/// Returns an `RdlsError` if:
/// - The file has no extension or is not a `.json` file
/// - The file cannot be read
/// - The content is not valid JSON
pub fn load_schema(path: &Path) -> Result<SchemaNode> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| RdlsError::parse("No file extension found"))?;

    match extension {
        "json" => JsonParser::new().parse_file(path),
        _ => Err(RdlsError::parse(format!(
            "Unsupported file format: {extension} (expected a .json schema)"
        ))),
    }
}

/// Reduce the schema to one component, removing the other component
/// properties from the root. Shared root fields are kept.
///
/// # Errors
///
/// Returns an `RdlsError` if:
/// - `component` is not one of the configured component names
/// - The schema root does not declare the selected component
pub fn select_component(
    schema: &mut SchemaNode,
    component: &str,
    components: &[String],
) -> Result<()> {
    if !components.iter().any(|name| name == component) {
        return Err(RdlsError::config(format!(
            "Unknown component '{component}' (expected one of: {})",
            components.join(", ")
        )));
    }

    if !schema.properties.contains_key(component) {
        return Err(RdlsError::schema_validation_at(
            format!("Component '{component}' is not defined in the schema root"),
            component,
        ));
    }

    schema
        .properties
        .retain(|name, _| name == component || !components.iter().any(|c| c == name));
    schema
        .required
        .retain(|name| schema.properties.contains_key(name));

    Ok(())
}
