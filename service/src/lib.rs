//! # RDLS Template Service
//!
//! Spreadsheet template generation for the Risk Data Library Standard
//! (RDLS). The service reads the standard's JSON Schema, flattens its
//! nested structure into worksheet columns, and writes an XLSX workbook
//! whose sheets can be filled in and converted back into RDLS JSON by
//! the downstream flattening tool.
//!
//! ## Overview
//!
//! `rdls-template` covers the whole pipeline:
//!
//! - **Schema loading**: JSON Schema parsing with local `$ref`
//!   resolution and per-component filtering
//! - **Flattening**: deterministic traversal of the schema into field
//!   paths, one worksheet per array of objects
//! - **Metadata**: titles, descriptions, permitted values, codelists and
//!   input guidance carried into the template's header rows
//! - **Workbook writing**: formatted header blocks, typed data-entry
//!   areas, dropdown validations and the configuration sheets the
//!   downstream tool expects
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rdls_template::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let config = TemplateConfig::default();
//!     let schema = load_schema("rdls_schema.json".as_ref())?;
//!
//!     let sheets = build_template_sheets(&config, &schema)?;
//!
//!     let codelists = CodelistRegistry::empty();
//!     let generator = TemplateGenerator::new(&config, &codelists);
//!     generator.generate_file(&sheets, "templates/full.xlsx".as_ref(), false)?;
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Command-line interface
pub mod cli;
/// Codelist CSV registry backing open-codelist dropdowns
pub mod codelist;
/// Configuration loading and defaults
pub mod config;
/// Schema flattening into template columns and worksheets
pub mod flatten;
/// XLSX workbook generation
pub mod generator;
/// Schema parsing and reference resolution
pub mod parser;

pub use codelist::CodelistRegistry;
pub use config::{TemplateConfig, load_config};
pub use flatten::{FlattenedEntry, PathFlattener, WorksheetAssembler};
pub use generator::{GeneratorError, GeneratorResult, TemplateGenerator};
pub use parser::{JsonParser, SchemaParser, load_schema, select_component};

use rdls_core::error::Result;
use rdls_core::schema::SchemaNode;
use rdls_core::template::TemplateSheet;

/// Flatten a schema and assemble the worksheets of its template.
///
/// # Errors
///
/// Returns an `RdlsError` if the schema is not an object schema, a
/// reference cannot be resolved, nesting exceeds the configured depth,
/// or two arrays produce the same worksheet name.
pub fn build_template_sheets(
    config: &TemplateConfig,
    schema: &SchemaNode,
) -> Result<Vec<TemplateSheet>> {
    let entries = PathFlattener::new(config).flatten(schema)?;
    WorksheetAssembler::new(config).assemble(&entries)
}

/// Commonly used types and functions
pub mod prelude {
    pub use crate::build_template_sheets;
    pub use crate::codelist::CodelistRegistry;
    pub use crate::config::{TemplateConfig, load_config};
    pub use crate::generator::TemplateGenerator;
    pub use crate::parser::{load_schema, select_component};
    pub use rdls_core::prelude::*;
}
