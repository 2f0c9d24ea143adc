//! Excel writer for template workbooks.
//!
//! Layout follows the published templates: one visible documentation
//! sheet, one data sheet per worksheet group with an eight-row header
//! block and a blank data-entry area, a hidden sheet of validation
//! source columns, and a hidden configuration sheet for the downstream
//! unflattening tool. Split into focused submodules so each file stays
//! small.

mod cast;
mod formats;
mod generator;
mod sheets;
mod validation;
mod workbook;

pub use generator::TemplateGenerator;
