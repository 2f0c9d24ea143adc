//! # RDLS Core
//!
//! Core types for generating Risk Data Library Standard spreadsheet
//! templates from the RDLS JSON Schema.
//!
//! This crate provides the building blocks shared by the template
//! pipeline: schema node types, field paths, flattened column metadata,
//! and error handling.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for RDLS template operations
pub mod error;

/// Field paths in the flattening tool's syntax
pub mod path;

/// JSON Schema node types
pub mod schema;

/// Flattened column and worksheet types
pub mod template;

// Re-export commonly used types
pub use error::{RdlsError, Result};
pub use path::{FieldPath, PathSegment};
pub use schema::{SchemaNode, TypeField};
pub use template::{FieldValues, FlattenedField, TemplateSheet};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{RdlsError, Result};
    pub use crate::path::{FieldPath, PathSegment};
    pub use crate::schema::{SchemaNode, TypeField};
    pub use crate::template::{FieldValues, FlattenedField, TemplateSheet};
}
