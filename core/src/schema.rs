//! JSON Schema node types for RDLS schemas.
//!
//! [`SchemaNode`] models the subset of JSON Schema the template generator
//! walks (`type`, `properties`, `items`, `required`, `enum`, `format`,
//! `$ref`, `$defs`) plus the RDLS extension keywords (`codelist`,
//! `openCodelist`, `input_guidance`). Unknown keywords are ignored on
//! load. Property and definition order is preserved so that template
//! columns come out in declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The JSON Schema `type` keyword: absent, a single name, or a list of
/// names (the RDLS nullable pattern, e.g. `["string", "null"]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeField {
    /// No `type` keyword declared.
    #[default]
    Unspecified,
    /// A single type name.
    Single(String),
    /// A list of type names.
    Multiple(Vec<String>),
}

impl TypeField {
    /// The declared type, taking the first non-`null` entry of a list.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Unspecified => None,
            Self::Single(name) => Some(name.as_str()),
            Self::Multiple(names) => names
                .iter()
                .map(String::as_str)
                .find(|name| *name != "null"),
        }
    }

    /// Whether no `type` keyword was declared.
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}

/// One node of a JSON Schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaNode {
    /// Declared type(s) of the node
    #[serde(rename = "type", skip_serializing_if = "TypeField::is_unspecified")]
    pub type_field: TypeField,

    /// Human-readable field title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Human-readable field description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Object properties in declaration order
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaNode>,

    /// Array item schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    /// Names of required properties of this object
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Enumerated permitted values
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    /// String format name (`date`, `iri`, `email`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Internal reference to a shared definition
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Shared definitions (draft 2019-09 and later)
    #[serde(rename = "$defs", skip_serializing_if = "IndexMap::is_empty")]
    pub defs: IndexMap<String, SchemaNode>,

    /// Shared definitions (legacy keyword)
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, SchemaNode>,

    /// Schema identifier URI
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Codelist file the values of this field are drawn from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codelist: Option<String>,

    /// Whether values outside the codelist are permitted
    #[serde(rename = "openCodelist", skip_serializing_if = "Option::is_none")]
    pub open_codelist: Option<bool>,

    /// Guidance shown to publishers filling in this field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_guidance: Option<String>,
}

impl SchemaNode {
    /// Whether the node declares object properties.
    #[must_use]
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Whether the declared type is `array`.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.type_field.primary() == Some("array")
    }

    /// Look up a shared definition by name, checking `$defs` before the
    /// legacy `definitions` keyword.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&SchemaNode> {
        self.defs.get(name).or_else(|| self.definitions.get(name))
    }
}
