//! Path flattening: schema tree to ordered template columns
//!
//! The flattener walks the resolved schema depth-first in property
//! declaration order and emits one entry per leaf scalar field and one
//! per scalar-semantics array. Arrays of objects contribute no column of
//! their own; they open a new worksheet group and the walk descends into
//! their item schema with the path extended by the index placeholder.
//!
//! The walk is an explicit recursion over the immutable tree with a
//! configured depth bound, so malformed or absurdly deep schemas fail
//! with a diagnostic instead of exhausting the call stack. Output order
//! is fully determined by the schema, making repeated runs identical.

use crate::config::TemplateConfig;
use crate::parser::RefResolver;
use rdls_core::{
    error::{RdlsError, Result},
    path::FieldPath,
    schema::SchemaNode,
};
use tracing::warn;

pub mod fields;
pub mod sheets;

pub use sheets::WorksheetAssembler;

/// One prospective template column produced by the walk.
#[derive(Debug, Clone)]
pub struct FlattenedEntry {
    /// Full path from the schema root
    pub path: FieldPath,
    /// Path of the nearest enclosing array; `None` at root level
    pub sheet_key: Option<FieldPath>,
    /// Whether the immediate parent object requires this field
    pub required: bool,
    /// The resolved node; scalar arrays carry their resolved item schema
    pub node: SchemaNode,
}

/// Walks a schema into the ordered list of template columns.
pub struct PathFlattener<'a> {
    config: &'a TemplateConfig,
}

impl<'a> PathFlattener<'a> {
    /// Create a flattener with the given configuration.
    #[must_use]
    pub const fn new(config: &'a TemplateConfig) -> Self {
        Self { config }
    }

    /// Flatten the schema rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an `RdlsError` if:
    /// - The root is not an object with properties
    /// - A `$ref` is unresolvable, unsupported, or cyclic
    /// - Nesting exceeds the configured `max_depth`
    pub fn flatten(&self, root: &SchemaNode) -> Result<Vec<FlattenedEntry>> {
        let resolver = RefResolver::new(root);
        let mut stack = Vec::new();

        let (resolved_root, frames) = resolver.resolve(root, &mut stack)?;
        if !resolved_root.has_properties() {
            return Err(RdlsError::schema_validation(
                "Schema root must be an object with properties",
            ));
        }

        let mut entries = Vec::new();
        self.walk_object(
            &resolver,
            &resolved_root,
            &FieldPath::root(),
            None,
            &mut stack,
            &mut entries,
        )?;
        RefResolver::release(&mut stack, frames);
        Ok(entries)
    }

    fn walk_object(
        &self,
        resolver: &RefResolver<'_>,
        object: &SchemaNode,
        path: &FieldPath,
        sheet_key: Option<&FieldPath>,
        stack: &mut Vec<String>,
        entries: &mut Vec<FlattenedEntry>,
    ) -> Result<()> {
        for name in &object.required {
            if !object.properties.contains_key(name) {
                if path.is_root() {
                    warn!("Required property '{name}' is not defined at the schema root");
                } else {
                    warn!("Required property '{name}' under '{path}' is not defined");
                }
            }
        }

        for (name, child) in &object.properties {
            let child_path = path.child(name);
            self.check_depth(&child_path)?;

            let required = object.required.iter().any(|r| r == name);
            let (resolved, frames) = resolver.resolve(child, stack)?;
            self.walk_node(
                resolver, &resolved, child_path, sheet_key, required, stack, entries,
            )?;
            RefResolver::release(stack, frames);
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn walk_node(
        &self,
        resolver: &RefResolver<'_>,
        node: &SchemaNode,
        path: FieldPath,
        sheet_key: Option<&FieldPath>,
        required: bool,
        stack: &mut Vec<String>,
        entries: &mut Vec<FlattenedEntry>,
    ) -> Result<()> {
        if node.is_array() {
            if let Some(items) = node.items.as_deref() {
                let (resolved_items, frames) = resolver.resolve(items, stack)?;
                if resolved_items.has_properties() {
                    // An array of objects opens a worksheet group of its own.
                    let item_path = path.item();
                    self.check_depth(&item_path)?;
                    self.walk_object(
                        resolver,
                        &resolved_items,
                        &item_path,
                        Some(&path),
                        stack,
                        entries,
                    )?;
                    RefResolver::release(stack, frames);
                    return Ok(());
                }

                // Scalar-semantics array: a single column, constraints on items.
                let mut leaf = node.clone();
                leaf.items = Some(Box::new(resolved_items));
                RefResolver::release(stack, frames);
                entries.push(FlattenedEntry {
                    path,
                    sheet_key: sheet_key.cloned(),
                    required,
                    node: leaf,
                });
                return Ok(());
            }

            entries.push(FlattenedEntry {
                path,
                sheet_key: sheet_key.cloned(),
                required,
                node: node.clone(),
            });
            return Ok(());
        }

        if node.has_properties() {
            return self.walk_object(resolver, node, &path, sheet_key, stack, entries);
        }

        entries.push(FlattenedEntry {
            path,
            sheet_key: sheet_key.cloned(),
            required,
            node: node.clone(),
        });
        Ok(())
    }

    fn check_depth(&self, path: &FieldPath) -> Result<()> {
        if path.depth() > self.config.max_depth {
            return Err(RdlsError::schema_validation_at(
                format!(
                    "Nesting exceeds the configured maximum depth of {}",
                    self.config.max_depth
                ),
                path.to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn schema(json: &str) -> SchemaNode {
        serde_json::from_str(json).expect("schema should deserialize")
    }

    fn sample() -> SchemaNode {
        schema(
            r#"{
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": {"type": "string", "title": "Identifier"},
                    "title": {"type": "string", "title": "Title"},
                    "tags": {
                        "type": "array",
                        "items": {"type": "string"}
                    },
                    "resources": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "required": ["id"],
                            "properties": {
                                "id": {"type": "string"},
                                "url": {"type": "string", "format": "iri"},
                                "costs": {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "properties": {
                                            "value": {"type": "number"}
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "spatial": {
                        "type": "object",
                        "properties": {
                            "countries": {"type": "array", "items": {"type": "string"}}
                        }
                    }
                }
            }"#,
        )
    }

    fn flatten(node: &SchemaNode) -> Vec<FlattenedEntry> {
        let config = TemplateConfig::default();
        PathFlattener::new(&config)
            .flatten(node)
            .expect("schema should flatten")
    }

    fn paths(entries: &[FlattenedEntry]) -> Vec<String> {
        entries.iter().map(|e| e.path.to_string()).collect()
    }

    #[test]
    fn test_flatten_orders_and_paths() {
        let entries = flatten(&sample());
        assert_eq!(
            paths(&entries),
            vec![
                "id",
                "title",
                "tags",
                "resources/0/id",
                "resources/0/url",
                "resources/0/costs/0/value",
                "spatial/countries",
            ]
        );
    }

    #[test]
    fn test_flatten_paths_are_unique() {
        let entries = flatten(&sample());
        let unique: HashSet<String> = paths(&entries).into_iter().collect();
        assert_eq!(unique.len(), entries.len());
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let node = sample();
        assert_eq!(paths(&flatten(&node)), paths(&flatten(&node)));
    }

    #[test]
    fn test_sheet_keys_point_at_nearest_array() {
        let entries = flatten(&sample());
        let key_of = |path: &str| -> Option<String> {
            entries
                .iter()
                .find(|e| e.path.to_string() == path)
                .and_then(|e| e.sheet_key.as_ref().map(ToString::to_string))
        };

        assert_eq!(key_of("id"), None);
        assert_eq!(key_of("tags"), None);
        assert_eq!(key_of("spatial/countries"), None);
        assert_eq!(key_of("resources/0/id"), Some("resources".to_string()));
        assert_eq!(
            key_of("resources/0/costs/0/value"),
            Some("resources/0/costs".to_string())
        );
    }

    #[test]
    fn test_required_comes_from_immediate_parent() {
        let entries = flatten(&sample());
        let required_of = |path: &str| -> bool {
            entries
                .iter()
                .find(|e| e.path.to_string() == path)
                .map(|e| e.required)
                .unwrap_or_default()
        };

        assert!(required_of("id"));
        assert!(!required_of("title"));
        assert!(required_of("resources/0/id"));
        assert!(!required_of("resources/0/url"));
    }

    #[test]
    fn test_scalar_array_keeps_resolved_items() {
        let node = schema(
            r##"{
                "type": "object",
                "properties": {
                    "risk_data_type": {
                        "type": "array",
                        "items": {"$ref": "#/$defs/RiskDataType"}
                    }
                },
                "$defs": {
                    "RiskDataType": {
                        "type": "string",
                        "enum": ["hazard", "exposure", "vulnerability", "loss"]
                    }
                }
            }"##,
        );

        let entries = flatten(&node);
        assert_eq!(entries.len(), 1);
        let items = entries[0]
            .node
            .items
            .as_deref()
            .expect("scalar array should keep items");
        assert_eq!(items.enum_values.len(), 4);
    }

    #[test]
    fn test_cyclic_reference_is_fatal() {
        let node = schema(
            r##"{
                "type": "object",
                "properties": {
                    "tree": {"$ref": "#/$defs/Node"}
                },
                "$defs": {
                    "Node": {
                        "type": "object",
                        "properties": {
                            "name": {"type": "string"},
                            "child": {"$ref": "#/$defs/Node"}
                        }
                    }
                }
            }"##,
        );

        let config = TemplateConfig::default();
        let err = PathFlattener::new(&config)
            .flatten(&node)
            .expect_err("cycle should be fatal");
        assert!(matches!(err, RdlsError::RefError { .. }));
    }

    #[test]
    fn test_shared_definition_in_sibling_branches_is_legal() {
        let node = schema(
            r##"{
                "type": "object",
                "properties": {
                    "start": {"$ref": "#/$defs/Point"},
                    "end": {"$ref": "#/$defs/Point"}
                },
                "$defs": {
                    "Point": {
                        "type": "object",
                        "properties": {
                            "lat": {"type": "number"},
                            "lon": {"type": "number"}
                        }
                    }
                }
            }"##,
        );

        let entries = flatten(&node);
        assert_eq!(
            paths(&entries),
            vec!["start/lat", "start/lon", "end/lat", "end/lon"]
        );
    }

    #[test]
    fn test_depth_bound_is_fatal() {
        let node = schema(
            r#"{
                "type": "object",
                "properties": {
                    "a": {
                        "type": "object",
                        "properties": {
                            "b": {
                                "type": "object",
                                "properties": {
                                    "c": {"type": "string"}
                                }
                            }
                        }
                    }
                }
            }"#,
        );

        let config = TemplateConfig {
            max_depth: 2,
            ..TemplateConfig::default()
        };
        let err = PathFlattener::new(&config)
            .flatten(&node)
            .expect_err("depth bound should be fatal");
        assert!(matches!(err, RdlsError::SchemaValidationError { .. }));
        assert!(err.to_string().contains("maximum depth"));
    }

    #[test]
    fn test_root_must_be_an_object() {
        let node = schema(r#"{"type": "string"}"#);
        let config = TemplateConfig::default();
        let err = PathFlattener::new(&config)
            .flatten(&node)
            .expect_err("scalar root should be rejected");
        assert!(err.to_string().contains("object with properties"));
    }

    #[test]
    fn test_object_without_properties_is_a_leaf() {
        let node = schema(
            r#"{
                "type": "object",
                "properties": {
                    "extra": {"type": "object"}
                }
            }"#,
        );

        let entries = flatten(&node);
        assert_eq!(paths(&entries), vec!["extra"]);
        assert_eq!(entries[0].node.type_field.primary(), Some("object"));
    }
}
