//! Internal `$ref` resolution with cycle detection
//!
//! The RDLS schema keeps shared structures under `$defs` and points at
//! them with `#/$defs/<Name>` references. The resolver follows those
//! chains against the root document, merges annotation keywords written
//! alongside the `$ref` over the target, and refuses cyclic chains.
//! The caller threads a visited stack through the schema walk so that a
//! definition which indirectly references itself is caught no matter how
//! many nodes sit in between.

use rdls_core::{
    error::{RdlsError, Result},
    schema::SchemaNode,
};

const DEFS_PREFIX: &str = "#/$defs/";
const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Resolves internal references against a root schema document.
pub struct RefResolver<'a> {
    root: &'a SchemaNode,
}

impl<'a> RefResolver<'a> {
    /// Create a resolver for the given root document.
    #[must_use]
    pub const fn new(root: &'a SchemaNode) -> Self {
        Self { root }
    }

    /// Resolve a node's `$ref` chain into a concrete node.
    ///
    /// Annotation keywords on a referring node (`title`, `description`,
    /// `codelist`, `openCodelist`, `input_guidance`) override the
    /// target's. Returns the resolved node together with the number of
    /// frames pushed onto `stack`; the caller pops them with
    /// [`RefResolver::release`] once the node's subtree has been walked,
    /// so that a definition may be reused in sibling branches while a
    /// cycle along one descent path stays fatal.
    ///
    /// # Errors
    ///
    /// Returns an `RdlsError` if:
    /// - A reference uses an unsupported form (external or deep pointer)
    /// - A referenced definition does not exist
    /// - The chain revisits a definition already on `stack`
    pub fn resolve(&self, node: &SchemaNode, stack: &mut Vec<String>) -> Result<(SchemaNode, usize)> {
        let mut resolved = node.clone();
        let mut pushed = 0;

        while let Some(reference) = resolved.reference.take() {
            if stack.iter().any(|visited| *visited == reference) {
                let chain = stack.join(" -> ");
                return Err(RdlsError::reference(
                    &reference,
                    format!("circular reference chain: {chain} -> {reference}"),
                ));
            }

            let target = self.lookup(&reference)?;
            resolved = merge_annotations(target.clone(), &resolved);
            stack.push(reference);
            pushed += 1;
        }

        Ok((resolved, pushed))
    }

    /// Pop `frames` entries pushed by a matching [`RefResolver::resolve`] call.
    pub fn release(stack: &mut Vec<String>, frames: usize) {
        stack.truncate(stack.len().saturating_sub(frames));
    }

    fn lookup(&self, reference: &str) -> Result<&SchemaNode> {
        let name = reference
            .strip_prefix(DEFS_PREFIX)
            .or_else(|| reference.strip_prefix(DEFINITIONS_PREFIX))
            .ok_or_else(|| {
                RdlsError::reference(
                    reference,
                    "unsupported reference form (only #/$defs/<name> and \
                     #/definitions/<name> are handled)",
                )
            })?;

        if name.is_empty() || name.contains('/') {
            return Err(RdlsError::reference(
                reference,
                "unsupported reference form (deep pointers are not handled)",
            ));
        }

        self.root
            .definition(name)
            .ok_or_else(|| RdlsError::reference(reference, "not defined in $defs"))
    }
}

/// Overlay the referrer's annotation keywords on the resolved target.
fn merge_annotations(target: SchemaNode, referrer: &SchemaNode) -> SchemaNode {
    let mut merged = target;
    if referrer.title.is_some() {
        merged.title.clone_from(&referrer.title);
    }
    if referrer.description.is_some() {
        merged.description.clone_from(&referrer.description);
    }
    if referrer.codelist.is_some() {
        merged.codelist.clone_from(&referrer.codelist);
    }
    if referrer.open_codelist.is_some() {
        merged.open_codelist = referrer.open_codelist;
    }
    if referrer.input_guidance.is_some() {
        merged.input_guidance.clone_from(&referrer.input_guidance);
    }
    merged
}
