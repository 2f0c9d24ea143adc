//! Field paths in the downstream flattening tool's syntax.
//!
//! A path addresses one schema field from the document root, with array
//! traversal recorded as the numeric index placeholder (`0`). The rendered
//! form (`hazard/event_sets/0/events/0/id`) is what template header rows
//! carry and what the unflattening tool parses back into JSON structure.

use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named property of an object.
    Field(String),
    /// The array index placeholder, rendered as `0`.
    Index,
}

/// Ordered path from the schema root to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The placeholder used for array positions in rendered paths.
    pub const INDEX_PLACEHOLDER: &'static str = "0";

    /// The empty path addressing the schema root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with a named property segment.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.to_string()));
        Self { segments }
    }

    /// Extend the path with an array index placeholder segment.
    #[must_use]
    pub fn item(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index);
        Self { segments }
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments, counting index placeholders.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The segments in root-to-leaf order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The named segments in order, skipping index placeholders.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            PathSegment::Field(name) => Some(name.as_str()),
            PathSegment::Index => None,
        })
    }

    /// The first named segment, if any.
    #[must_use]
    pub fn first_field(&self) -> Option<&str> {
        self.field_names().next()
    }

    /// The path truncated to its first `length` segments.
    #[must_use]
    pub fn prefix(&self, length: usize) -> Self {
        Self {
            segments: self.segments.iter().take(length).cloned().collect(),
        }
    }

    /// Whether `prefix` is a leading subsequence of this path.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            match segment {
                PathSegment::Field(name) => write!(f, "{name}")?,
                PathSegment::Index => write!(f, "{}", Self::INDEX_PLACEHOLDER)?,
            }
        }
        Ok(())
    }
}
