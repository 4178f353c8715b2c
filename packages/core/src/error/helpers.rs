//! Constructors and classification helpers for [`PathError`]

use serde_json::Value as JsonValue;

use super::types::{ErrorKind, PathError};
use crate::null_semantics::value_kind;

impl PathError {
    /// Creates a lookup failure for a key or index that is not present
    pub fn missing(segment: impl Into<String>, depth: usize) -> Self {
        PathError::Missing {
            segment: segment.into(),
            depth,
        }
    }

    /// Creates a lookup failure for a value that cannot hold properties
    pub fn not_traversable(segment: impl Into<String>, depth: usize, value: &JsonValue) -> Self {
        PathError::NotTraversable {
            segment: segment.into(),
            depth,
            kind: value_kind(value),
        }
    }

    /// Creates an invalid path error naming the kind of value received
    #[must_use]
    pub fn invalid_path(found: Option<&JsonValue>) -> Self {
        PathError::InvalidPath {
            found: found.map_or("nothing", value_kind),
        }
    }

    /// Coarse classification of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::AbsentRoot => ErrorKind::Root,
            PathError::InvalidPath { .. } | PathError::EmptyPath => ErrorKind::Path,
            PathError::Missing { .. } | PathError::NotTraversable { .. } => ErrorKind::Lookup,
        }
    }

    /// Zero-based index of the segment that failed, for lookup failures
    #[must_use]
    pub fn depth(&self) -> Option<usize> {
        match self {
            PathError::Missing { depth, .. } | PathError::NotTraversable { depth, .. } => {
                Some(*depth)
            }
            _ => None,
        }
    }

    /// True when the walk started but a segment could not be resolved
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        self.kind() == ErrorKind::Lookup
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_every_variant() {
        assert_eq!(PathError::AbsentRoot.kind(), ErrorKind::Root);
        assert_eq!(PathError::EmptyPath.kind(), ErrorKind::Path);
        assert_eq!(PathError::invalid_path(None).kind(), ErrorKind::Path);
        assert_eq!(PathError::missing("a", 0).kind(), ErrorKind::Lookup);
        assert_eq!(
            PathError::not_traversable("a", 1, &json!(true)).kind(),
            ErrorKind::Lookup
        );
    }

    #[test]
    fn invalid_path_names_the_received_kind() {
        assert_eq!(
            PathError::invalid_path(Some(&json!(23))),
            PathError::InvalidPath { found: "number" }
        );
        assert_eq!(
            PathError::invalid_path(Some(&json!([23, 42]))),
            PathError::InvalidPath { found: "array" }
        );
        assert_eq!(
            PathError::invalid_path(None),
            PathError::InvalidPath { found: "nothing" }
        );
    }

    #[test]
    fn depth_only_reported_for_lookup_failures() {
        assert_eq!(PathError::missing("prop", 3).depth(), Some(3));
        assert_eq!(PathError::AbsentRoot.depth(), None);
        assert!(!PathError::EmptyPath.is_lookup_failure());
    }

    #[test]
    fn display_includes_segment_and_kind() {
        let error = PathError::not_traversable("length", 2, &json!("text"));
        assert_eq!(
            error.to_string(),
            "cannot look up segment 'length' at depth 2 on a string value"
        );
    }
}
