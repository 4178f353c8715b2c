//! Path Resolution Error Types
//!
//! Failure reasons reported by the strict resolution operation. The total
//! operations collapse every one of these into the caller's default.

/// Result type for strict path resolution
pub type PathResult<T> = Result<T, PathError>;

/// Coarse classification of a [`PathError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The root could not be traversed at all
    Root,
    /// The path itself was unusable
    Path,
    /// A segment lookup failed part way through the walk
    Lookup,
}

/// Reason a path could not be resolved against a root value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("root value is absent or null")]
    AbsentRoot,

    #[error("path must be a string, found {found}")]
    InvalidPath { found: &'static str },

    #[error("empty path does not name a property")]
    EmptyPath,

    #[error("segment '{segment}' not found at depth {depth}")]
    Missing { segment: String, depth: usize },

    #[error("cannot look up segment '{segment}' at depth {depth} on a {kind} value")]
    NotTraversable {
        segment: String,
        depth: usize,
        kind: &'static str,
    },
}
