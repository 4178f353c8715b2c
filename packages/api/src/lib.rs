//! deepget Public API
//!
//! Safe dot-path access into nested JSON values. Every lookup returns either
//! the value stored at the path or the caller's default; nothing panics and
//! nothing errors unless the strict variants are asked for.
//!
//! ```
//! use deepget::DeepGet;
//! use serde_json::json;
//!
//! let root = json!({"some": {"deeply": {"nested": {"prop": "found it"}}}});
//!
//! assert_eq!(DeepGet::path("some.deeply.nested.prop").get(&root), Some(json!("found it")));
//! assert_eq!(DeepGet::path("some.deeply.nested.missing").get(&root), None);
//! assert_eq!(
//!     deepget::deep_get(None, Some(&json!("x.y")), Some(json!("fallback"))),
//!     Some(json!("fallback"))
//! );
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod error;
pub mod ext;

pub use builder::PathQuery;
pub use error::{QueryError, QueryResult};
pub use ext::ValueExt;

// Re-export important types from the core package
pub use deepget_core::{
    AccessorConfig, PathAccessor, PathError, PathResult, Resolved, deep_get, resolve, resolve_or,
};
pub use deepget_core::config::{ConfigurationError, Validator};
pub use deepget_core::error::ErrorKind;

/// Main entry point providing static query builders
pub struct DeepGet;

impl DeepGet {
    /// Start a query for a dot-delimited path
    ///
    /// Shorthand for `PathQuery::new(path)`
    pub fn path(path: impl Into<String>) -> PathQuery {
        PathQuery::new(path)
    }

    /// Start a query with an explicit default
    ///
    /// Shorthand for `PathQuery::new(path).or(default)`
    pub fn path_or(path: impl Into<String>, default: impl Into<serde_json::Value>) -> PathQuery {
        PathQuery::new(path).or(default)
    }
}

/// Start a query for a dot-delimited path
///
/// Shorthand for `DeepGet::path(path)`
pub fn path(path: impl Into<String>) -> PathQuery {
    PathQuery::new(path)
}

pub mod prelude {
    //! Commonly used types and traits

    pub use crate::{DeepGet, PathQuery, QueryError, ValueExt};
    pub use deepget_core::prelude::*;
}
