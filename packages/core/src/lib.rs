//! # deepget core
//!
//! Safe lookup of a value at a dot-delimited path inside a nested
//! [`serde_json::Value`], falling back to a caller-supplied default when any
//! segment of the path is absent.
//!
//! ## Features
//!
//! - **Total lookups** that never panic and never error: every failure returns the default
//! - **Strict lookups** reporting which segment failed and why
//! - **Null vs missing**: a stored `null`, `0`, `false` or `""` is a result, not an absence
//! - **Arrays** answer `length` and canonical decimal indices like any other key
//! - **Configurable separator** with validation
//!
//! ## Usage
//!
//! ```
//! use deepget_core::prelude::*;
//! use serde_json::json;
//!
//! let root = json!({"some": {"deeply": {"nested": {"prop": ["an", "array"]}}}});
//!
//! assert_eq!(resolve_or(&root, "some.deeply.nested.prop.length", json!(0)), json!(2));
//! assert_eq!(resolve_or(&json!({}), "a.b", json!("fallback")), json!("fallback"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod accessor;
pub mod config;
pub mod error;
pub mod null_semantics;
pub mod path;
pub mod prelude;

pub use accessor::{PathAccessor, deep_get, resolve, resolve_or};
pub use config::AccessorConfig;
pub use error::{PathError, PathResult};
pub use null_semantics::Resolved;
