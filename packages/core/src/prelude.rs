//! Commonly used types and functions

pub use crate::accessor::{PathAccessor, deep_get, resolve, resolve_or};
pub use crate::config::{AccessorConfig, ConfigurationError, Validator};
pub use crate::error::{ErrorKind, PathError, PathResult};
pub use crate::null_semantics::Resolved;
