//! Path lookup methods on `serde_json::Value`

use std::borrow::Cow;

use deepget_core::{PathAccessor, PathResult};
use serde_json::Value;

/// Dot-path lookups directly on a JSON value
///
/// # Examples
/// ```
/// use deepget::ValueExt;
/// use serde_json::json;
///
/// let root = json!({"some": {"deeply": {"nested": {"prop": ["an", "array"]}}}});
/// assert_eq!(root.deep_get_or("some.deeply.nested.prop.length", json!(0)), json!(2));
/// assert!(!root.has_path("some.deeply.missing"));
/// ```
pub trait ValueExt {
    /// Resolve a dot path, or `None` when any segment is absent
    fn deep_get(&self, path: &str) -> Option<Cow<'_, Value>>;

    /// Resolve a dot path, returning `default` when any segment is absent
    fn deep_get_or(&self, path: &str, default: Value) -> Value;

    /// Resolve a dot path, reporting why resolution failed
    ///
    /// # Errors
    ///
    /// Returns the `PathError` for the first segment that could not be resolved.
    fn try_deep_get(&self, path: &str) -> PathResult<Cow<'_, Value>>;

    /// True if the dot path resolves, including to a stored `null`
    fn has_path(&self, path: &str) -> bool {
        self.try_deep_get(path).is_ok()
    }
}

impl ValueExt for Value {
    fn deep_get(&self, path: &str) -> Option<Cow<'_, Value>> {
        PathAccessor::default().resolve(self, path)
    }

    fn deep_get_or(&self, path: &str, default: Value) -> Value {
        PathAccessor::default().resolve_or(self, path, default)
    }

    fn try_deep_get(&self, path: &str) -> PathResult<Cow<'_, Value>> {
        PathAccessor::default().try_resolve(self, path)
    }
}
