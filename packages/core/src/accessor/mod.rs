//! Default-returning path access
//!
//! [`PathAccessor`] walks separator-delimited paths through objects and
//! arrays. The free functions here use the default `.`-separated accessor.

use std::borrow::Cow;

use serde_json::Value as JsonValue;

mod core;

pub use self::core::PathAccessor;

/// Resolve a dot path from `root`, or `None` when any segment is absent
///
/// # Examples
/// ```
/// use deepget_core::accessor::resolve;
/// use serde_json::json;
///
/// let root = json!({"some": {"deeply": {"nested": {"prop": "found it"}}}});
/// assert_eq!(
///     resolve(&root, "some.deeply.nested.prop").map(|v| v.into_owned()),
///     Some(json!("found it"))
/// );
/// assert_eq!(resolve(&root, "some.deeply.nested.missing"), None);
/// ```
#[must_use]
pub fn resolve<'a>(root: &'a JsonValue, path: &str) -> Option<Cow<'a, JsonValue>> {
    PathAccessor::default().resolve(root, path)
}

/// Resolve a dot path from `root`, returning `default` when any segment is absent
#[must_use]
pub fn resolve_or(root: &JsonValue, path: &str, default: JsonValue) -> JsonValue {
    PathAccessor::default().resolve_or(root, path, default)
}

/// Resolve a dot path with fully dynamic inputs
///
/// # Examples
/// ```
/// use deepget_core::accessor::deep_get;
/// use serde_json::json;
///
/// let root = json!({"a": {"b": 1}});
/// assert_eq!(deep_get(Some(&root), Some(&json!("a.b")), None), Some(json!(1)));
/// assert_eq!(deep_get(Some(&root), Some(&json!(23)), Some(json!("fallback"))), Some(json!("fallback")));
/// assert_eq!(deep_get(None, Some(&json!("a.b")), None), None);
/// ```
#[must_use]
pub fn deep_get(
    root: Option<&JsonValue>,
    path: Option<&JsonValue>,
    default: Option<JsonValue>,
) -> Option<JsonValue> {
    PathAccessor::default().deep_get(root, path, default)
}
