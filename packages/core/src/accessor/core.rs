//! Path walking over nested JSON values
//!
//! [`PathAccessor::try_resolve`] is the only place a path is walked. Every
//! other operation is built on it and turns its failure into a default.

use std::borrow::Cow;

use serde_json::Value as JsonValue;

use crate::config::{AccessorConfig, ConfigResult, Validator};
use crate::error::{PathError, PathResult};
use crate::null_semantics::{Resolved, SegmentAccess, access_segment};
use crate::path::{PathInput, split_segments};

/// Resolves separator-delimited paths inside JSON values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathAccessor {
    config: AccessorConfig,
}

impl PathAccessor {
    /// Create an accessor from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the configuration fails validation.
    pub fn new(config: AccessorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an accessor splitting paths on `separator`
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSeparator` for whitespace or
    /// control separators.
    pub fn with_separator(separator: char) -> ConfigResult<Self> {
        Self::new(AccessorConfig::default().with_separator(separator))
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }

    /// Walk `path` from `root`, reporting why resolution failed
    ///
    /// Stored values are borrowed from `root`; values derived during the walk,
    /// such as an array's `length`, are owned.
    ///
    /// # Errors
    ///
    /// - `AbsentRoot` if `root` is `null`
    /// - `EmptyPath` if `path` is the empty string
    /// - `Missing` if a key or index is not present
    /// - `NotTraversable` if a segment is looked up on a scalar or `null`
    pub fn try_resolve<'a>(&self, root: &'a JsonValue, path: &str) -> PathResult<Cow<'a, JsonValue>> {
        if root.is_null() {
            return Err(PathError::AbsentRoot);
        }
        let segments = split_segments(path, self.config.separator)?;
        let last = segments.len() - 1;

        let mut current = root;
        for (depth, segment) in segments.iter().copied().enumerate() {
            match access_segment(current, segment) {
                SegmentAccess::Found(value) if depth == last => return Ok(Cow::Borrowed(value)),
                SegmentAccess::Found(value) => current = value,
                SegmentAccess::Computed(value) if depth == last => return Ok(Cow::Owned(value)),
                SegmentAccess::Computed(value) => {
                    return Err(PathError::not_traversable(segments[depth + 1], depth + 1, &value));
                }
                SegmentAccess::Missing => return Err(PathError::missing(segment, depth)),
                SegmentAccess::NotTraversable => {
                    return Err(PathError::not_traversable(segment, depth, current));
                }
            }
        }

        Ok(Cow::Borrowed(current))
    }

    /// Walk `path` from `root`, keeping `null` distinct from missing
    #[must_use]
    pub fn lookup<'a>(&self, root: &'a JsonValue, path: &str) -> Resolved<'a> {
        Resolved::from_result(self.traced(self.try_resolve(root, path), path))
    }

    /// Resolve `path` from `root`, or `None` when any segment is absent
    ///
    /// A stored `0`, `false`, `""` or `null` at the end of the path is a
    /// result, not an absence.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a JsonValue, path: &str) -> Option<Cow<'a, JsonValue>> {
        self.traced(self.try_resolve(root, path), path).ok()
    }

    /// Resolve `path` from `root`, returning `default` when any segment is absent
    #[must_use]
    pub fn resolve_or(&self, root: &JsonValue, path: &str, default: JsonValue) -> JsonValue {
        self.resolve(root, path).map_or(default, Cow::into_owned)
    }

    /// Resolve with fully dynamic inputs
    ///
    /// `root` and `path` may be absent, and `path` may be any JSON value; only
    /// a string path is walked. Every failure returns `default`, which is
    /// `None` when the caller supplied none.
    #[must_use]
    pub fn deep_get(
        &self,
        root: Option<&JsonValue>,
        path: Option<&JsonValue>,
        default: Option<JsonValue>,
    ) -> Option<JsonValue> {
        let Some(root) = root else {
            tracing::trace!(reason = %PathError::AbsentRoot, "path lookup fell back to default");
            return default;
        };
        let path = match PathInput::classify(path) {
            Ok(path) => path,
            Err(error) => {
                tracing::trace!(reason = %error, "path lookup fell back to default");
                return default;
            }
        };
        self.lookup(root, path).or_default(default)
    }

    fn traced<T>(&self, result: PathResult<T>, path: &str) -> PathResult<T> {
        if let Err(error) = &result {
            tracing::trace!(path, reason = %error, "path lookup fell back to default");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::ConfigurationError;

    fn nested() -> JsonValue {
        json!({"some": {"deeply": {"nested": {"prop": "found it", "list": ["an", "array"]}}}})
    }

    #[test]
    fn reports_depth_of_missing_segment() {
        let accessor = PathAccessor::default();
        assert_eq!(
            accessor.try_resolve(&nested(), "some.deeply.nested.undefinedObj.prop"),
            Err(PathError::missing("undefinedObj", 3))
        );
    }

    #[test]
    fn reports_scalar_in_the_way() {
        let accessor = PathAccessor::default();
        assert_eq!(
            accessor.try_resolve(&nested(), "some.deeply.nested.prop.length"),
            Err(PathError::NotTraversable {
                segment: "length".to_string(),
                depth: 4,
                kind: "string",
            })
        );
    }

    #[test]
    fn computed_length_cannot_be_walked_further() {
        let accessor = PathAccessor::default();
        assert_eq!(
            accessor.try_resolve(&nested(), "some.deeply.nested.list.length.x"),
            Err(PathError::NotTraversable {
                segment: "x".to_string(),
                depth: 5,
                kind: "number",
            })
        );
    }

    #[test]
    fn stored_values_are_borrowed() {
        let root = nested();
        let accessor = PathAccessor::default();
        let resolved = accessor
            .try_resolve(&root, "some.deeply.nested.prop")
            .expect("prop resolves");
        assert!(matches!(resolved, Cow::Borrowed(_)));

        let length = accessor
            .try_resolve(&root, "some.deeply.nested.list.length")
            .expect("length resolves");
        assert!(matches!(length, Cow::Owned(_)));
        assert_eq!(length.into_owned(), json!(2));
    }

    #[test]
    fn null_root_is_absent() {
        assert_eq!(
            PathAccessor::default().try_resolve(&JsonValue::Null, "x.y"),
            Err(PathError::AbsentRoot)
        );
    }

    #[test]
    fn custom_separator() {
        let accessor = PathAccessor::with_separator('/').expect("slash is a valid separator");
        let root = json!({"a.b": {"c": 1}});
        assert_eq!(accessor.resolve_or(&root, "a.b/c", json!(0)), json!(1));
        assert_eq!(accessor.config().separator, '/');
    }

    #[test]
    fn invalid_separator_is_rejected() {
        assert_eq!(
            PathAccessor::with_separator(' '),
            Err(ConfigurationError::InvalidSeparator(' '))
        );
    }
}
