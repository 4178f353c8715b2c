//! Resolution outcome with null vs missing distinction
//!
//! A path that ends on a stored `null` resolved successfully; a path that
//! could not be walked is missing. Only missing triggers the default.

use std::borrow::Cow;

use serde_json::Value as JsonValue;

use crate::error::PathResult;

static NULL: JsonValue = JsonValue::Null;

/// Outcome of resolving a full path
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// Path resolved to a non-null value
    Value(Cow<'a, JsonValue>),
    /// Path resolved to a stored `null`
    Null,
    /// Path could not be resolved
    Missing,
}

impl<'a> Resolved<'a> {
    /// Build from a strict resolution result, discarding the failure reason
    #[must_use]
    pub fn from_result(result: PathResult<Cow<'a, JsonValue>>) -> Self {
        match result {
            Ok(value) if value.is_null() => Resolved::Null,
            Ok(value) => Resolved::Value(value),
            Err(_) => Resolved::Missing,
        }
    }

    /// Check if the path resolved, to null or otherwise
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    /// Check if the path could not be resolved
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing)
    }

    /// Check if the path resolved to a stored `null`
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Resolved::Null)
    }

    /// Borrow the resolved value, with `null` preserved
    #[must_use]
    pub fn as_value(&self) -> Option<&JsonValue> {
        match self {
            Resolved::Value(value) => Some(&**value),
            Resolved::Null => Some(&NULL),
            Resolved::Missing => None,
        }
    }

    /// Convert into an owned value, with `null` preserved
    #[must_use]
    pub fn into_option(self) -> Option<JsonValue> {
        match self {
            Resolved::Value(value) => Some(value.into_owned()),
            Resolved::Null => Some(JsonValue::Null),
            Resolved::Missing => None,
        }
    }

    /// Convert into an owned value, substituting `default` when missing
    ///
    /// `default` is returned untouched; it is never inspected or merged.
    #[must_use]
    pub fn or_default(self, default: Option<JsonValue>) -> Option<JsonValue> {
        match self {
            Resolved::Missing => default,
            present => present.into_option(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::PathError;

    #[test]
    fn from_result_splits_null() {
        let stored_null = JsonValue::Null;
        assert_eq!(Resolved::from_result(Ok(Cow::Borrowed(&stored_null))), Resolved::Null);
        assert_eq!(
            Resolved::from_result(Err(PathError::EmptyPath)),
            Resolved::Missing
        );
    }

    #[test]
    fn null_is_present_but_not_defaulted() {
        let resolved = Resolved::Null;
        assert!(resolved.is_present());
        assert!(resolved.is_null());
        assert_eq!(resolved.or_default(Some(json!("fallback"))), Some(JsonValue::Null));
    }

    #[test]
    fn falsy_values_are_kept() {
        for value in [json!(0), json!(false), json!("")] {
            let resolved = Resolved::Value(Cow::Owned(value.clone()));
            assert_eq!(resolved.or_default(Some(json!("fallback"))), Some(value));
        }
    }

    #[test]
    fn missing_yields_default_verbatim() {
        let default = json!({"nested": ["default", 1]});
        assert_eq!(Resolved::Missing.or_default(Some(default.clone())), Some(default));
        assert_eq!(Resolved::Missing.or_default(None), None);
        assert_eq!(Resolved::Missing.as_value(), None);
    }
}
