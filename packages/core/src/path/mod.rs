//! Path input validation and segment splitting
//!
//! A path is only honored when it arrives as text. Dynamic callers hand over
//! an arbitrary JSON value; anything but a string is rejected here before any
//! lookup is attempted.

use serde_json::Value as JsonValue;

use crate::error::{PathError, PathResult};

/// Classification of a dynamically supplied path
pub struct PathInput;

impl PathInput {
    /// Extract the path text from a dynamically supplied value
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidPath` when the value is absent or is not a
    /// JSON string.
    pub fn classify(input: Option<&JsonValue>) -> PathResult<&str> {
        match input {
            Some(JsonValue::String(path)) => Ok(path.as_str()),
            other => Err(PathError::invalid_path(other)),
        }
    }
}

/// Split a path into its ordered segments
///
/// Doubled or trailing separators produce empty segments, which are looked up
/// as the empty key.
///
/// # Errors
///
/// Returns `PathError::EmptyPath` for the empty string.
pub fn split_segments(path: &str, separator: char) -> PathResult<Vec<&str>> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    Ok(path.split(separator).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn only_strings_are_paths() {
        assert_eq!(PathInput::classify(Some(&json!("a.b"))), Ok("a.b"));
        assert_eq!(PathInput::classify(Some(&json!(""))), Ok(""));

        for input in [json!(false), json!(true), json!(0), json!(-1), json!(23), json!([23, 42]), json!({}), json!([]), json!(null)] {
            assert!(matches!(
                PathInput::classify(Some(&input)),
                Err(PathError::InvalidPath { .. })
            ));
        }
        assert_eq!(
            PathInput::classify(None),
            Err(PathError::InvalidPath { found: "nothing" })
        );
    }

    #[test]
    fn splits_on_separator() {
        assert_eq!(
            split_segments("some.deeply.nested.prop", '.'),
            Ok(vec!["some", "deeply", "nested", "prop"])
        );
        assert_eq!(split_segments("a/b.c", '/'), Ok(vec!["a", "b.c"]));
        assert_eq!(split_segments("single", '.'), Ok(vec!["single"]));
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(split_segments("a..b", '.'), Ok(vec!["a", "", "b"]));
        assert_eq!(split_segments("a.", '.'), Ok(vec!["a", ""]));
        assert_eq!(split_segments(".", '.'), Ok(vec!["", ""]));
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(split_segments("", '.'), Err(PathError::EmptyPath));
    }
}
