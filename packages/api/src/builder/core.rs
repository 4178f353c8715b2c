//! Core `PathQuery` structure and configuration methods
//!
//! A `PathQuery` captures a path, an optional default and a separator, and can
//! be run against any number of roots.

use deepget_core::config::{AccessorConfig, ConfigResult, DEFAULT_SEPARATOR};
use deepget_core::PathAccessor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reusable path lookup with its fallback value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathQuery {
    /// Separator-delimited path to resolve
    pub path: String,
    /// Value returned when the path cannot be resolved
    #[serde(default)]
    pub default: Option<Value>,
    /// Segment separator
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl PathQuery {
    /// Create a query for `path` with no default and the `.` separator
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default: None,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Value to return when the path cannot be resolved
    ///
    /// # Examples
    /// ```
    /// use deepget::DeepGet;
    /// use serde_json::json;
    ///
    /// let value = DeepGet::path("a.b").or(json!("fallback")).get(&json!({}));
    /// assert_eq!(value, Some(json!("fallback")));
    /// ```
    #[must_use]
    pub fn or(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Split the path on `separator` instead of `.`
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub(crate) fn accessor(&self) -> ConfigResult<PathAccessor> {
        PathAccessor::new(AccessorConfig::default().with_separator(self.separator))
    }
}
