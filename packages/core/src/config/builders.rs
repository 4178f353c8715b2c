//! Builder methods for accessor configuration

use super::types::AccessorConfig;

impl AccessorConfig {
    /// Set the character that separates path segments
    ///
    /// # Arguments
    /// * `separator` - Segment separator, `.` by default
    ///
    /// # Examples
    /// ```
    /// use deepget_core::config::AccessorConfig;
    ///
    /// let config = AccessorConfig::default().with_separator('/');
    /// assert_eq!(config.separator, '/');
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}
