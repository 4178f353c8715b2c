//! Configuration validation

use super::types::AccessorConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid path separator: {0:?}")]
    InvalidSeparator(char),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSeparator` if the separator is
    /// whitespace or a control character.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for AccessorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.separator.is_whitespace() || self.separator.is_control() {
            return Err(ConfigurationError::InvalidSeparator(self.separator));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AccessorConfig::default().validate(), Ok(()));
        assert_eq!(AccessorConfig::default().separator, '.');
    }

    #[test]
    fn printable_separators_are_accepted() {
        for separator in ['/', ':', '|', '→'] {
            assert!(AccessorConfig::default().with_separator(separator).validate().is_ok());
        }
    }

    #[test]
    fn whitespace_and_control_separators_are_rejected() {
        for separator in [' ', '\t', '\n', '\0'] {
            assert_eq!(
                AccessorConfig::default().with_separator(separator).validate(),
                Err(ConfigurationError::InvalidSeparator(separator))
            );
        }
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: AccessorConfig = serde_json::from_str("{}").expect("empty config parses");
        assert_eq!(config, AccessorConfig::default());

        let config: AccessorConfig =
            serde_json::from_str(r#"{"separator": "/"}"#).expect("separator parses");
        assert_eq!(config.separator, '/');
    }
}
