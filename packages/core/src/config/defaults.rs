//! Default values for accessor configuration

use super::types::AccessorConfig;

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = '.';

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}
