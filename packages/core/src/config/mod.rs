//! Accessor configuration
//!
//! Types, defaults, builder methods and validation for [`AccessorConfig`].

mod builders;
mod defaults;
mod types;
mod validation;

pub use defaults::DEFAULT_SEPARATOR;
pub use types::AccessorConfig;
pub use validation::{ConfigResult, ConfigurationError, Validator};
