//! Query error type
//!
//! Wraps the two ways a strict query can fail: a rejected separator or a path
//! that does not resolve.

use deepget_core::PathError;
use deepget_core::config::ConfigurationError;

/// Result type for strict queries
pub type QueryResult<T> = Result<T, QueryError>;

/// Strict query failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid query configuration: {0}")]
    Config(#[from] ConfigurationError),

    #[error(transparent)]
    Path(#[from] PathError),
}
