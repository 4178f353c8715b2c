//! Core accessor configuration type

use serde::{Deserialize, Serialize};

/// Settings for a [`PathAccessor`](crate::accessor::PathAccessor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorConfig {
    /// Character separating path segments
    pub separator: char,
}
