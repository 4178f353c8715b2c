//! Path resolution error handling
//!
//! Error types reported by strict resolution, plus constructors and
//! classification helpers.

mod helpers;
mod types;

pub use types::{ErrorKind, PathError, PathResult};
