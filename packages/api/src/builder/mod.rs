//! Fluent path query builder
//!
//! Build a query once with its default and separator, then run it against
//! any number of roots.

pub mod core;
pub mod methods;

pub use self::core::PathQuery;
