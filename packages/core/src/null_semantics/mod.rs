//! Null vs missing value semantics for path lookup
//!
//! A JSON `null` stored at the end of a path is a real result and is returned
//! as-is. A missing member, an out-of-range index or a walk through a scalar
//! is absent, and only absence falls back to the caller's default.

mod array_access;
mod conversion;
mod property_access;

pub use array_access::{LENGTH_SEGMENT, access_array_segment, parse_index};
pub use conversion::Resolved;
pub use property_access::{SegmentAccess, access_segment, value_kind};
