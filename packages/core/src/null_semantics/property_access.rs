//! Single-segment lookup with found vs missing distinction
//!
//! Objects are looked up by key, arrays through [`access_array_segment`].
//! Every other shape, including an intermediate `null`, cannot hold properties.

use serde_json::Value as JsonValue;

use super::array_access::access_array_segment;

/// Outcome of looking up one segment on one value
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentAccess<'a> {
    /// Segment names a value stored inside the container
    Found(&'a JsonValue),
    /// Segment names a value derived from the container, such as an array's length
    Computed(JsonValue),
    /// Container holds nothing under this segment
    Missing,
    /// Value is not an object or array and has no properties
    NotTraversable,
}

impl SegmentAccess<'_> {
    /// True if the lookup produced a value, stored or computed
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, SegmentAccess::Found(_) | SegmentAccess::Computed(_))
    }
}

/// Look up one segment on a value
///
/// A stored `null` is a found value; it only fails once something tries to
/// look up a further segment on it.
#[inline]
pub fn access_segment<'a>(value: &'a JsonValue, segment: &str) -> SegmentAccess<'a> {
    match value {
        JsonValue::Object(map) => match map.get(segment) {
            Some(found) => SegmentAccess::Found(found),
            None => SegmentAccess::Missing,
        },
        JsonValue::Array(_) => access_array_segment(value, segment),
        _ => SegmentAccess::NotTraversable,
    }
}

/// JSON kind name of a value, used in diagnostics
#[inline]
#[must_use]
pub fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
