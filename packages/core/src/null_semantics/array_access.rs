//! Array segment lookup
//!
//! Arrays answer two kinds of segment: `length`, which yields the element
//! count, and a canonical decimal index. Out-of-bounds access is missing.

use serde_json::Value as JsonValue;

use super::property_access::SegmentAccess;

/// Segment naming an array's element count
pub const LENGTH_SEGMENT: &str = "length";

/// Look up one segment on an array value
#[inline]
pub fn access_array_segment<'a>(array: &'a JsonValue, segment: &str) -> SegmentAccess<'a> {
    let JsonValue::Array(items) = array else {
        return SegmentAccess::NotTraversable;
    };

    if segment == LENGTH_SEGMENT {
        return SegmentAccess::Computed(JsonValue::from(items.len()));
    }

    match parse_index(segment).and_then(|index| items.get(index)) {
        Some(item) => SegmentAccess::Found(item),
        None => SegmentAccess::Missing,
    }
}

/// Parse a segment as an array index
///
/// Only canonical forms count: `"0"`, `"12"`. Leading zeros, signs and
/// whitespace make the segment an ordinary (absent) key.
#[inline]
#[must_use]
pub fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if !canonical {
        return None;
    }
    // Overflowing indices cannot be in bounds anyway
    segment.parse().ok()
}
