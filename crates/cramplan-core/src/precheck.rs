//! Fixed-event overlap detection.
//!
//! The allocator trusts caller-supplied fixed events to be mutually
//! non-overlapping; it plans around them without checking. This pre-check is
//! the explicit guard to run in front of it when the input comes from an
//! unreliable producer. Adjacent events (one ends exactly when the next
//! starts) are NOT overlaps.

use crate::types::FixedEvent;

/// A detected overlap between two fixed events.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedOverlap {
    pub first: FixedEvent,
    pub second: FixedEvent,
    pub overlap_minutes: i64,
}

/// Find every pair of fixed events whose time ranges intersect.
///
/// Two events overlap iff `a.start < b.end && b.start < a.end`; the overlap
/// length is `min(a.end, b.end) - max(a.start, b.start)`. Each unordered
/// pair is reported once, in input order.
pub fn find_fixed_overlaps(events: &[FixedEvent]) -> Vec<FixedOverlap> {
    let mut overlaps = Vec::new();

    for (i, a) in events.iter().enumerate() {
        for b in &events[i + 1..] {
            if a.start < b.end && b.start < a.end {
                let overlap_start = a.start.max(b.start);
                let overlap_end = a.end.min(b.end);
                overlaps.push(FixedOverlap {
                    first: a.clone(),
                    second: b.clone(),
                    overlap_minutes: (overlap_end - overlap_start).num_minutes(),
                });
            }
        }
    }

    overlaps
}
