use crate::core::segment::Segment;

/// Total number of lattice points covered by a disjoint set of axis-aligned
/// segments.
pub fn count_points(segments: &[Segment]) -> u64 {
    segments.iter().map(count_segment_points).sum()
}

/// Number of lattice points a single axis-aligned segment passes through,
/// both endpoints included. A degenerate single-point segment counts as 1.
pub fn count_segment_points(segment: &Segment) -> u64 {
    let Segment { a, b } = *segment;
    if a.x == b.x {
        return b.y.abs_diff(a.y) + 1;
    }
    if a.y == b.y {
        return b.x.abs_diff(a.x) + 1;
    }

    // Decomposition only ever produces axis-aligned segments; anything else
    // is a broken invariant upstream, not a user error.
    debug_assert!(false, "segment is not axis-aligned: {segment:?}");
    tracing::error!(?segment, "invariant violation: segment is not axis-aligned");
    0
}
