use crate::core::segment::{Axis, Segment};

/// Merge overlapping or touching collinear segments sharing a fixed
/// coordinate on `axis` into a disjoint maximal set.
///
/// The output is canonical and sorted by (fixed coordinate, varying start).
/// No two output segments on the same line share, overlap, or touch, so
/// every covered lattice point is covered exactly once per axis.
pub fn merge_overlapping(segments: &[Segment], axis: Axis) -> Vec<Segment> {
    if segments.is_empty() {
        return Vec::new();
    }

    let mut canonical: Vec<Segment> = segments.iter().map(|s| s.canonical()).collect();
    canonical.sort_by_key(|s| (axis.fixed(s.a), axis.varying(s.a)));

    let mut merged = Vec::with_capacity(canonical.len());
    let mut current = canonical[0];

    for segment in canonical.into_iter().skip(1) {
        let same_line = axis.fixed(segment.a) == axis.fixed(current.a);
        if same_line && axis.varying(segment.a) <= axis.varying(current.b) {
            // overlap or exact touch: extend the current segment
            if axis.varying(segment.b) > axis.varying(current.b) {
                current.b = segment.b;
            }
        } else {
            merged.push(current);
            current = segment;
        }
    }
    merged.push(current);

    merged
}
