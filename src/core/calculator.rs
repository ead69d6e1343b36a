use crate::core::count::count_points;
use crate::core::decompose::divide_path;
use crate::core::merge::merge_overlapping;
use crate::core::segment::Axis;
use crate::core::sweep::count_intersections;
use crate::domain::model::CleaningPath;

/// Count the distinct lattice points the robot visits along `path`.
///
/// Runs in O(n log n) of the number of commands rather than the number of
/// steps: the path is decomposed into axis-aligned segments, each axis group
/// is collapsed into a disjoint merged set, and the per-axis point counts
/// are summed. A point lying on both a merged vertical and a merged
/// horizontal segment (a crossing or an endpoint touch) shows up in both
/// sums, and per-axis disjointness means it shows up exactly twice, so
/// subtracting the sweep-line intersection count corrects the total.
pub fn calculate_unique_places(path: &CleaningPath) -> u64 {
    if path.commands.is_empty() {
        return 1;
    }

    let (horizontal, vertical) = divide_path(path);

    let merged_vertical = merge_overlapping(&vertical, Axis::Vertical);
    let merged_horizontal = merge_overlapping(&horizontal, Axis::Horizontal);

    let common = count_intersections(&merged_vertical, &merged_horizontal);
    let total = count_points(&merged_vertical) + count_points(&merged_horizontal);

    total - common
}
