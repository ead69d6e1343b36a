use crate::domain::model::{CleaningPath, Point};
use std::collections::HashSet;

/// Literal step-by-step simulation: walk every unit step and collect the
/// visited points into a set.
///
/// O(total steps), which reaches ~10^9 at the input bounds, so this never
/// runs on the request path. It exists as the differential-testing oracle
/// for `calculate_unique_places` at small input sizes.
pub fn simulate_unique_places(path: &CleaningPath) -> u64 {
    let mut visited = HashSet::new();
    let mut cursor = path.start;
    visited.insert(cursor);

    for command in &path.commands {
        let (dx, dy) = command.direction.unit_delta();
        for _ in 0..command.steps {
            cursor = Point::new(cursor.x + dx, cursor.y + dy);
            visited.insert(cursor);
        }
    }

    visited.len() as u64
}
