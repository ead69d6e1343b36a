// Core layer: the path counting algorithm. Pure synchronous functions of
// their input, safe to run concurrently across requests without locks.

pub mod calculator;
pub mod count;
pub mod decompose;
pub mod merge;
pub mod naive;
pub mod segment;
pub mod sweep;

pub use calculator::calculate_unique_places;
pub use count::count_points;
pub use decompose::divide_path;
pub use merge::merge_overlapping;
pub use segment::{Axis, Segment};
pub use sweep::count_intersections;
