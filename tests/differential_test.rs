use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use robot_cleaner::core::naive::simulate_unique_places;
use robot_cleaner::core::{
    calculate_unique_places, count_intersections, merge_overlapping, Axis, Segment,
};
use robot_cleaner::{CleaningPath, Direction, MoveCommand, Point};

const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

fn random_path(rng: &mut StdRng, max_commands: usize, max_steps: u32) -> CleaningPath {
    let commands = (0..rng.gen_range(0..=max_commands))
        .map(|_| MoveCommand {
            direction: DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())],
            steps: rng.gen_range(1..=max_steps),
        })
        .collect();
    CleaningPath {
        start: Point::new(rng.gen_range(-50..=50), rng.gen_range(-50..=50)),
        commands,
    }
}

#[test]
fn test_optimized_matches_naive_simulation() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let path = random_path(&mut rng, 25, 12);
        assert_eq!(
            calculate_unique_places(&path),
            simulate_unique_places(&path),
            "diverged on path: {path:?}"
        );
    }
}

#[test]
fn test_optimized_matches_naive_on_tight_loops() {
    // small steps force heavy self-overlap, the regime where merging and
    // intersection correction do all the work
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..300 {
        let path = random_path(&mut rng, 40, 3);
        assert_eq!(
            calculate_unique_places(&path),
            simulate_unique_places(&path),
            "diverged on path: {path:?}"
        );
    }
}

fn random_segments(rng: &mut StdRng, axis: Axis, count: usize) -> Vec<Segment> {
    (0..count)
        .map(|_| {
            let fixed = rng.gen_range(-6..=6);
            let lo = rng.gen_range(-10..=10);
            let hi = rng.gen_range(-10..=10);
            match axis {
                Axis::Vertical => Segment::new(Point::new(fixed, lo), Point::new(fixed, hi)),
                Axis::Horizontal => Segment::new(Point::new(lo, fixed), Point::new(hi, fixed)),
            }
        })
        .collect()
}

#[test]
fn test_merge_is_idempotent_on_random_input() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let count = rng.gen_range(1..=20);
            let segments = random_segments(&mut rng, axis, count);
            let merged = merge_overlapping(&segments, axis);
            assert_eq!(merge_overlapping(&merged, axis), merged);
        }
    }
}

fn brute_force_intersections(vertical: &[Segment], horizontal: &[Segment]) -> u64 {
    let mut count = 0;
    for v in vertical.iter().map(|s| s.canonical()) {
        for h in horizontal.iter().map(|s| s.canonical()) {
            if h.a.x <= v.a.x && v.a.x <= h.b.x && v.a.y <= h.a.y && h.a.y <= v.b.y {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_sweep_matches_brute_force_on_random_merged_sets() {
    // Random dense sets on a small grid produce plenty of shared columns,
    // exercising the start/probe/end tie-break at equal x.
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let vertical_count = rng.gen_range(1..=15);
        let horizontal_count = rng.gen_range(1..=15);
        let vertical = merge_overlapping(
            &random_segments(&mut rng, Axis::Vertical, vertical_count),
            Axis::Vertical,
        );
        let horizontal = merge_overlapping(
            &random_segments(&mut rng, Axis::Horizontal, horizontal_count),
            Axis::Horizontal,
        );

        assert_eq!(
            count_intersections(&vertical, &horizontal),
            brute_force_intersections(&vertical, &horizontal),
            "diverged on vertical: {vertical:?}, horizontal: {horizontal:?}"
        );
    }
}
