use crate::core::segment::Segment;
use crate::domain::model::{CleaningPath, Point};

/// Divide a path into its horizontal and vertical raw segments, in traversal
/// order. Each entry is the (start, end) pair actually walked, not yet
/// canonicalized. Validated input never produces zero-length segments since
/// steps > 0.
pub fn divide_path(path: &CleaningPath) -> (Vec<Segment>, Vec<Segment>) {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();

    let mut cursor = path.start;
    for command in &path.commands {
        let (dx, dy) = command.direction.unit_delta();
        let steps = i64::from(command.steps);
        let next = Point::new(cursor.x + dx * steps, cursor.y + dy * steps);

        if dy == 0 {
            horizontal.push(Segment::new(cursor, next));
        } else {
            vertical.push(Segment::new(cursor, next));
        }
        cursor = next;
    }

    (horizontal, vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Direction, MoveCommand};

    fn path(start: (i64, i64), commands: &[(Direction, u32)]) -> CleaningPath {
        CleaningPath {
            start: Point::new(start.0, start.1),
            commands: commands
                .iter()
                .map(|&(direction, steps)| MoveCommand { direction, steps })
                .collect(),
        }
    }

    fn seg(ax: i64, ay: i64, bx: i64, by: i64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn test_empty_commands() {
        let (horizontal, vertical) = divide_path(&path((0, 0), &[]));
        assert!(horizontal.is_empty());
        assert!(vertical.is_empty());
    }

    #[test]
    fn test_single_horizontal_command() {
        let (horizontal, vertical) = divide_path(&path((0, 0), &[(Direction::East, 5)]));
        assert_eq!(horizontal, vec![seg(0, 0, 5, 0)]);
        assert!(vertical.is_empty());
    }

    #[test]
    fn test_single_vertical_command() {
        let (horizontal, vertical) = divide_path(&path((0, 0), &[(Direction::North, 5)]));
        assert!(horizontal.is_empty());
        assert_eq!(vertical, vec![seg(0, 0, 0, 5)]);
    }

    #[test]
    fn test_multiple_commands_keep_walk_order() {
        let (horizontal, vertical) = divide_path(&path(
            (0, 0),
            &[
                (Direction::East, 5),
                (Direction::North, 5),
                (Direction::West, 3),
                (Direction::South, 2),
            ],
        ));
        assert_eq!(horizontal, vec![seg(0, 0, 5, 0), seg(5, 5, 2, 5)]);
        assert_eq!(vertical, vec![seg(5, 0, 5, 5), seg(2, 5, 2, 3)]);
    }

    #[test]
    fn test_mixed_commands_uncanonicalized_endpoints() {
        let (horizontal, vertical) = divide_path(&path(
            (0, 0),
            &[
                (Direction::East, 3),
                (Direction::North, 4),
                (Direction::West, 3),
                (Direction::South, 4),
                (Direction::East, 4),
                (Direction::West, 3),
                (Direction::West, 1),
                (Direction::South, 6),
            ],
        ));
        assert_eq!(
            horizontal,
            vec![
                seg(0, 0, 3, 0),
                seg(3, 4, 0, 4),
                seg(0, 0, 4, 0),
                seg(4, 0, 1, 0),
                seg(1, 0, 0, 0),
            ]
        );
        assert_eq!(
            vertical,
            vec![seg(3, 0, 3, 4), seg(0, 4, 0, 0), seg(0, 0, 0, -6)]
        );
    }
}
