use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Displacement of a single step in this direction.
    pub const fn unit_delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveCommand {
    pub direction: Direction,
    pub steps: u32,
}

/// Request body of the enter-path endpoint: where the robot starts and the
/// commands it executes, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningPath {
    pub start: Point,
    pub commands: Vec<MoveCommand>,
}

/// One stored cleaning execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Execution {
    pub id: i64,
    pub commands: i32,
    pub result: i64,
    pub duration: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResponse {
    pub commands: i32,
    pub result: i64,
    pub duration: f64,
    pub timestamp: DateTime<Utc>,
    pub uri: String,
}

impl From<Execution> for ExecutionResponse {
    fn from(execution: Execution) -> Self {
        Self {
            uri: format!("/tibber-developer-test/enter-path/{}", execution.id),
            commands: execution.commands,
            result: execution.result,
            duration: execution.duration,
            timestamp: execution.timestamp,
        }
    }
}
