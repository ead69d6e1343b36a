use crate::domain::model::CleaningPath;
use crate::utils::error::{CleanerError, Result};

/// Request coordinates must stay within [-COORDINATE_BOUND, COORDINATE_BOUND].
pub const COORDINATE_BOUND: i64 = 100_000;
/// A path carries at most this many commands.
pub const MAX_COMMANDS: usize = 10_000;
/// Steps are bounded to (0, MAX_STEPS) exclusive.
pub const MAX_STEPS: u32 = 100_000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CleanerError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_max_len(field_name: &str, len: usize, max: usize) -> Result<()> {
    if len > max {
        return Err(CleanerError::InvalidValue {
            field: field_name.to_string(),
            value: len.to_string(),
            reason: format!("Length must not exceed {}", max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CleanerError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

impl Validate for CleaningPath {
    /// The algorithm core assumes these bounds hold; nothing past this point
    /// re-checks them.
    fn validate(&self) -> Result<()> {
        validate_range("start.x", self.start.x, -COORDINATE_BOUND, COORDINATE_BOUND)?;
        validate_range("start.y", self.start.y, -COORDINATE_BOUND, COORDINATE_BOUND)?;
        validate_max_len("commands", self.commands.len(), MAX_COMMANDS)?;
        for command in &self.commands {
            validate_range("steps", command.steps, 1, MAX_STEPS - 1)?;
        }
        Ok(())
    }
}
