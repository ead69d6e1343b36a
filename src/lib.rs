pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::InMemoryStore;
pub use crate::app::{create_router, AppState};
pub use crate::config::{AppConfig, CliConfig};
pub use crate::core::calculate_unique_places;
pub use crate::domain::{CleaningPath, Direction, Execution, ExecutionStore, MoveCommand, Point};
pub use crate::utils::error::{CleanerError, Result};
