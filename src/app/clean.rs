use crate::app::AppState;
use crate::core::calculate_unique_places;
use crate::domain::model::{CleaningPath, ExecutionResponse};
use crate::utils::error::{CleanerError, Result};
use crate::utils::retry::retry_with_backoff;
use crate::utils::validation::Validate;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use std::time::Instant;

const MAX_STORE_TRIES: u32 = 3;

pub async fn health() -> &'static str {
    "OK"
}

/// POST /tibber-developer-test/enter-path
///
/// Validates the path, counts the unique places the robot visits, records
/// the execution, and returns the stored record.
pub async fn execute_cleaning(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CleaningPath>, JsonRejection>,
) -> Result<Json<ExecutionResponse>> {
    let Json(path) = payload.map_err(map_rejection)?;
    path.validate()?;

    let started = Instant::now();
    let result = calculate_unique_places(&path);
    let duration = round_seconds(started.elapsed().as_secs_f64());

    tracing::debug!(result, duration, "calculated unique places");

    let commands = path.commands.len() as i32;
    let store = state.store.clone();
    let execution = retry_with_backoff("add_execution", MAX_STORE_TRIES, || {
        store.add_execution(commands, result as i64, duration)
    })
    .await?;

    Ok(Json(ExecutionResponse::from(execution)))
}

/// GET /tibber-developer-test/enter-path/{id}
pub async fn fetch_execution(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ExecutionResponse>> {
    let execution = state
        .store
        .fetch_execution(id)
        .await?
        .ok_or(CleanerError::NotFound { id })?;

    Ok(Json(ExecutionResponse::from(execution)))
}

fn map_rejection(rejection: JsonRejection) -> CleanerError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => CleanerError::UnsupportedMediaType,
        other => CleanerError::MalformedBody {
            message: other.body_text(),
        },
    }
}

/// Durations are reported in seconds with microsecond precision, matching
/// the stored column.
fn round_seconds(seconds: f64) -> f64 {
    (seconds * 1e6).round() / 1e6
}
