// Application layer: axum router, handlers, and the auth middleware.

pub mod auth;
pub mod clean;

use crate::config::AppConfig;
use crate::domain::ports::ExecutionStore;
use crate::utils::error::CleanerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ExecutionStore>,
    pub config: Arc<AppConfig>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/_health", get(clean::health))
        .route(
            "/tibber-developer-test/enter-path",
            post(clean::execute_cleaning),
        )
        .route(
            "/tibber-developer-test/enter-path/:id",
            get(clean::fetch_execution),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::handle_auth,
        ))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

impl IntoResponse for CleanerError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            CleanerError::InvalidValue { .. }
            | CleanerError::MalformedBody { .. }
            | CleanerError::DuplicateRecord => (StatusCode::BAD_REQUEST, self.to_string()),
            CleanerError::UnsupportedMediaType => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, self.to_string())
            }
            CleanerError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, self.to_string()),
            CleanerError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            _ => {
                // log the real cause, never leak it to the caller
                tracing::error!("internal error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "details": details }))).into_response()
    }
}
