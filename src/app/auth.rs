use crate::app::AppState;
use crate::utils::error::CleanerError;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Bearer-token check in front of every route except the health probe.
/// Outside production the check is skipped so local runs need no key.
pub async fn handle_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.config.is_production {
        tracing::warn!("Running in DEV mode. Skipping authentication!");
        return next.run(request).await;
    }

    if request.uri().path() == "/_health" {
        return next.run(request).await;
    }

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if header.is_empty() {
        return CleanerError::Unauthorized {
            message: "Empty authorization header!".to_string(),
        }
        .into_response();
    }

    // compare the last whitespace-separated token, so both
    // "Bearer <key>" and a bare "<key>" pass
    let token = header.split_whitespace().last().unwrap_or("");
    if token != state.config.auth_api_key {
        return CleanerError::Unauthorized {
            message: "Invalid API token!".to_string(),
        }
        .into_response();
    }

    next.run(request).await
}
