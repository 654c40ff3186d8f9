//! REST API endpoints.
//!
//! Axum-based HTTP API for league tables, the match schedule, the
//! prediction game, and admin score/date/name edits.

pub mod routes;
pub mod state;

use axum::routing::{get, put};
use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::repo::RepoError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(what) => ApiError::NotFound(what),
            RepoError::Conflict(why) => ApiError::Conflict(why),
            RepoError::Storage(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the API router with an open CORS policy.
pub fn build_router(state: AppState) -> Router {
    build_router_with_cors(state, "*")
}

/// Build the API router, restricting CORS to `cors_origin` unless it is `"*"`.
pub fn build_router_with_cors(state: AppState, cors_origin: &str) -> Router {
    let cors = if cors_origin == "*" {
        CorsLayer::permissive()
    } else {
        match cors_origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => {
                tracing::warn!("Invalid CORS origin '{}'; allowing any origin", cors_origin);
                CorsLayer::permissive()
            }
        }
    };

    Router::new()
        .route("/api/health", get(routes::meta::health))
        .route("/api/teams", get(routes::teams::list_teams))
        .route("/api/teams/:id/name", put(routes::teams::update_team_name))
        .route("/api/matches", get(routes::matches::list_matches))
        .route(
            "/api/matches/:id/result",
            put(routes::matches::record_result),
        )
        .route("/api/matches/:id/date", put(routes::matches::set_date))
        .route("/api/standings", get(routes::standings::standings))
        .route("/api/leaderboard", get(routes::leaderboard::leaderboard))
        .route(
            "/api/predictions",
            get(routes::predictions::list_predictions).post(routes::predictions::submit_prediction),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::testutil::{setup_state, Fixture};
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    async fn origin_header(app: Router, origin: &str) -> Option<String> {
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        resp.headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_cors_restricted_to_configured_origin() {
        let tmp = TempDir::new().unwrap();
        let state = setup_state(&tmp, Fixture::default());

        let app = build_router_with_cors(state, "https://league.example");
        assert_eq!(
            origin_header(app, "https://league.example").await,
            Some("https://league.example".to_string())
        );
    }

    #[tokio::test]
    async fn test_cors_wildcard_allows_any_origin() {
        let tmp = TempDir::new().unwrap();
        let state = setup_state(&tmp, Fixture::default());

        let app = build_router_with_cors(state, "*");
        assert_eq!(
            origin_header(app, "https://anywhere.example").await,
            Some("*".to_string())
        );
    }

    #[test]
    fn test_repo_error_maps_to_api_error() {
        let api: ApiError = RepoError::NotFound("match 9".to_string()).into();
        assert!(matches!(api, ApiError::NotFound(_)));

        let api: ApiError = RepoError::Conflict("completed".to_string()).into();
        assert!(matches!(api, ApiError::Conflict(_)));
    }
}
