//! Liveness probe at `GET /api/health`.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: f64,
    pub environment: String,
}

#[derive(Debug, Clone)]
pub struct HealthState {
    started_at: Instant,
    environment: Arc<str>,
}

impl HealthState {
    pub fn new(environment: &str) -> Self {
        Self {
            started_at: Instant::now(),
            environment: environment.into(),
        }
    }

    fn status(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: self.started_at.elapsed().as_secs_f64(),
            environment: self.environment.to_string(),
        }
    }
}

pub fn router(state: HealthState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

#[tracing::instrument(skip(state))]
async fn health(State(state): State<HealthState>) -> impl IntoResponse {
    (
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        )],
        Json(state.status()),
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    async fn get_health() -> axum::response::Response {
        router(HealthState::new("test"))
            .oneshot(
                Request::builder()
                    .uri(HEALTH_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok_json() {
        let response = get_health().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
    }

    #[tokio::test]
    async fn health_body_shape() {
        let response = get_health().await;
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: HealthStatus = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body.status, "healthy");
        assert_eq!(body.environment, "test");
        assert!(body.uptime >= 0.0);
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[tokio::test]
    async fn other_methods_are_rejected() {
        let response = router(HealthState::new("test"))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(HEALTH_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
