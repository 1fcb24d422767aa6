use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse};
use axum::Json;
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::AppState;

use crate::error::HttpError;

const UI_PAGE: &str = include_str!("../../assets/index.html");

#[derive(serde::Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

pub async fn home() -> &'static str {
    "GitHub Webhook Receiver is running"
}

pub async fn ui() -> Html<&'static str> {
    Html(UI_PAGE)
}

pub async fn health_live() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Json<HealthStatus>, HttpError> {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let timeout_duration = Duration::from_secs(timeout_secs);
    match timeout(timeout_duration, state.health_service.check_database()).await {
        Ok(Ok(true)) => Ok(Json(HealthStatus { status: "ok" })),
        Ok(Ok(false)) => Err(HttpError::Unavailable("degraded")),
        Ok(Err(err)) => {
            error!("ready check failed: {}", err);
            Err(HttpError::Unavailable("error"))
        }
        Err(_) => {
            error!("ready check timeout after {}s", timeout_secs);
            Err(HttpError::Unavailable("timeout"))
        }
    }
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload)
}
