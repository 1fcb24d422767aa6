use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{ops_handlers, query_handlers, webhook_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops_handlers::home))
        .route("/webhook", post(webhook_handlers::receive_webhook))
        .route("/events", get(query_handlers::list_events))
        .route("/check", get(query_handlers::check_events))
        .route("/ui", get(ops_handlers::ui))
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route("/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
