use crate::infra::{simulated_latency, AppState};
use axum::http::{header, StatusCode};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use job_board::board::{board_router, JobBoard, SavedJobRepository};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Board API plus the operational endpoints. The latency layer only wraps
/// the board routes so probes answer immediately.
pub(crate) fn with_board_routes<R>(board: Arc<JobBoard<R>>, latency: Option<Duration>) -> Router
where
    R: SavedJobRepository + 'static,
{
    let mut router = board_router(board);
    if let Some(delay) = latency {
        router = router.layer(middleware::from_fn_with_state(delay, simulated_latency));
    }

    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
