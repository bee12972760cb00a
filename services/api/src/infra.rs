use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use job_board::board::{Catalog, InMemorySavedJobRepository, JobBoard};
use job_board::config::{AppConfig, BoardConfig};
use job_board::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::DataArgs;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type Board = JobBoard<InMemorySavedJobRepository>;

/// Configuration with command-line data overrides applied.
pub(crate) fn load_config(data: &DataArgs) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(dir) = data.data_dir.clone() {
        config.board.data_dir = Some(dir);
    }
    Ok(config)
}

pub(crate) fn load_board(config: &BoardConfig) -> Result<Board, AppError> {
    let catalog = match &config.data_dir {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::embedded()?,
    };
    Ok(JobBoard::in_memory(catalog).with_page_size(config.page_size))
}

/// Holds each request for a fixed delay before handing it on.
pub(crate) async fn simulated_latency(
    State(delay): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    tokio::time::sleep(delay).await;
    next.run(request).await
}
