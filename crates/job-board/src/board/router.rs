use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::companies::CompanyView;
use super::domain::{CompanyId, ExperienceLevel, Job, JobId, JobType, SavedJobId};
use super::error::BoardError;
use super::query::{
    DatePosted, JobFilter, JobQuery, Page, PageRequest, SortBy, DEFAULT_POPULAR_LIMIT,
    DEFAULT_RECENT_LIMIT,
};
use super::saved::{RepositoryError, SavedJobPatch, SavedJobRepository};
use super::service::JobBoard;

/// Router builder exposing the job board over HTTP.
pub fn board_router<R>(board: Arc<JobBoard<R>>) -> Router
where
    R: SavedJobRepository + 'static,
{
    Router::new()
        .route("/api/v1/jobs", get(search_handler::<R>))
        .route("/api/v1/jobs/popular", get(popular_handler::<R>))
        .route("/api/v1/jobs/recent", get(recent_handler::<R>))
        .route("/api/v1/jobs/suggestions", get(suggestions_handler::<R>))
        .route("/api/v1/jobs/:job_id", get(job_handler::<R>))
        .route("/api/v1/companies", get(companies_handler::<R>))
        .route(
            "/api/v1/companies/by-name/:name",
            get(company_by_name_handler::<R>),
        )
        .route("/api/v1/companies/:company_id", get(company_handler::<R>))
        .route(
            "/api/v1/saved-jobs",
            get(saved_list_handler::<R>).post(save_handler::<R>),
        )
        .route(
            "/api/v1/saved-jobs/by-job/:job_id",
            get(is_saved_handler::<R>).delete(unsave_by_job_handler::<R>),
        )
        .route(
            "/api/v1/saved-jobs/:saved_job_id",
            get(saved_get_handler::<R>)
                .patch(saved_update_handler::<R>)
                .delete(unsave_handler::<R>),
        )
        .with_state(board)
}

/// Query string accepted by the job search endpoint. List options are
/// comma separated, e.g. `job_type=Full-time,Contract`.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchParams {
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub remote: Option<bool>,
    pub date_posted: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl JobSearchParams {
    pub fn into_query(self, default_page_size: usize) -> Result<JobQuery, String> {
        let filter = JobFilter {
            keywords: self.keywords,
            location: self.location,
            job_type: parse_list(self.job_type.as_deref(), JobType::parse, "job_type")?,
            experience_level: parse_list(
                self.experience_level.as_deref(),
                ExperienceLevel::parse,
                "experience_level",
            )?,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            remote: self.remote,
            date_posted: self.date_posted.as_deref().map(DatePosted::parse),
        };

        Ok(JobQuery {
            filter,
            sort_by: self.sort_by.as_deref().map(SortBy::parse).unwrap_or_default(),
            page: PageRequest::new(
                self.page.unwrap_or(1),
                self.per_page.unwrap_or(default_page_size),
            ),
        })
    }
}

fn parse_list<T>(
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
    field: &str,
) -> Result<Vec<T>, String> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| parse(value).ok_or_else(|| format!("unknown {field} value '{value}'")))
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResponse {
    #[serde(flatten)]
    pub page: Page<Job>,
    pub sort_by: SortBy,
    pub active_filters: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextQueryParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyProfileResponse {
    #[serde(flatten)]
    pub company: CompanyView,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJobRequest {
    #[serde(alias = "job_id")]
    pub job_id: JobId,
    #[serde(default)]
    pub notes: String,
}

pub(crate) async fn search_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Query(params): Query<JobSearchParams>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    let request = match params.into_query(board.page_size()) {
        Ok(request) => request,
        Err(message) => {
            let payload = json!({ "error": message });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let page = board.search(&request);
    let body = JobSearchResponse {
        page,
        sort_by: request.sort_by,
        active_filters: request.filter.active_count(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn job_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Path(job_id): Path<u32>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.job(JobId(job_id)) {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn popular_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<Job>>
where
    R: SavedJobRepository + 'static,
{
    Json(board.popular_jobs(params.limit.unwrap_or(DEFAULT_POPULAR_LIMIT)))
}

pub(crate) async fn recent_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<Job>>
where
    R: SavedJobRepository + 'static,
{
    Json(board.recent_jobs(params.limit.unwrap_or(DEFAULT_RECENT_LIMIT)))
}

pub(crate) async fn suggestions_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Query(params): Query<TextQueryParams>,
) -> Json<serde_json::Value>
where
    R: SavedJobRepository + 'static,
{
    let suggestions = board.suggestions(params.q.as_deref().unwrap_or_default());
    Json(json!({ "suggestions": suggestions }))
}

pub(crate) async fn companies_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Query(params): Query<TextQueryParams>,
) -> Json<Vec<CompanyView>>
where
    R: SavedJobRepository + 'static,
{
    Json(board.search_companies(params.q.as_deref().unwrap_or_default()))
}

pub(crate) async fn company_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Path(company_id): Path<u32>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.company(CompanyId(company_id)) {
        Ok(company) => {
            let jobs = board.companies().jobs_for(&company.company);
            (StatusCode::OK, Json(CompanyProfileResponse { company, jobs })).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn company_by_name_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Path(name): Path<String>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.company_by_name(&name) {
        Ok(company) => (StatusCode::OK, Json(company)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn saved_list_handler<R>(State(board): State<Arc<JobBoard<R>>>) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.saved_jobs() {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Json(request): Json<SaveJobRequest>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.save_job(request.job_id, request.notes) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn saved_get_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Path(saved_job_id): Path<u32>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.saved_job(SavedJobId(saved_job_id)) {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn saved_update_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Path(saved_job_id): Path<u32>,
    Json(patch): Json<SavedJobPatch>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.update_saved_job(SavedJobId(saved_job_id), patch) {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn unsave_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Path(saved_job_id): Path<u32>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.unsave_job(SavedJobId(saved_job_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn is_saved_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Path(job_id): Path<u32>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.is_saved(JobId(job_id)) {
        Ok(saved) => {
            (StatusCode::OK, Json(json!({ "jobId": job_id, "saved": saved }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn unsave_by_job_handler<R>(
    State(board): State<Arc<JobBoard<R>>>,
    Path(job_id): Path<u32>,
) -> Response
where
    R: SavedJobRepository + 'static,
{
    match board.unsave_by_job(JobId(job_id)) {
        Ok(removed) => {
            (StatusCode::OK, Json(json!({ "jobId": job_id, "removed": removed }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: BoardError) -> Response {
    if error.is_benign() {
        let payload = json!({
            "error": error.to_string(),
            "severity": "info",
        });
        return (StatusCode::CONFLICT, Json(payload)).into_response();
    }

    let status = match &error {
        _ if error.is_not_found() => StatusCode::NOT_FOUND,
        BoardError::Repository(RepositoryError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
