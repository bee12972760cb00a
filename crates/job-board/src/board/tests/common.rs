use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::board::catalog::Catalog;
use crate::board::domain::{
    Company, CompanyId, CompanySize, ExperienceLevel, Job, JobId, JobType, SalaryRange, SavedJob,
    SavedJobId,
};
use crate::board::saved::{InMemorySavedJobRepository, RepositoryError, SavedJobRepository};
use crate::board::service::JobBoard;

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub(super) fn job(id: u32, title: &str, company: &str) -> Job {
    Job {
        id: JobId(id),
        title: title.to_string(),
        company: company.to_string(),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::MidLevel,
        salary: SalaryRange {
            min: 90_000,
            max: 110_000,
        },
        remote: true,
        tags: Vec::new(),
        description: "General engineering work.".to_string(),
        requirements: Vec::new(),
        benefits: Vec::new(),
        posted_date: days_ago(2),
        application_deadline: days_ago(-30),
    }
}

pub(super) fn company(id: u32, name: &str) -> Company {
    Company {
        id: CompanyId(id),
        name: name.to_string(),
        location: "Austin, TX".to_string(),
        size: CompanySize::Medium,
        industry: vec!["Technology".to_string()],
        description: "Builds software.".to_string(),
        founded: Some(2012),
        employees: "200-500".to_string(),
        website: "https://example.com".to_string(),
    }
}

pub(super) fn sample_jobs() -> Vec<Job> {
    let mut frontend = job(1, "Senior Engineer", "Acme Corp");
    frontend.location = "San Francisco, CA".to_string();
    frontend.experience_level = ExperienceLevel::Senior;
    frontend.salary = SalaryRange {
        min: 40_000,
        max: 60_000,
    };
    frontend.remote = false;
    frontend.tags = vec!["engineering".to_string(), "React".to_string()];
    frontend.posted_date = days_ago(1);

    let mut analyst = job(2, "Data Analyst", "Globex");
    analyst.location = "Austin, TX".to_string();
    analyst.experience_level = ExperienceLevel::Junior;
    analyst.salary = SalaryRange {
        min: 70_000,
        max: 90_000,
    };
    analyst.tags = vec!["SQL".to_string(), "engineering".to_string()];
    analyst.description = "Reporting for the finance team.".to_string();
    analyst.posted_date = days_ago(10);

    let mut contractor = job(3, "Integration Contractor", "Acme Corp");
    contractor.job_type = JobType::Contract;
    contractor.experience_level = ExperienceLevel::Senior;
    contractor.salary = SalaryRange { min: 80, max: 120 };
    contractor.tags = vec!["HL7".to_string()];
    contractor.description = "Connect hospital systems.".to_string();
    contractor.posted_date = days_ago(40);

    vec![frontend, analyst, contractor]
}

pub(super) fn sample_companies() -> Vec<Company> {
    let mut globex = company(2, "Globex");
    globex.location = "Springfield, OR".to_string();
    globex.industry = vec!["Energy".to_string(), "Utilities".to_string()];
    globex.description = "Power generation at scale.".to_string();
    vec![company(1, "Acme Corp"), globex, company(3, "Initech")]
}

pub(super) fn saved(id: u32, job_id: u32, days: i64) -> SavedJob {
    SavedJob {
        id: SavedJobId(id),
        job_id: JobId(job_id),
        saved_date: days_ago(days),
        notes: String::new(),
    }
}

pub(super) fn catalog_with(saved: Vec<SavedJob>) -> Catalog {
    Catalog::from_parts(sample_jobs(), sample_companies(), saved).expect("valid catalog")
}

pub(super) fn build_board() -> (
    JobBoard<InMemorySavedJobRepository>,
    Arc<InMemorySavedJobRepository>,
) {
    build_board_with(Vec::new())
}

pub(super) fn build_board_with(
    saved: Vec<SavedJob>,
) -> (
    JobBoard<InMemorySavedJobRepository>,
    Arc<InMemorySavedJobRepository>,
) {
    let catalog = Arc::new(catalog_with(Vec::new()));
    let repository = Arc::new(InMemorySavedJobRepository::with_records(saved));
    (JobBoard::new(catalog, repository.clone()), repository)
}

pub(super) struct UnavailableRepository;

impl UnavailableRepository {
    fn fail<T>(&self) -> Result<T, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

impl SavedJobRepository for UnavailableRepository {
    fn all(&self) -> Result<Vec<SavedJob>, RepositoryError> {
        self.fail()
    }

    fn fetch(&self, _id: SavedJobId) -> Result<Option<SavedJob>, RepositoryError> {
        self.fail()
    }

    fn fetch_by_job(&self, _job_id: JobId) -> Result<Option<SavedJob>, RepositoryError> {
        self.fail()
    }

    fn create(
        &self,
        _job_id: JobId,
        _notes: String,
        _saved_at: DateTime<Utc>,
    ) -> Result<SavedJob, RepositoryError> {
        self.fail()
    }

    fn update(&self, _record: SavedJob) -> Result<SavedJob, RepositoryError> {
        self.fail()
    }

    fn remove(&self, _id: SavedJobId) -> Result<(), RepositoryError> {
        self.fail()
    }

    fn remove_by_job(&self, _job_id: JobId) -> Result<bool, RepositoryError> {
        self.fail()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
