use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use super::domain::{Company, CompanyId, Job, JobId, SavedJob};

const EMBEDDED_JOBS: &str = include_str!("../../data/jobs.json");
const EMBEDDED_COMPANIES: &str = include_str!("../../data/companies.json");
const EMBEDDED_SAVED_JOBS: &str = include_str!("../../data/saved_jobs.json");

pub const JOBS_FILE: &str = "jobs.json";
pub const COMPANIES_FILE: &str = "companies.json";
pub const SAVED_JOBS_FILE: &str = "saved_jobs.json";

/// Immutable job and company collections plus the initial saved-job seed.
#[derive(Debug, Clone)]
pub struct Catalog {
    jobs: Vec<Job>,
    companies: Vec<Company>,
    job_index: HashMap<JobId, usize>,
    initial_saved: Vec<SavedJob>,
}

impl Catalog {
    /// Load the seed data compiled into the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        let jobs = decode(JOBS_FILE, EMBEDDED_JOBS)?;
        let companies = decode(COMPANIES_FILE, EMBEDDED_COMPANIES)?;
        let saved = decode(SAVED_JOBS_FILE, EMBEDDED_SAVED_JOBS)?;
        Self::from_parts(jobs, companies, saved)
    }

    /// Load `jobs.json`, `companies.json` and `saved_jobs.json` from a directory.
    /// A missing saved-jobs file means no bookmarks.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let jobs = read_file(&dir.join(JOBS_FILE))?;
        let companies = read_file(&dir.join(COMPANIES_FILE))?;
        let saved_path = dir.join(SAVED_JOBS_FILE);
        let saved = if saved_path.exists() {
            read_file(&saved_path)?
        } else {
            Vec::new()
        };
        Self::from_parts(jobs, companies, saved)
    }

    pub fn from_parts(
        jobs: Vec<Job>,
        companies: Vec<Company>,
        initial_saved: Vec<SavedJob>,
    ) -> Result<Self, CatalogError> {
        let mut job_index = HashMap::with_capacity(jobs.len());
        for (position, job) in jobs.iter().enumerate() {
            if job.salary.min > job.salary.max {
                return Err(CatalogError::InvalidSalary {
                    job_id: job.id,
                    min: job.salary.min,
                    max: job.salary.max,
                });
            }
            if job_index.insert(job.id, position).is_some() {
                return Err(CatalogError::DuplicateId {
                    collection: "jobs",
                    id: job.id.0,
                });
            }
        }

        let mut company_ids = BTreeSet::new();
        for company in &companies {
            if !company_ids.insert(company.id) {
                return Err(CatalogError::DuplicateId {
                    collection: "companies",
                    id: company.id.0,
                });
            }
        }

        let mut saved_ids = BTreeSet::new();
        for saved in &initial_saved {
            if !saved_ids.insert(saved.id) {
                return Err(CatalogError::DuplicateId {
                    collection: "saved_jobs",
                    id: saved.id.0,
                });
            }
        }

        info!(
            jobs = jobs.len(),
            companies = companies.len(),
            saved_jobs = initial_saved.len(),
            "job board catalog loaded"
        );

        Ok(Self {
            jobs,
            companies,
            job_index,
            initial_saved,
        })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.job_index.get(&id).map(|&position| &self.jobs[position])
    }

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    /// Bookmarks present at load time; the saved-job repository owns them afterwards.
    pub fn initial_saved(&self) -> &[SavedJob] {
        &self.initial_saved
    }
}

fn read_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&path.display().to_string(), &raw)
}

fn decode<T: DeserializeOwned>(origin: &str, raw: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Decode {
        origin: origin.to_string(),
        source,
    })
}

/// Failure while loading or validating the record store.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {origin}: {source}")]
    Decode {
        origin: String,
        source: serde_json::Error,
    },
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: u32 },
    #[error("job {job_id} has salary min {min} above max {max}")]
    InvalidSalary { job_id: JobId, min: u32, max: u32 },
}
