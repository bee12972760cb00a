//! Job board core: record store, job query engine, saved-job manager and
//! company aggregator, plus the HTTP router layered over them.

pub mod catalog;
pub mod companies;
pub mod domain;
pub mod error;
pub mod query;
pub mod router;
pub mod saved;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError};
pub use companies::{CompanyDirectory, CompanyView};
pub use domain::{
    Company, CompanyId, CompanySize, ExperienceLevel, Job, JobId, JobType, SalaryCadence,
    SalaryRange, SavedJob, SavedJobId,
};
pub use error::BoardError;
pub use query::{DatePosted, JobFilter, JobQuery, Page, PageRequest, SearchSession, SortBy};
pub use router::board_router;
pub use saved::{
    InMemorySavedJobRepository, RepositoryError, SavedJobManager, SavedJobPatch,
    SavedJobRepository, SavedJobView,
};
pub use service::JobBoard;
