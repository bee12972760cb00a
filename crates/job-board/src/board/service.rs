use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::catalog::Catalog;
use super::companies::{CompanyDirectory, CompanyView};
use super::domain::{CompanyId, Job, JobId, SavedJobId};
use super::error::BoardError;
use super::query::{self, JobFilter, JobQuery, Page, DEFAULT_PAGE_SIZE};
use super::saved::{
    InMemorySavedJobRepository, SavedJobManager, SavedJobPatch, SavedJobRepository, SavedJobView,
};

/// Single entry point composing the catalog, query engine, company
/// directory and saved-job manager. Built once and shared by reference.
pub struct JobBoard<R> {
    catalog: Arc<Catalog>,
    companies: CompanyDirectory,
    saved: SavedJobManager<R>,
    page_size: usize,
}

impl JobBoard<InMemorySavedJobRepository> {
    /// Board whose bookmarks live in memory, seeded from the catalog.
    pub fn in_memory(catalog: Catalog) -> Self {
        let repository = InMemorySavedJobRepository::with_records(catalog.initial_saved().to_vec());
        Self::new(Arc::new(catalog), Arc::new(repository))
    }
}

impl<R> JobBoard<R>
where
    R: SavedJobRepository + 'static,
{
    pub fn new(catalog: Arc<Catalog>, repository: Arc<R>) -> Self {
        Self {
            companies: CompanyDirectory::new(catalog.clone()),
            saved: SavedJobManager::new(catalog.clone(), repository),
            catalog,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Page size used when a caller does not ask for one.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_jobs(&self, filter: &JobFilter) -> Vec<Job> {
        query::filter_jobs(self.catalog.jobs(), filter, Utc::now())
    }

    pub fn search(&self, request: &JobQuery) -> Page<Job> {
        self.search_at(request, Utc::now())
    }

    pub fn search_at(&self, request: &JobQuery, now: DateTime<Utc>) -> Page<Job> {
        let page = request.run(self.catalog.jobs(), now);
        debug!(
            matched = page.total_items,
            page = page.page,
            active_filters = request.filter.active_count(),
            "job search"
        );
        page
    }

    pub fn job(&self, id: JobId) -> Result<Job, BoardError> {
        self.catalog
            .job(id)
            .cloned()
            .ok_or(BoardError::JobNotFound(id))
    }

    pub fn popular_jobs(&self, limit: usize) -> Vec<Job> {
        query::popular(self.catalog.jobs(), limit)
    }

    pub fn recent_jobs(&self, limit: usize) -> Vec<Job> {
        query::recent(self.catalog.jobs(), limit)
    }

    pub fn suggestions(&self, query: &str) -> Vec<String> {
        query::suggest(self.catalog.jobs(), query)
    }

    pub fn companies(&self) -> &CompanyDirectory {
        &self.companies
    }

    pub fn list_companies(&self) -> Vec<CompanyView> {
        self.companies.list()
    }

    pub fn company(&self, id: CompanyId) -> Result<CompanyView, BoardError> {
        self.companies.get_by_id(id)
    }

    pub fn company_by_name(&self, name: &str) -> Result<CompanyView, BoardError> {
        self.companies.get_by_name(name)
    }

    pub fn search_companies(&self, query: &str) -> Vec<CompanyView> {
        self.companies.search(query)
    }

    pub fn saved_jobs(&self) -> Result<Vec<SavedJobView>, BoardError> {
        self.saved.list()
    }

    pub fn saved_job(&self, id: SavedJobId) -> Result<SavedJobView, BoardError> {
        self.saved.get(id)
    }

    pub fn save_job(
        &self,
        job_id: JobId,
        notes: impl Into<String>,
    ) -> Result<SavedJobView, BoardError> {
        self.saved.save(job_id, notes)
    }

    pub fn save_job_at(
        &self,
        job_id: JobId,
        notes: impl Into<String>,
        saved_at: DateTime<Utc>,
    ) -> Result<SavedJobView, BoardError> {
        self.saved.save_at(job_id, notes, saved_at)
    }

    pub fn update_saved_job(
        &self,
        id: SavedJobId,
        patch: SavedJobPatch,
    ) -> Result<SavedJobView, BoardError> {
        self.saved.update(id, patch)
    }

    pub fn unsave_job(&self, id: SavedJobId) -> Result<(), BoardError> {
        self.saved.unsave(id)
    }

    pub fn unsave_by_job(&self, job_id: JobId) -> Result<bool, BoardError> {
        self.saved.unsave_by_job(job_id)
    }

    pub fn is_saved(&self, job_id: JobId) -> Result<bool, BoardError> {
        self.saved.is_saved(job_id)
    }
}
