use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::board::catalog::Catalog;
use crate::board::domain::{Job, JobId, SavedJob, SavedJobId};
use crate::board::error::BoardError;

use super::repository::{RepositoryError, SavedJobPatch, SavedJobRepository, SavedJobView};

/// Bookmark operations over a repository, resolving jobs through the catalog.
pub struct SavedJobManager<R> {
    catalog: Arc<Catalog>,
    repository: Arc<R>,
}

impl<R> SavedJobManager<R>
where
    R: SavedJobRepository + 'static,
{
    pub fn new(catalog: Arc<Catalog>, repository: Arc<R>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    /// Saved jobs newest first. Bookmarks whose job is gone are skipped.
    pub fn list(&self) -> Result<Vec<SavedJobView>, BoardError> {
        let mut views: Vec<SavedJobView> = self
            .repository
            .all()?
            .into_iter()
            .filter_map(|saved| match self.catalog.job(saved.job_id) {
                Some(job) => Some(SavedJobView {
                    saved,
                    job: job.clone(),
                }),
                None => {
                    warn!(
                        saved_job_id = %saved.id,
                        job_id = %saved.job_id,
                        "saved job references a job that no longer exists"
                    );
                    None
                }
            })
            .collect();

        views.sort_by(|a, b| b.saved.saved_date.cmp(&a.saved.saved_date));
        Ok(views)
    }

    pub fn get(&self, id: SavedJobId) -> Result<SavedJobView, BoardError> {
        let saved = self
            .repository
            .fetch(id)?
            .ok_or(BoardError::SavedJobNotFound(id))?;
        let job = self.resolve(saved.job_id)?;
        Ok(SavedJobView { saved, job })
    }

    pub fn save(
        &self,
        job_id: JobId,
        notes: impl Into<String>,
    ) -> Result<SavedJobView, BoardError> {
        self.save_at(job_id, notes, Utc::now())
    }

    pub fn save_at(
        &self,
        job_id: JobId,
        notes: impl Into<String>,
        saved_at: DateTime<Utc>,
    ) -> Result<SavedJobView, BoardError> {
        if self.repository.fetch_by_job(job_id)?.is_some() {
            return Err(BoardError::AlreadySaved(job_id));
        }
        let job = self.resolve(job_id)?;

        let saved = match self.repository.create(job_id, notes.into(), saved_at) {
            Ok(saved) => saved,
            Err(RepositoryError::Conflict(job_id)) => {
                return Err(BoardError::AlreadySaved(job_id));
            }
            Err(other) => return Err(other.into()),
        };

        info!(saved_job_id = %saved.id, %job_id, "job saved");
        Ok(SavedJobView { saved, job })
    }

    /// Apply `patch`; the record's id and job reference never change.
    pub fn update(
        &self,
        id: SavedJobId,
        patch: SavedJobPatch,
    ) -> Result<SavedJobView, BoardError> {
        let existing = self
            .repository
            .fetch(id)?
            .ok_or(BoardError::SavedJobNotFound(id))?;
        let job = self.resolve(existing.job_id)?;

        let updated = SavedJob {
            notes: patch.notes.unwrap_or(existing.notes),
            ..existing
        };
        let saved = match self.repository.update(updated) {
            Ok(saved) => saved,
            Err(RepositoryError::NotFound) => return Err(BoardError::SavedJobNotFound(id)),
            Err(other) => return Err(other.into()),
        };

        Ok(SavedJobView { saved, job })
    }

    pub fn unsave(&self, id: SavedJobId) -> Result<(), BoardError> {
        match self.repository.remove(id) {
            Ok(()) => {
                info!(saved_job_id = %id, "saved job removed");
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(BoardError::SavedJobNotFound(id)),
            Err(other) => Err(other.into()),
        }
    }

    /// Returns `false` when the job was not saved.
    pub fn unsave_by_job(&self, job_id: JobId) -> Result<bool, BoardError> {
        let removed = self.repository.remove_by_job(job_id)?;
        if removed {
            info!(%job_id, "saved job removed");
        }
        Ok(removed)
    }

    pub fn is_saved(&self, job_id: JobId) -> Result<bool, BoardError> {
        Ok(self.repository.fetch_by_job(job_id)?.is_some())
    }

    fn resolve(&self, job_id: JobId) -> Result<Job, BoardError> {
        self.catalog
            .job(job_id)
            .cloned()
            .ok_or(BoardError::JobNotFound(job_id))
    }
}
