use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::domain::{Job, JobId, SavedJob, SavedJobId};

/// Saved-job record joined with the posting it points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJobView {
    #[serde(flatten)]
    pub saved: SavedJob,
    pub job: Job,
}

/// Fields a caller may change on an existing bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedJobPatch {
    #[serde(default)]
    pub notes: Option<String>,
}

/// Storage abstraction for bookmarks. `create` must check uniqueness and
/// assign the id under the same critical section.
pub trait SavedJobRepository: Send + Sync {
    fn all(&self) -> Result<Vec<SavedJob>, RepositoryError>;
    fn fetch(&self, id: SavedJobId) -> Result<Option<SavedJob>, RepositoryError>;
    fn fetch_by_job(&self, job_id: JobId) -> Result<Option<SavedJob>, RepositoryError>;
    fn create(
        &self,
        job_id: JobId,
        notes: String,
        saved_at: DateTime<Utc>,
    ) -> Result<SavedJob, RepositoryError>;
    fn update(&self, record: SavedJob) -> Result<SavedJob, RepositoryError>;
    fn remove(&self, id: SavedJobId) -> Result<(), RepositoryError>;
    fn remove_by_job(&self, job_id: JobId) -> Result<bool, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("job {0} is already saved")]
    Conflict(JobId),
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("no saved job ids left after {0}")]
    IdSpaceExhausted(SavedJobId),
}

/// Process-lifetime bookmark store guarded by a single lock.
#[derive(Debug, Default, Clone)]
pub struct InMemorySavedJobRepository {
    records: Arc<Mutex<Vec<SavedJob>>>,
}

impl InMemorySavedJobRepository {
    pub fn with_records(records: impl IntoIterator<Item = SavedJob>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records.into_iter().collect())),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SavedJobRepository for InMemorySavedJobRepository {
    fn all(&self) -> Result<Vec<SavedJob>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }

    fn fetch(&self, id: SavedJobId) -> Result<Option<SavedJob>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| record.id == id).cloned())
    }

    fn fetch_by_job(&self, job_id: JobId) -> Result<Option<SavedJob>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| record.job_id == job_id).cloned())
    }

    fn create(
        &self,
        job_id: JobId,
        notes: String,
        saved_at: DateTime<Utc>,
    ) -> Result<SavedJob, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|record| record.job_id == job_id) {
            return Err(RepositoryError::Conflict(job_id));
        }

        let highest = guard.iter().map(|record| record.id.0).max().unwrap_or(0);
        let next_id = highest
            .checked_add(1)
            .ok_or(RepositoryError::IdSpaceExhausted(SavedJobId(highest)))?;
        let record = SavedJob {
            id: SavedJobId(next_id),
            job_id,
            saved_date: saved_at,
            notes,
        };
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: SavedJob) -> Result<SavedJob, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = record.clone();
        Ok(record)
    }

    fn remove(&self, id: SavedJobId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let position = guard
            .iter()
            .position(|record| record.id == id)
            .ok_or(RepositoryError::NotFound)?;
        guard.remove(position);
        Ok(())
    }

    fn remove_by_job(&self, job_id: JobId) -> Result<bool, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter().position(|record| record.job_id == job_id) {
            Some(position) => {
                guard.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
