use super::domain::{CompanyId, JobId, SavedJobId};
use super::saved::RepositoryError;

/// Error raised by the job board operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("job with id {0} not found")]
    JobNotFound(JobId),
    #[error("company with id {0} not found")]
    CompanyNotFound(CompanyId),
    #[error("company \"{0}\" not found")]
    CompanyNameNotFound(String),
    #[error("saved job with id {0} not found")]
    SavedJobNotFound(SavedJobId),
    #[error("job {0} is already saved")]
    AlreadySaved(JobId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl BoardError {
    /// Duplicate saves are informational rather than failures.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            Self::AlreadySaved(_) | Self::Repository(RepositoryError::Conflict(_))
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::JobNotFound(_)
                | Self::CompanyNotFound(_)
                | Self::CompanyNameNotFound(_)
                | Self::SavedJobNotFound(_)
                | Self::Repository(RepositoryError::NotFound)
        )
    }
}
