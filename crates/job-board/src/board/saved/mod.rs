mod manager;
mod repository;

pub use manager::SavedJobManager;
pub use repository::{
    InMemorySavedJobRepository, RepositoryError, SavedJobPatch, SavedJobRepository, SavedJobView,
};
