//! Job query engine: predicate filtering, ordering, paging and suggestions.

mod filter;
mod page;
mod sort;
mod suggest;

pub use filter::{DatePosted, JobFilter};
pub use page::{total_pages, Page, PageRequest, SearchSession, DEFAULT_PAGE_SIZE};
pub use sort::{sort_jobs, SortBy};
pub use suggest::{suggest, MAX_SUGGESTIONS};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Job;

pub const DEFAULT_POPULAR_LIMIT: usize = 6;
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Jobs satisfying every populated option of `filter`, in collection order.
pub fn filter_jobs(jobs: &[Job], filter: &JobFilter, now: DateTime<Utc>) -> Vec<Job> {
    jobs.iter()
        .filter(|job| filter.matches(job, now))
        .cloned()
        .collect()
}

/// Filter, order and page in one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobQuery {
    pub filter: JobFilter,
    pub sort_by: SortBy,
    pub page: PageRequest,
}

impl JobQuery {
    pub fn run(&self, jobs: &[Job], now: DateTime<Utc>) -> Page<Job> {
        let mut matched = filter_jobs(jobs, &self.filter, now);
        sort_jobs(&mut matched, self.sort_by);
        Page::slice(matched, self.page)
    }
}

/// Highest-paying postings first.
pub fn popular(jobs: &[Job], limit: usize) -> Vec<Job> {
    top_by(jobs, SortBy::Salary, limit)
}

/// Newest postings first.
pub fn recent(jobs: &[Job], limit: usize) -> Vec<Job> {
    top_by(jobs, SortBy::Date, limit)
}

fn top_by(jobs: &[Job], sort_by: SortBy, limit: usize) -> Vec<Job> {
    let mut ordered = jobs.to_vec();
    sort_jobs(&mut ordered, sort_by);
    ordered.truncate(limit);
    ordered
}
