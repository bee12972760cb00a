use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

use crate::board::domain::Job;

/// Ordering applied to search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest posting first.
    #[default]
    Date,
    /// Highest salary ceiling first.
    Salary,
    Company,
    Title,
}

impl SortBy {
    /// Unknown keys fall back to [`SortBy::Date`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "salary" => Self::Salary,
            "company" => Self::Company,
            "title" => Self::Title,
            _ => Self::Date,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Most Recent",
            Self::Salary => "Highest Salary",
            Self::Company => "Company A-Z",
            Self::Title => "Job Title A-Z",
        }
    }

    fn compare(self, a: &Job, b: &Job) -> Ordering {
        match self {
            Self::Date => b.posted_date.cmp(&a.posted_date),
            Self::Salary => b.salary.max.cmp(&a.salary.max),
            Self::Company => collate(&a.company, &b.company),
            Self::Title => collate(&a.title, &b.title),
        }
    }
}

impl<'de> Deserialize<'de> for SortBy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Stable sort; equal keys keep their collection order.
pub fn sort_jobs(jobs: &mut [Job], sort_by: SortBy) {
    jobs.sort_by(|a, b| sort_by.compare(a, b));
}

/// Case-folded comparison with the raw text as tiebreaker, close to a
/// locale compare for the Latin text the board carries.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
