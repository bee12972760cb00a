use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::board::domain::{ExperienceLevel, Job, JobType};

/// Recognised search options. Every populated field narrows the result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilter {
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub job_type: Vec<JobType>,
    pub experience_level: Vec<ExperienceLevel>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub remote: Option<bool>,
    pub date_posted: Option<DatePosted>,
}

impl JobFilter {
    /// True when `job` satisfies every populated option as of `now`.
    pub fn matches(&self, job: &Job, now: DateTime<Utc>) -> bool {
        self.matches_keywords(job)
            && self.matches_location(job)
            && self.matches_job_type(job)
            && self.matches_experience(job)
            && self.matches_salary(job)
            && self.remote.map_or(true, |remote| job.remote == remote)
            && self.matches_date_posted(job, now)
    }

    /// Number of narrowing options set, as shown on the filter badge.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if non_empty(&self.location).is_some() {
            count += 1;
        }
        count += self.job_type.len();
        count += self.experience_level.len();
        if self.salary_min.is_some() || self.salary_max.is_some() {
            count += 1;
        }
        if self.remote.is_some() {
            count += 1;
        }
        if self.date_posted.is_some() {
            count += 1;
        }
        count
    }

    /// Drop every option except the keyword search.
    pub fn clear_keeping_keywords(&mut self) {
        *self = Self {
            keywords: self.keywords.take(),
            ..Self::default()
        };
    }

    fn matches_keywords(&self, job: &Job) -> bool {
        let Some(needle) = non_empty(&self.keywords).map(str::to_lowercase) else {
            return true;
        };

        contains_folded(&job.title, &needle)
            || contains_folded(&job.company, &needle)
            || contains_folded(&job.description, &needle)
            || job.tags.iter().any(|tag| contains_folded(tag, &needle))
    }

    fn matches_location(&self, job: &Job) -> bool {
        match non_empty(&self.location) {
            Some(location) => contains_folded(&job.location, &location.to_lowercase()),
            None => true,
        }
    }

    fn matches_job_type(&self, job: &Job) -> bool {
        self.job_type.is_empty() || self.job_type.contains(&job.job_type)
    }

    fn matches_experience(&self, job: &Job) -> bool {
        self.experience_level.is_empty() || self.experience_level.contains(&job.experience_level)
    }

    // Overlap test: a bound only needs to touch the posted range.
    fn matches_salary(&self, job: &Job) -> bool {
        let above_floor = self
            .salary_min
            .filter(|&floor| floor > 0)
            .map_or(true, |floor| job.salary.max >= floor);
        let below_ceiling = self
            .salary_max
            .filter(|&ceiling| ceiling > 0)
            .map_or(true, |ceiling| job.salary.min <= ceiling);
        above_floor && below_ceiling
    }

    fn matches_date_posted(&self, job: &Job, now: DateTime<Utc>) -> bool {
        match self.date_posted.and_then(|window| window.cutoff(now)) {
            Some(cutoff) => job.posted_date >= cutoff,
            None => true,
        }
    }
}

/// Posting-age window. Unrecognised inputs become [`DatePosted::AnyTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePosted {
    Last24Hours,
    Last3Days,
    Last7Days,
    Last30Days,
    AnyTime,
}

impl DatePosted {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "24h" => Self::Last24Hours,
            "3d" => Self::Last3Days,
            "7d" => Self::Last7Days,
            "30d" => Self::Last30Days,
            _ => Self::AnyTime,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Last24Hours => "24h",
            Self::Last3Days => "3d",
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::AnyTime => "any",
        }
    }

    /// Earliest accepted posting time, or `None` when unrestricted.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            Self::Last24Hours => 1,
            Self::Last3Days => 3,
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::AnyTime => return None,
        };
        now.checked_sub_signed(Duration::days(days))
    }
}

impl Serialize for DatePosted {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DatePosted {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}
