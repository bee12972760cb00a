use std::collections::HashSet;

use crate::board::domain::Job;

use super::filter::contains_folded;

pub const MAX_SUGGESTIONS: usize = 8;
const MIN_QUERY_CHARS: usize = 2;

/// Distinct titles, company names and tags containing `query`, in the order
/// they are first seen.
pub fn suggest(jobs: &[Job], query: &str) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    let candidates = jobs.iter().flat_map(|job| {
        [job.title.as_str(), job.company.as_str()]
            .into_iter()
            .chain(job.tags.iter().map(String::as_str))
    });

    for candidate in candidates {
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
        if contains_folded(candidate, &needle) && seen.insert(candidate) {
            suggestions.push(candidate.to_string());
        }
    }

    suggestions
}
