//! Company directory annotated with open-position counts.

use std::sync::Arc;

use serde::Serialize;

use super::catalog::Catalog;
use super::domain::{Company, CompanyId, Job};
use super::error::BoardError;

/// Company record plus the number of postings attributed to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyView {
    #[serde(flatten)]
    pub company: Company,
    pub open_positions: usize,
}

/// Joins companies to jobs by exact, case-sensitive name equality.
pub struct CompanyDirectory {
    catalog: Arc<Catalog>,
}

impl CompanyDirectory {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn list(&self) -> Vec<CompanyView> {
        self.catalog
            .companies()
            .iter()
            .map(|company| self.annotate(company))
            .collect()
    }

    pub fn get_by_id(&self, id: CompanyId) -> Result<CompanyView, BoardError> {
        self.catalog
            .company(id)
            .map(|company| self.annotate(company))
            .ok_or(BoardError::CompanyNotFound(id))
    }

    /// Case-insensitive exact name match.
    pub fn get_by_name(&self, name: &str) -> Result<CompanyView, BoardError> {
        let wanted = name.to_lowercase();
        self.catalog
            .companies()
            .iter()
            .find(|company| company.name.to_lowercase() == wanted)
            .map(|company| self.annotate(company))
            .ok_or_else(|| BoardError::CompanyNameNotFound(name.to_string()))
    }

    /// Substring search over name, location, description and industry tags.
    /// A blank query lists everything.
    pub fn search(&self, query: &str) -> Vec<CompanyView> {
        if query.trim().is_empty() {
            return self.list();
        }

        let needle = query.to_lowercase();
        let hit = |text: &str| text.to_lowercase().contains(&needle);
        self.catalog
            .companies()
            .iter()
            .filter(|company| {
                hit(&company.name)
                    || hit(&company.location)
                    || hit(&company.description)
                    || company.industry.iter().any(|industry| hit(industry))
            })
            .map(|company| self.annotate(company))
            .collect()
    }

    pub fn jobs_for(&self, company: &Company) -> Vec<Job> {
        self.catalog
            .jobs()
            .iter()
            .filter(|job| job.company == company.name)
            .cloned()
            .collect()
    }

    pub fn open_positions(&self, company: &Company) -> usize {
        self.catalog
            .jobs()
            .iter()
            .filter(|job| job.company == company.name)
            .count()
    }

    fn annotate(&self, company: &Company) -> CompanyView {
        CompanyView {
            open_positions: self.open_positions(company),
            company: company.clone(),
        }
    }
}
