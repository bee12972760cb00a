use serde::{Deserialize, Serialize};

use super::filter::JobFilter;
use super::sort::SortBy;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-indexed page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn first(per_page: usize) -> Self {
        Self::new(1, per_page)
    }
}

/// One slice of an ordered result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cut `[per_page * (page - 1), per_page * page)` out of `items`.
    pub fn slice(items: Vec<T>, request: PageRequest) -> Self {
        let request = PageRequest::new(request.page, request.per_page);
        let total_items = items.len();
        let total_pages = total_pages(total_items, request.per_page);
        let start = request.per_page.saturating_mul(request.page - 1);
        let items = items
            .into_iter()
            .skip(start)
            .take(request.per_page)
            .collect();

        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total_items,
            total_pages,
        }
    }
}

pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1))
}

/// Browsing state for a client paging through results. Any change to the
/// filter or ordering returns to the first page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    filter: JobFilter,
    sort_by: SortBy,
    page: PageRequest,
    total_pages: usize,
}

impl SearchSession {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: PageRequest::first(per_page),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &JobFilter {
        &self.filter
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn set_filter(&mut self, filter: JobFilter) {
        self.filter = filter;
        self.page.page = 1;
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.page.page = 1;
    }

    /// Record the page count of the latest result so paging can clamp.
    pub fn observe<T>(&mut self, result: &Page<T>) {
        self.total_pages = result.total_pages;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page.page = page.clamp(1, self.total_pages.max(1));
    }

    pub fn next_page(&mut self) {
        self.go_to(self.page.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to(self.page.page.saturating_sub(1));
    }
}
