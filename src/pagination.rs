//! Page windowing over ranked listing collections.

/// Listings shown per page unless the caller asks otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// A page window, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of items skipped before this page starts.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Total number of pages, never less than one.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// Previous and next page numbers around `page`, where they exist.
pub fn page_window(page: usize, total_pages: usize) -> (Option<usize>, Option<usize>) {
    let page = page.max(1);
    let prev = (page > 1).then(|| page - 1);
    let next = (page < total_pages).then(|| page + 1);
    (prev, next)
}
