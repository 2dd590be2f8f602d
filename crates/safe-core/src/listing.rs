//! Listing queries and the page envelope.
//!
//! Pagination peeks one record past the page: the store is asked for
//! `page_size + 1` rows and the extra row, if any, only sets `has_next`.

use serde::Serialize;

/// Records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A normalized listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    search: Option<String>,
    page: u32,
}

impl ListQuery {
    /// Build a query from raw request parameters.
    ///
    /// A blank search string means "no filter". A missing, unparsable, or
    /// sub-1 page number is clamped to page 1.
    #[must_use]
    pub fn from_params(search: Option<&str>, page: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .map_or(1, |p| u32::try_from(p.max(1)).unwrap_or(u32::MAX));
        Self { search, page }
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// 1-based page number. Never 0.
    #[must_use]
    pub const fn page(&self) -> u32 {
        if self.page == 0 { 1 } else { self.page }
    }

    /// Row offset of the first record on this page.
    #[must_use]
    pub const fn offset(&self, page_size: u32) -> u64 {
        (self.page() as u64 - 1).saturating_mul(page_size as u64)
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Trim a peeked result set (up to `page_size + 1` rows) down to a page.
    #[must_use]
    pub fn from_peeked(mut fetched: Vec<T>, page: u32, page_size: u32) -> Self {
        let limit = page_size as usize;
        let has_next = fetched.len() > limit;
        fetched.truncate(limit);
        Self {
            items: fetched,
            page,
            has_next,
        }
    }

    /// The degraded page shown when the store is unavailable.
    #[must_use]
    pub const fn empty(page: u32) -> Self {
        Self {
            items: Vec::new(),
            page,
            has_next: false,
        }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }
}
