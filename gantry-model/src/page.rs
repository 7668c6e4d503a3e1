//! Pagination envelope shared by list endpoints.

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_NO: u64 = 1;
const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 500;

/// Query-side paging parameters with service-wide defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageQuery {
    pub page_no: u64,
    pub page_size: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_no: DEFAULT_PAGE_NO,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    /// Creates paging parameters, normalizing out-of-range values
    /// (page numbers start at 1; size is capped).
    #[must_use]
    pub fn new(page_no: u64, page_size: u64) -> Self {
        Self {
            page_no: page_no.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Row offset for the underlying query.
    ///
    /// Page numbers start at 1; a zero `page_no` arriving off the wire is
    /// treated as the first page rather than underflowing.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page_no.saturating_sub(1) * self.page_size
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_no: u64,
    pub page_size: u64,
    pub total_count: u64,
}

impl<T> Page<T> {
    /// Assembles a page from query results.
    #[must_use]
    pub fn new(items: Vec<T>, query: PageQuery, total_count: u64) -> Self {
        Self {
            items,
            page_no: query.page_no,
            page_size: query.page_size,
            total_count,
        }
    }

    /// Total number of pages at this page size.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    /// Maps the item type, preserving the paging envelope.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_no: self.page_no,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}
