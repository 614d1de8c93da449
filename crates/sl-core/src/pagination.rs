//! Page-number pagination
//!
//! Pagination sits downstream of sorting: it slices the already ordered
//! collection. The page is chosen by a query parameter (`?page=3`), which is
//! why sort links can be configured to drop it.

use serde::Serialize;

use crate::error::PageError;

/// Keyword accepted in place of a number to select the final page
pub const LAST_PAGE: &str = "last";

/// Splits `count` items into pages of `per_page`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: usize,
    per_page: usize,
}

impl Paginator {
    pub fn new(count: usize, per_page: usize) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of pages; an empty collection still has one (empty) page
    pub fn num_pages(&self) -> usize {
        self.count.div_ceil(self.per_page).max(1)
    }

    /// Resolve the raw page parameter to a 1-indexed page number.
    ///
    /// A missing parameter selects page 1; `last` selects the final page.
    pub fn validate_number(&self, raw: Option<&str>) -> Result<usize, PageError> {
        let raw = match raw {
            None => return Ok(1),
            Some(raw) => raw.trim(),
        };
        if raw == LAST_PAGE {
            return Ok(self.num_pages());
        }
        let number: usize = raw
            .parse()
            .map_err(|_| PageError::NotANumber(raw.to_string()))?;
        if number == 0 || number > self.num_pages() {
            return Err(PageError::Empty {
                page: number,
                last: self.num_pages(),
            });
        }
        Ok(number)
    }

    /// Build page metadata for a validated number
    pub fn page(&self, number: usize) -> Page {
        let offset = (number - 1) * self.per_page;
        let limit = self.per_page.min(self.count.saturating_sub(offset));
        Page {
            number,
            num_pages: self.num_pages(),
            per_page: self.per_page,
            count: self.count,
            offset,
            limit,
        }
    }
}

/// Metadata for one page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-indexed page number
    pub number: usize,
    pub num_pages: usize,
    pub per_page: usize,
    /// Total items across all pages
    pub count: usize,
    #[serde(skip)]
    pub offset: usize,
    #[serde(skip)]
    pub limit: usize,
}

impl Page {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// A window covering a whole unpaginated collection
    pub fn unpaginated(count: usize) -> Self {
        Self {
            number: 1,
            num_pages: 1,
            per_page: count,
            count,
            offset: 0,
            limit: count,
        }
    }

    /// 1-based index of the first item on this page (0 for an empty page)
    pub fn start_index(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.offset + 1
        }
    }

    /// 1-based index of the last item on this page
    pub fn end_index(&self) -> usize {
        self.offset + self.limit
    }
}
