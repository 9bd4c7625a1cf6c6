use serde::{Deserialize, Serialize};

/// Rows per page on the back-office listing screens.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One-based page selection as used by the listing screens
///
/// # Example
/// ```
/// use trade_desk_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(10, 1);
/// assert_eq!(first.offset(), 0);
/// assert_eq!(PageRequest::new(10, 3).offset(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of rows on a page
    pub page_size: usize,
    /// Page number, starting at 1
    pub page: usize,
}

impl PageRequest {
    /// Page numbers below 1 are treated as the first page.
    pub fn new(page_size: usize, page: usize) -> Self {
        Self {
            page_size,
            page: page.max(1),
        }
    }

    /// Number of rows skipped before this page, saturating for absurd page numbers
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 1)
    }
}

/// A page of listing rows plus what the pager needs to render
///
/// # Example
/// ```
/// use trade_desk_db::repository::pagination::{Page, PageRequest};
///
/// let page = Page::paginate((1..=25).collect::<Vec<_>>(), PageRequest::new(10, 3));
/// assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
/// assert_eq!(page.total_pages(), 3);
/// assert!(page.is_last_page());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The rows on this page
    pub items: Vec<T>,
    /// Number of rows matching the listing filters, across all pages
    pub total: usize,
    /// Maximum number of rows per page
    pub page_size: usize,
    /// This page's number, starting at 1
    pub page: usize,
}

impl<T> Page<T> {
    /// Cuts the requested page out of the full filtered listing.
    pub fn paginate(rows: Vec<T>, request: PageRequest) -> Self {
        let total = rows.len();
        let items = rows
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect();
        Self {
            items,
            total,
            page_size: request.page_size,
            page: request.page,
        }
    }

    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        PageRequest::new(self.page_size, self.page)
            .offset()
            .saturating_add(self.items.len())
            < self.total
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Check if this is the last page
    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }

    /// One-based position of the first row on this page, 0 for an empty page
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            PageRequest::new(self.page_size, self.page).offset().saturating_add(1)
        }
    }
}
