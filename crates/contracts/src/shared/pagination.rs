//! Pagination math for server- and client-paginated lists.
//!
//! Pages are 1-based. The controller never fetches anything: it only answers
//! whether a navigation request is a real change and hands the caller a
//! [`PageChange`] to act on.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Always at least 1, even for an empty collection.
    pub total_pages: usize,
    /// First visible index, clamped to `total`.
    pub start: usize,
    /// One past the last visible index, clamped to `total`.
    pub end: usize,
}

impl PageBounds {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Page size 0 counts as 1 and page 0 as page 1; nothing else is validated.
pub fn compute_bounds(page: usize, page_size: usize, total: usize) -> PageBounds {
    let size = page_size.max(1);
    let page = page.max(1);
    let total_pages = total.div_ceil(size).max(1);
    let start = (page - 1).saturating_mul(size).min(total);
    let end = page.saturating_mul(size).min(total);

    PageBounds {
        total_pages,
        start,
        end,
    }
}

/// Намерение сменить страницу или размер страницы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageChange {
    Page(usize),
    PageSize(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            total: 0,
        }
    }

    pub fn bounds(&self) -> PageBounds {
        compute_bounds(self.page, self.page_size, self.total)
    }

    pub fn total_pages(&self) -> usize {
        self.bounds().total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// `None` when `target` is the current page or outside `[1, total_pages]`.
    pub fn request_page(&self, target: usize) -> Option<PageChange> {
        if target == self.page || target < 1 || target > self.total_pages() {
            return None;
        }
        Some(PageChange::Page(target))
    }

    /// `None` when `size` equals the current page size. The current page is
    /// left alone; [`Pagination::apply`] clamps it afterwards.
    pub fn request_page_size(&self, size: usize) -> Option<PageChange> {
        if size == self.page_size {
            return None;
        }
        Some(PageChange::PageSize(size))
    }

    pub fn apply(self, change: PageChange) -> Self {
        match change {
            PageChange::Page(page) => Self { page, ..self },
            PageChange::PageSize(page_size) => Self { page_size, ..self }.clamped(),
        }
    }

    /// Updates the total (e.g. after a fetch) and pulls the page back into range.
    pub fn with_total(self, total: usize) -> Self {
        Self { total, ..self }.clamped()
    }

    pub fn clamped(self) -> Self {
        let total_pages = self.total_pages();
        Self {
            page: self.page.clamp(1, total_pages),
            ..self
        }
    }

    /// Client-side window over an already loaded collection.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let bounds = compute_bounds(self.page, self.page_size, items.len());
        &items[bounds.start..bounds.end]
    }

    /// "2 / 3 (45)"
    pub fn label(&self) -> String {
        format!("{} / {} ({})", self.page, self.total_pages(), self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bounds() {
        let b = compute_bounds(1, 20, 45);
        assert_eq!(b.total_pages, 3);
        assert_eq!((b.start, b.end), (0, 20));

        let b = compute_bounds(3, 20, 45);
        assert_eq!((b.start, b.end), (40, 45));
        assert_eq!(b.len(), 5);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let b = compute_bounds(1, 20, 0);
        assert_eq!(b.total_pages, 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        let b = compute_bounds(0, 0, 3);
        assert_eq!(b.total_pages, 3);
        assert_eq!((b.start, b.end), (0, 1));

        let b = compute_bounds(10, 20, 45);
        assert_eq!((b.start, b.end), (45, 45));
    }

    #[test]
    fn test_request_page() {
        let p = Pagination {
            page: 1,
            page_size: 20,
            total: 45,
        };
        assert_eq!(p.request_page(1), None);
        assert_eq!(p.request_page(5), None);
        assert_eq!(p.request_page(0), None);
        assert_eq!(p.request_page(3), Some(PageChange::Page(3)));
    }

    #[test]
    fn test_request_page_size_keeps_page_until_clamped() {
        let p = Pagination {
            page: 3,
            page_size: 20,
            total: 45,
        };
        assert_eq!(p.request_page_size(20), None);
        let change = p.request_page_size(50).unwrap();
        assert_eq!(change, PageChange::PageSize(50));

        let next = p.apply(change);
        assert_eq!(next.page_size, 50);
        assert_eq!(next.page, 1);

        let next = p.apply(PageChange::PageSize(10));
        assert_eq!(next.page, 3);
    }

    #[test]
    fn test_with_total_clamps() {
        let p = Pagination {
            page: 4,
            page_size: 10,
            total: 40,
        };
        assert_eq!(p.with_total(15).page, 2);
        assert_eq!(p.with_total(0).page, 1);
    }

    #[test]
    fn test_slice_and_label() {
        let items: Vec<u32> = (0..45).collect();
        let p = Pagination {
            page: 3,
            page_size: 20,
            total: 45,
        };
        assert_eq!(p.slice(&items), &items[40..45]);
        assert_eq!(p.label(), "3 / 3 (45)");
        assert!(p.has_prev());
        assert!(!p.has_next());
    }
}
