use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;
/// Largest offset a Postgres `bigint` accepts.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A 1-based page request, already clamped into its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// `page` is clamped to >= 1 and `per_page` to [1, 100].
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            per_page: per_page.clamp(1, MAX_PER_PAGE as i64) as u64,
        }
    }

    /// Builds a request from raw query values. Values that are not integers
    /// fall back to the defaults instead of failing the request.
    pub fn from_raw(page: Option<&str>, per_page: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);
        let per_page = per_page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PER_PAGE as i64);

        Self::new(page, per_page)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page).min(MAX_OFFSET)
    }

    /// True when the page starts at or after the last of `total` rows, so
    /// there is nothing left to load.
    pub fn is_past_end(&self, total: u64) -> bool {
        self.offset() >= total
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        let page = request.page();
        let total_pages = request.total_pages(total);
        let has_prev = page > 1;
        let has_next = page < total_pages;

        Self {
            items,
            total,
            page,
            per_page: request.per_page(),
            total_pages,
            has_prev,
            has_next,
            prev_page: has_prev.then(|| page - 1),
            next_page: has_next.then(|| page + 1),
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
            has_prev: self.has_prev,
            has_next: self.has_next,
            prev_page: self.prev_page,
            next_page: self.next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_page_and_per_page() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 1);

        let request = PageRequest::new(-4, 500);
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 100);
    }

    #[test]
    fn test_from_raw_falls_back_on_garbage() {
        let request = PageRequest::from_raw(Some("abc"), Some("2.5"));
        assert_eq!(request, PageRequest::default());

        let request = PageRequest::from_raw(Some(" 3 "), Some("15"));
        assert_eq!(request.page(), 3);
        assert_eq!(request.per_page(), 15);
        assert_eq!(request.offset(), 30);
    }

    #[test]
    fn test_offset_stays_within_bigint() {
        let request = PageRequest::new(i64::MAX, 100);
        assert_eq!(request.offset(), i64::MAX as u64);

        let request = PageRequest::new(100_000_000_000_000_000, 100);
        assert_eq!(request.offset(), i64::MAX as u64);
        assert!(request.is_past_end(45));
    }

    #[test]
    fn test_is_past_end() {
        assert!(PageRequest::new(1, 20).is_past_end(0));
        assert!(!PageRequest::new(3, 20).is_past_end(45));
        assert!(PageRequest::new(4, 15).is_past_end(45));
    }

    #[test]
    fn test_total_pages() {
        let request = PageRequest::new(1, 20);
        assert_eq!(request.total_pages(0), 0);
        assert_eq!(request.total_pages(1), 1);
        assert_eq!(request.total_pages(20), 1);
        assert_eq!(request.total_pages(21), 2);
    }

    #[test]
    fn test_page_flags() {
        let first = Page::new(vec![1, 2], 5, PageRequest::new(1, 2));
        assert!(!first.has_prev);
        assert!(first.has_next);
        assert_eq!(first.prev_page, None);
        assert_eq!(first.next_page, Some(2));

        let last = Page::new(vec![5], 5, PageRequest::new(3, 2));
        assert!(last.has_prev);
        assert!(!last.has_next);
        assert_eq!(last.total_pages, 3);
    }

    #[test]
    fn test_page_past_the_end_keeps_totals() {
        let page: Page<u8> = Page::new(Vec::new(), 7, PageRequest::new(9, 5));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next);
    }

    #[test]
    fn test_slices_cover_total_exactly() {
        for total in 0u64..60 {
            for per_page in 1i64..12 {
                let mut seen = 0;
                let pages = PageRequest::new(1, per_page).total_pages(total);
                for page in 1..=pages {
                    let request = PageRequest::new(page as i64, per_page);
                    let remaining = total.saturating_sub(request.offset());
                    let size = remaining.min(request.limit());
                    assert!(size <= per_page as u64);
                    seen += size;
                }
                assert_eq!(seen, total);
            }
        }
    }

    #[test]
    fn test_map_preserves_metadata() {
        let page = Page::new(vec![1, 2, 3], 9, PageRequest::new(2, 3)).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }
}
