//! Search and carousel paging over the service catalog.
//!
//! [`ServiceBrowser`] holds the three pieces of per-session UI state (live
//! query, show-all flag, page cursor) and derives everything the services
//! section renders. All derivations are pure reads; the mutating operations
//! are the handful of user-facing actions.

use crate::catalog::Catalog;

/// Cards per carousel page.
pub const PAGE_SIZE: usize = 3;

/// Per-session browsing state over a fixed [`Catalog`].
///
/// Defaults to an empty query, collapsed view, page zero. Owned by the one
/// component instance that created it; there are no globals here.
#[derive(Debug, Clone)]
pub struct ServiceBrowser {
    catalog: Catalog,
    query: String,
    show_all: bool,
    page: usize,
}

impl ServiceBrowser {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            show_all: false,
            page: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Zero-based page cursor. May point past the end after the visible set
    /// shrinks; reads clamp, they never panic.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the live query and rewind to the first page. A stale cursor
    /// into a freshly filtered, possibly shorter, set is never shown.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    /// Flip between show-first-three and show-everything. Keeps the page
    /// cursor where it is; an out-of-range cursor reads as an empty page
    /// until the next query change or wrap-around.
    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Catalog entries whose lowercase form contains the lowercase query as
    /// a substring, in catalog order. The empty query matches everything.
    pub fn filtered(&self) -> Vec<&str> {
        let needle = self.query.to_lowercase();
        self.catalog
            .services()
            .iter()
            .map(String::as_str)
            .filter(|service| service.to_lowercase().contains(&needle))
            .collect()
    }

    /// The filtered set, truncated to the first [`PAGE_SIZE`] entries unless
    /// show-all is on.
    pub fn visible(&self) -> Vec<&str> {
        let filtered = self.filtered();
        if self.show_all {
            filtered
        } else {
            filtered.into_iter().take(PAGE_SIZE).collect()
        }
    }

    /// Number of carousel pages over the visible set; zero when nothing
    /// matches.
    pub fn page_count(&self) -> usize {
        self.visible().len().div_ceil(PAGE_SIZE)
    }

    /// The visible slice at the current cursor, one page wide. Empty when
    /// the cursor is out of range.
    pub fn current_page(&self) -> Vec<&str> {
        self.current_window(1)
    }

    /// Like [`current_page`](Self::current_page) but `rows` pages wide,
    /// starting at the current cursor. The landing page renders three rows
    /// at once in show-all mode while the paging arithmetic stays in
    /// [`PAGE_SIZE`] units.
    pub fn current_window(&self, rows: usize) -> Vec<&str> {
        let visible = self.visible();
        let start = self.page * PAGE_SIZE;
        if start >= visible.len() {
            return Vec::new();
        }
        let end = (start + rows * PAGE_SIZE).min(visible.len());
        visible[start..end].to_vec()
    }

    /// Advance one page, wrapping. No-op while there are no pages.
    pub fn next_page(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        self.page = (self.page + 1) % pages;
    }

    /// Retreat one page, wrapping. No-op while there are no pages.
    pub fn prev_page(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        self.page = (self.page + pages - 1) % pages;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_browser() -> ServiceBrowser {
        ServiceBrowser::new(Catalog::builtin())
    }

    #[test]
    fn empty_query_matches_the_whole_catalog() {
        let browser = builtin_browser();
        assert_eq!(browser.filtered().len(), 12);
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_catalog_order() {
        let mut browser = builtin_browser();
        browser.set_query("PROPERTY");
        assert_eq!(
            browser.filtered(),
            [
                "Industrial property management",
                "Property inspections",
                "Property investment management",
                "Property maintenance",
                "Property management",
                "Property sales",
                "Rental property management",
            ]
        );
    }

    #[test]
    fn collapsed_view_shows_at_most_one_page() {
        let mut browser = builtin_browser();
        browser.set_query("property");
        assert_eq!(
            browser.visible(),
            [
                "Industrial property management",
                "Property inspections",
                "Property investment management",
            ]
        );
        assert_eq!(browser.page_count(), 1);
    }

    #[test]
    fn set_query_rewinds_the_cursor() {
        let mut browser = builtin_browser();
        browser.toggle_show_all();
        browser.next_page();
        browser.next_page();
        assert_eq!(browser.page(), 2);

        browser.set_query("rent");
        assert_eq!(browser.page(), 0);
    }

    #[test]
    fn show_all_pages_the_full_catalog() {
        let mut browser = builtin_browser();
        browser.toggle_show_all();
        assert_eq!(browser.page_count(), 4);
        assert_eq!(browser.current_page().len(), 3);
    }

    #[test]
    fn seven_matches_page_as_three_three_one() {
        let mut browser = builtin_browser();
        browser.toggle_show_all();
        browser.set_query("property");
        assert_eq!(browser.page_count(), 3);

        assert_eq!(browser.current_page().len(), 3);
        browser.next_page();
        assert_eq!(browser.current_page().len(), 3);
        browser.next_page();
        assert_eq!(browser.current_page(), ["Rental property management"]);
    }

    #[test]
    fn next_then_prev_restores_the_cursor() {
        let mut browser = builtin_browser();
        browser.toggle_show_all();
        browser.next_page();
        let before = browser.page();
        browser.next_page();
        browser.prev_page();
        assert_eq!(browser.page(), before);
    }

    #[test]
    fn paging_wraps_in_both_directions() {
        let mut browser = builtin_browser();
        browser.toggle_show_all();
        browser.prev_page();
        assert_eq!(browser.page(), 3);
        browser.next_page();
        assert_eq!(browser.page(), 0);
    }

    #[test]
    fn unmatched_query_is_empty_and_paging_is_a_no_op() {
        let mut browser = builtin_browser();
        browser.set_query("zzz");
        assert!(browser.filtered().is_empty());
        assert_eq!(browser.page_count(), 0);
        assert!(browser.current_page().is_empty());

        browser.next_page();
        browser.prev_page();
        assert_eq!(browser.page(), 0);
    }

    #[test]
    fn collapsing_show_all_leaves_cursor_to_clamped_reads() {
        let mut browser = builtin_browser();
        browser.toggle_show_all();
        browser.next_page();
        browser.next_page();
        browser.next_page();
        assert_eq!(browser.page(), 3);

        // Back to first-three mode with the cursor past the end: reads are
        // empty, the next wrap brings the cursor home.
        browser.toggle_show_all();
        assert_eq!(browser.page_count(), 1);
        assert!(browser.current_page().is_empty());
        browser.next_page();
        assert_eq!(browser.page(), 0);
        assert_eq!(browser.current_page().len(), 3);
    }

    #[test]
    fn show_all_window_is_three_rows_wide() {
        let mut browser = builtin_browser();
        browser.toggle_show_all();
        assert_eq!(browser.current_window(3).len(), 9);

        browser.next_page();
        assert_eq!(browser.current_window(3).len(), 9);

        // One-row window is exactly the current page.
        assert_eq!(browser.current_window(1), browser.current_page());
    }
}
