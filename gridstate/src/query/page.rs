//! Page-window computation for table pagination.

use crate::model::Row;

/// Default page size when none is configured or the configured one is
/// invalid.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state for one table.
///
/// Pages are 1-based. `total_items` is a derived value recorded by the last
/// [`paginate`](PageState::paginate) call, for pagination-control
/// rendering; it is not an independently sourced count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    rows_per_page: usize,
    total_items: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            rows_per_page: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl PageState {
    /// Creates a page state, normalizing out-of-range inputs.
    ///
    /// A page below 1 becomes 1; a size below 1 becomes
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(current_page: usize, rows_per_page: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            rows_per_page: if rows_per_page < 1 {
                DEFAULT_PAGE_SIZE
            } else {
                rows_per_page
            },
            total_items: 0,
        }
    }

    /// Returns the current page (1-based).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the page size.
    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Returns the total item count recorded by the last pagination.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns the page count for the last pagination, at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.rows_per_page).max(1)
    }

    /// Sets the current page.
    ///
    /// Pages below 1 correct to 1; an overshoot past the last page is left
    /// for [`paginate`](PageState::paginate) to self-correct.
    pub fn handle_page_change(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Sets the page size and resets to page 1.
    ///
    /// Sizes below 1 correct to [`DEFAULT_PAGE_SIZE`].
    pub fn handle_page_size_change(&mut self, size: usize) {
        self.rows_per_page = if size < 1 { DEFAULT_PAGE_SIZE } else { size };
        self.current_page = 1;
    }

    /// Returns the visible page window of `rows`.
    ///
    /// An empty collection yields one (empty) page. When the current page
    /// exceeds the page count it resets to 1 before the window is cut, so
    /// a shrunken collection never strands the view on a page past the
    /// end. Records the collection length as `total_items`.
    pub fn paginate(&mut self, rows: Vec<Row>) -> Vec<Row> {
        self.total_items = rows.len();

        let total_pages = rows.len().div_ceil(self.rows_per_page).max(1);
        if self.current_page > total_pages {
            self.current_page = 1;
        }

        let start = (self.current_page - 1) * self.rows_per_page;
        rows.into_iter().skip(start).take(self.rows_per_page).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (0..n).map(|i| Row::new().set("i", i as i64)).collect()
    }

    fn indices(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r.get_i64("i").unwrap().unwrap()).collect()
    }

    #[test]
    fn test_empty_collection_is_one_empty_page() {
        let mut pager = PageState::default();
        let window = pager.paginate(Vec::new());
        assert!(window.is_empty());
        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.total_items(), 0);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_window_slices_current_page() {
        let mut pager = PageState::new(2, 3);
        assert_eq!(indices(&pager.paginate(rows(8))), [3, 4, 5]);
        assert_eq!(pager.total_items(), 8);
        assert_eq!(pager.total_pages(), 3);
    }

    #[test]
    fn test_last_page_window_is_clamped() {
        let mut pager = PageState::new(3, 3);
        assert_eq!(indices(&pager.paginate(rows(8))), [6, 7]);
    }

    #[test]
    fn test_out_of_range_page_resets_to_first() {
        let mut pager = PageState::new(5, 2);
        let window = pager.paginate(rows(3));
        assert_eq!(pager.current_page(), 1);
        assert_eq!(indices(&window), [0, 1]);
    }

    #[test]
    fn test_page_change_clamps_below_one() {
        let mut pager = PageState::default();
        pager.handle_page_change(0);
        assert_eq!(pager.current_page(), 1);
        pager.handle_page_change(7);
        assert_eq!(pager.current_page(), 7);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pager = PageState::new(4, 5);
        pager.handle_page_size_change(25);
        assert_eq!(pager.rows_per_page(), 25);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_invalid_page_size_falls_back_to_default() {
        let mut pager = PageState::default();
        pager.handle_page_size_change(0);
        assert_eq!(pager.rows_per_page(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageState::new(1, 0).rows_per_page(), DEFAULT_PAGE_SIZE);
    }
}
