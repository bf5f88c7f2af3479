//! Table facade tying search, sort, and pagination together.

use crate::config::TableConfig;
use crate::model::Row;
use crate::query::PageState;
use crate::query::SearchState;
use crate::query::SortMode;
use crate::query::SortState;
use crate::urlstate::TableQuery;

/// The full interaction state of one table.
///
/// Owns the search, sort, and pagination managers and runs the
/// filter → sort → paginate pipeline over a row collection. All derived
/// values (settled query, total items, page window) are recomputed
/// synchronously by [`visible`](TableState::visible) before they are read.
///
/// The state binds to URL query parameters through [`TableQuery`]:
/// [`query`](TableState::query) snapshots it for the address bar,
/// [`from_query`](TableState::from_query) restores it from a shared link.
///
/// # Example
///
/// ```
/// use gridstate::config::TableConfig;
/// use gridstate::model::Row;
/// use gridstate::table::TableState;
/// use gridstate::urlstate::TableQuery;
///
/// let config = TableConfig::new()
///     .sortable("name")
///     .searchable("name");
/// let query = TableQuery::from_query_string("search=al&sort=name:asc");
/// let mut table = TableState::from_query(config, &query);
///
/// let rows = vec![
///     Row::new().set("name", "Alva"),
///     Row::new().set("name", "Bob"),
///     Row::new().set("name", "Alice"),
/// ];
/// let visible = table.visible(&rows);
/// assert_eq!(visible.len(), 2);
/// assert_eq!(visible[0].display_text("name"), "Alice");
/// ```
#[derive(Debug)]
pub struct TableState {
    config: TableConfig,
    search: SearchState,
    sorts: SortState,
    pager: PageState,
}

impl TableState {
    /// Creates a table state with default (empty) interaction state.
    pub fn new(config: TableConfig) -> Self {
        let search = SearchState::new(config.searchable_fields.clone());
        let sorts = SortState::new(
            config.sortable_columns.clone(),
            config.date_fields.clone(),
        );
        Self {
            config,
            search,
            sorts,
            pager: PageState::default(),
        }
    }

    /// Creates a table state from a URL snapshot.
    ///
    /// The settled search query is seeded immediately from the snapshot,
    /// so the first render filters without waiting out a quiet period.
    pub fn from_query(config: TableConfig, query: &TableQuery) -> Self {
        let mut table = Self::new(config);
        table.search.set_immediate(query.search.clone());
        table.sorts.set_rules(query.sort_rules.clone());
        table.pager = PageState::new(query.page, query.page_size);
        table
    }

    /// Returns the table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the search manager.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Returns the sort manager.
    pub fn sorts(&self) -> &SortState {
        &self.sorts
    }

    /// Returns the pagination manager.
    pub fn pager(&self) -> &PageState {
        &self.pager
    }

    // =========================================================================
    // Event entry points
    // =========================================================================

    /// Updates the live search query (debounced).
    ///
    /// Must be called from within a Tokio runtime context.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search.set_live(query);
    }

    /// Handles a column-header click.
    pub fn handle_sort(&mut self, key: &str) {
        self.sorts.handle_sort(key);
    }

    /// Switches the sort mode, clearing rules on a real change.
    pub fn handle_sort_mode_change(&mut self, mode: SortMode) {
        self.sorts.handle_sort_mode_change(mode);
    }

    /// Clears all active sorts.
    pub fn clear_all_sorts(&mut self) {
        self.sorts.clear_all_sorts();
    }

    /// Navigates to a page.
    pub fn handle_page_change(&mut self, page: usize) {
        self.pager.handle_page_change(page);
    }

    /// Changes the page size, resetting to page 1.
    pub fn handle_page_size_change(&mut self, size: usize) {
        self.pager.handle_page_size_change(size);
    }

    // =========================================================================
    // Pipeline and URL binding
    // =========================================================================

    /// Computes the visible row window: filter, then sort, then paginate.
    ///
    /// Self-corrects an out-of-range page as a side effect, so a
    /// subsequent [`query`](TableState::query) reflects the page actually
    /// shown.
    pub fn visible(&mut self, rows: &[Row]) -> Vec<Row> {
        let filtered = self.search.filter_rows(rows.to_vec());
        let sorted = self.sorts.sort_rows(filtered);
        self.pager.paginate(sorted)
    }

    /// Snapshots the current state for the URL.
    ///
    /// The search component is the live query, mirroring the input field.
    pub fn query(&self) -> TableQuery {
        TableQuery {
            search: self.search.live().to_owned(),
            page: self.pager.current_page(),
            page_size: self.pager.rows_per_page(),
            sort_rules: self.sorts.rules().to_vec(),
        }
    }

    /// Applies a snapshot mid-session, e.g. after a navigation event.
    ///
    /// The search change goes through the debounce like any live edit, so
    /// this must be called from within a Tokio runtime context. Numeric
    /// parameters are normalized by the same rules as their event entry
    /// points.
    pub fn apply_query(&mut self, query: &TableQuery) {
        self.search.set_live(query.search.clone());
        self.sorts.set_rules(query.sort_rules.clone());
        self.pager.handle_page_size_change(query.page_size);
        self.pager.handle_page_change(query.page);
    }
}
