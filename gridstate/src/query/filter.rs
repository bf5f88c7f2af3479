//! Debounced search state and row filtering.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::matcher::compile_pattern;
use super::matcher::matches_any;
use crate::model::Row;

/// Quiet period a live query must survive before it settles.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Search state for one table: a live query and its settled shadow.
///
/// The live query tracks the input field keystroke by keystroke. The
/// settled query, the only value used to filter rows, follows it after a
/// quiet period: every live edit cancels the pending timer and starts a new
/// one, so the settled value updates once typing pauses. On construction
/// the settled query is initialized from the live query immediately.
///
/// The timer is a single-slot deferred task: at most one is pending per
/// instance, the handle is aborted before every reschedule, and dropping
/// the state cancels whatever is in flight.
///
/// [`set_live`](SearchState::set_live) must be called from within a Tokio
/// runtime context.
#[derive(Debug)]
pub struct SearchState {
    live: String,
    quiet_period: Duration,
    searchable_fields: Vec<String>,
    settled_tx: watch::Sender<String>,
    settled_rx: watch::Receiver<String>,
    pending: Option<JoinHandle<()>>,
}

impl SearchState {
    /// Creates an empty search state over the given searchable fields.
    pub fn new(searchable_fields: Vec<String>) -> Self {
        Self::with_query(searchable_fields, String::new())
    }

    /// Creates a search state with an initial query.
    ///
    /// The settled query starts equal to the live query, with no delay.
    pub fn with_query(searchable_fields: Vec<String>, query: impl Into<String>) -> Self {
        let live = query.into();
        let (settled_tx, settled_rx) = watch::channel(live.clone());
        Self {
            live,
            quiet_period: DEFAULT_QUIET_PERIOD,
            searchable_fields,
            settled_tx,
            settled_rx,
            pending: None,
        }
    }

    /// Overrides the quiet period (builder pattern).
    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    /// Returns the live query.
    pub fn live(&self) -> &str {
        &self.live
    }

    /// Returns the current settled query.
    pub fn settled(&self) -> String {
        self.settled_rx.borrow().clone()
    }

    /// Returns a receiver that observes settled-query updates.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.settled_tx.subscribe()
    }

    /// Updates the live query, restarting the quiet-period timer.
    ///
    /// The value captured here becomes the settled query if no further edit
    /// arrives within the quiet period.
    pub fn set_live(&mut self, query: impl Into<String>) {
        self.live = query.into();
        self.cancel_pending();

        let tx = self.settled_tx.clone();
        let value = self.live.clone();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            let _ = tx.send(value);
        }));
    }

    /// Sets live and settled queries at once, skipping the debounce.
    ///
    /// Used at construction-time restore; a pending timer is cancelled.
    pub fn set_immediate(&mut self, query: impl Into<String>) {
        self.live = query.into();
        self.cancel_pending();
        let _ = self.settled_tx.send(self.live.clone());
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Filters rows by the settled query.
    ///
    /// A trimmed-empty settled query is the identity. Otherwise the query
    /// is compiled once and a row survives when any searchable field
    /// (stringified, absent fields as empty) matches under partial, exact,
    /// or regex matching. Input order is preserved.
    pub fn filter_rows(&self, rows: Vec<Row>) -> Vec<Row> {
        let settled = self.settled();
        let query = settled.trim();
        if query.is_empty() {
            return rows;
        }

        let pattern = compile_pattern(query);
        rows.into_iter()
            .filter(|row| {
                self.searchable_fields
                    .iter()
                    .any(|field| matches_any(&row.display_text(field), query, pattern.as_ref()))
            })
            .collect()
    }
}

impl Drop for SearchState {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Row> {
        vec![
            Row::new().set("name", "Alice").set("city", "Berlin"),
            Row::new().set("name", "Bob").set("city", "Algiers"),
            Row::new().set("name", "Carol"),
        ]
    }

    fn names(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|r| r.display_text("name")).collect()
    }

    #[test]
    fn test_initial_settled_matches_live() {
        let search = SearchState::with_query(vec!["name".into()], "Al");
        assert_eq!(search.live(), "Al");
        assert_eq!(search.settled(), "Al");
    }

    #[test]
    fn test_empty_query_is_identity() {
        let search = SearchState::new(vec!["name".into()]);
        assert_eq!(names(&search.filter_rows(people())), ["Alice", "Bob", "Carol"]);

        let blank = SearchState::with_query(vec!["name".into()], "   ");
        assert_eq!(names(&blank.filter_rows(people())), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_partial_match_filters() {
        let search = SearchState::with_query(vec!["name".into()], "Al");
        assert_eq!(names(&search.filter_rows(people())), ["Alice"]);
    }

    #[test]
    fn test_any_searchable_field_matches() {
        let search = SearchState::with_query(vec!["name".into(), "city".into()], "Al");
        assert_eq!(names(&search.filter_rows(people())), ["Alice", "Bob"]);
    }

    #[test]
    fn test_regex_match() {
        let search = SearchState::with_query(vec!["name".into()], "^(bob|carol)$");
        assert_eq!(names(&search.filter_rows(people())), ["Bob", "Carol"]);
    }

    #[test]
    fn test_invalid_regex_degrades_to_substring() {
        let rows = vec![
            Row::new().set("name", "a[b"),
            Row::new().set("name", "plain"),
        ];
        let search = SearchState::with_query(vec!["name".into()], "[");
        assert_eq!(names(&search.filter_rows(rows)), ["a[b"]);
    }

    #[test]
    fn test_absent_field_never_matches() {
        let search = SearchState::with_query(vec!["city".into()], "Berlin");
        assert_eq!(names(&search.filter_rows(people())), ["Alice"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settles_after_quiet_period() {
        let mut search = SearchState::new(vec!["name".into()]);
        search.set_live("Al");
        assert_eq!(search.settled(), "");

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(search.settled(), "");

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(search.settled(), "Al");
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_edits_settles_once_with_last_value() {
        let mut search = SearchState::new(vec!["name".into()]);
        let mut settled = search.subscribe();

        search.set_live("A");
        tokio::time::sleep(Duration::from_millis(100)).await;
        search.set_live("Al");
        tokio::time::sleep(Duration::from_millis(100)).await;
        search.set_live("Ali");

        // The earlier timers were cancelled; nothing settles mid-burst.
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(!settled.has_changed().unwrap());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(settled.has_changed().unwrap());
        assert_eq!(*settled.borrow_and_update(), "Ali");
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_edits_settle_separately() {
        let mut search = SearchState::new(vec!["name".into()]);
        search.set_live("a");
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(search.settled(), "a");

        search.set_live("b");
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(search.settled(), "b");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_immediate_skips_debounce() {
        let mut search = SearchState::new(vec!["name".into()]);
        search.set_live("slow");
        search.set_immediate("fast");
        assert_eq!(search.settled(), "fast");

        // The cancelled timer must not fire later.
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(search.settled(), "fast");
    }
}
