//! Row transforms: comparing, matching, sorting, filtering, paginating.
//!
//! The pipeline runs filter → sort → paginate over an in-memory row
//! collection. Each stage is synchronous and bounded by collection size;
//! the only resource any of them owns is the search debounce timer.
//!
//! - [`compare_values`] / [`compare_dates`] - ordering primitives
//! - [`matches_partial`] / [`matches_exact`] / [`matches_regex`] /
//!   [`compile_pattern`] - string matching predicates
//! - [`SortState`] - click-driven multi-column sort rules
//! - [`SearchState`] - debounced query and row filtering
//! - [`PageState`] - page-window computation

mod compare;
mod filter;
mod matcher;
mod page;
mod sort;

pub use compare::Direction;
pub use compare::compare_dates;
pub use compare::compare_values;
pub use filter::DEFAULT_QUIET_PERIOD;
pub use filter::SearchState;
pub use matcher::compile_pattern;
pub use matcher::matches_any;
pub use matcher::matches_exact;
pub use matcher::matches_partial;
pub use matcher::matches_regex;
pub use page::DEFAULT_PAGE_SIZE;
pub use page::PageState;
pub use sort::SortMode;
pub use sort::SortRule;
pub use sort::SortState;
