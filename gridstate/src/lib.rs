//! Headless table-state toolkit
//!
//! Searching, multi-column sorting, and pagination over an in-memory row
//! collection, with the whole interaction state round-trippable through
//! URL query parameters so a table view is shareable by link. Rendering
//! and routing are the consumer's business; this crate owns state and data
//! transforms only.
//!
//! # Example
//!
//! ```
//! use gridstate::config::TableConfig;
//! use gridstate::model::Row;
//! use gridstate::table::TableState;
//! use gridstate::urlstate::TableQuery;
//!
//! let config = TableConfig::new()
//!     .sortable("name")
//!     .searchable("name");
//!
//! // Restore a view someone shared by link.
//! let query = TableQuery::from_query_string("sort=name:asc&pageSize=2");
//! let mut table = TableState::from_query(config, &query);
//!
//! let rows = vec![
//!     Row::new().set("name", "Carol"),
//!     Row::new().set("name", "Alice"),
//!     Row::new().set("name", "Bob"),
//! ];
//! let visible = table.visible(&rows);
//! assert_eq!(visible[0].display_text("name"), "Alice");
//! assert_eq!(visible[1].display_text("name"), "Bob");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod table;
pub mod urlstate;

pub use config::Column;
pub use config::TableConfig;
pub use error::FieldError;
pub use model::Row;
pub use model::Value;
pub use query::Direction;
pub use query::PageState;
pub use query::SearchState;
pub use query::SortMode;
pub use query::SortRule;
pub use query::SortState;
pub use table::TableState;
pub use urlstate::TableQuery;
