//! Table behavior configuration.

use serde::Deserialize;
use serde::Serialize;

/// A column descriptor for header rendering.
///
/// The core transforms never interpret columns; they are carried for
/// consumers building the header row. `data_index` names the row field the
/// column displays and defaults to `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable column key, referenced by sort rules.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Row field the column reads.
    pub data_index: String,
}

impl Column {
    /// Creates a column whose `data_index` equals its key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
        }
    }

    /// Overrides the row field this column reads (builder pattern).
    pub fn with_data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = data_index.into();
        self
    }
}

/// Configuration for one table's behavior.
///
/// - `sortable_columns`: header clicks on any other column are ignored.
/// - `searchable_fields`: row fields scanned for query matches.
/// - `date_fields`: subset of fields compared as dates when sorting.
///
/// # Example
///
/// ```
/// use gridstate::config::Column;
/// use gridstate::config::TableConfig;
///
/// let config = TableConfig::new()
///     .column(Column::new("name", "Name"))
///     .column(Column::new("joined", "Joined"))
///     .sortable("name")
///     .sortable("joined")
///     .searchable("name")
///     .date_field("joined");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Column descriptors, in display order.
    pub columns: Vec<Column>,
    /// Columns eligible for sorting.
    pub sortable_columns: Vec<String>,
    /// Row fields scanned by the search filter.
    pub searchable_fields: Vec<String>,
    /// Fields compared as dates rather than generically.
    pub date_fields: Vec<String>,
}

impl TableConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column descriptor (builder pattern).
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Marks a column as sortable (builder pattern).
    pub fn sortable(mut self, key: impl Into<String>) -> Self {
        self.sortable_columns.push(key.into());
        self
    }

    /// Adds a field to the search scan (builder pattern).
    pub fn searchable(mut self, field: impl Into<String>) -> Self {
        self.searchable_fields.push(field.into());
        self
    }

    /// Marks a field as date-compared (builder pattern).
    pub fn date_field(mut self, field: impl Into<String>) -> Self {
        self.date_fields.push(field.into());
        self
    }
}
