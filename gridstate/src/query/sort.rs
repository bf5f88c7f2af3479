//! Multi-column sort rules and the click-driven rule manager.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use super::compare::Direction;
use super::compare::compare_dates;
use super::compare::compare_values;
use crate::model::Row;

/// One (column, direction) pair of a multi-column sort.
///
/// An ordered sequence of rules defines the sort: the first rule is the
/// primary key, later rules break ties. A column appears at most once in a
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    /// Column key the rule sorts by.
    pub key: String,
    /// Sort direction.
    pub direction: Direction,
}

impl SortRule {
    /// Creates an ascending rule on a column.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending rule on a column.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Desc,
        }
    }
}

/// Policy for how a newly clicked column combines with existing rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// The clicked column becomes the sole primary sort.
    #[default]
    Replace,
    /// The clicked column is appended as a lower-priority tiebreaker.
    Add,
}

/// Manages the ordered sort-rule sequence for one table.
///
/// Column-header clicks feed [`handle_sort`](SortState::handle_sort), which
/// cycles a column through none → ascending → descending → none. Only
/// columns in the sortable set react to clicks.
///
/// # Example
///
/// ```
/// use gridstate::query::SortMode;
/// use gridstate::query::SortRule;
/// use gridstate::query::SortState;
///
/// let mut sorts = SortState::new(vec!["name".into(), "age".into()], vec![]);
/// sorts.handle_sort_mode_change(SortMode::Add);
/// sorts.handle_sort("name");
/// sorts.handle_sort("age");
/// assert_eq!(sorts.rules(), &[SortRule::asc("name"), SortRule::asc("age")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SortState {
    mode: SortMode,
    rules: Vec<SortRule>,
    sortable_columns: Vec<String>,
    date_fields: Vec<String>,
}

impl SortState {
    /// Creates a sort state over the given sortable columns.
    ///
    /// Columns listed in `date_fields` compare as dates; everything else
    /// compares by the generic value order.
    pub fn new(sortable_columns: Vec<String>, date_fields: Vec<String>) -> Self {
        Self {
            mode: SortMode::default(),
            rules: Vec::new(),
            sortable_columns,
            date_fields,
        }
    }

    /// Returns the current sort mode.
    pub fn mode(&self) -> SortMode {
        self.mode
    }

    /// Returns the active rules in priority order.
    pub fn rules(&self) -> &[SortRule] {
        &self.rules
    }

    /// Returns the active rule for a column, if any.
    ///
    /// Useful for rendering sort indicators in column headers.
    pub fn rule_for(&self, key: &str) -> Option<&SortRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    /// Replaces the rule sequence, e.g. when restoring from a URL.
    ///
    /// Later duplicates of a column are dropped so the at-most-once
    /// invariant holds regardless of input.
    pub fn set_rules(&mut self, rules: Vec<SortRule>) {
        let mut seen: Vec<String> = Vec::new();
        self.rules = rules
            .into_iter()
            .filter(|rule| {
                if seen.iter().any(|k| *k == rule.key) {
                    log::debug!("dropping duplicate sort rule for column '{}'", rule.key);
                    false
                } else {
                    seen.push(rule.key.clone());
                    true
                }
            })
            .collect();
    }

    /// Handles a column-header click.
    ///
    /// Cycles the column none → asc → desc → none. A new column enters at
    /// the front under [`SortMode::Replace`] and at the back under
    /// [`SortMode::Add`]. Clicks on non-sortable columns are ignored.
    pub fn handle_sort(&mut self, key: &str) {
        if !self.sortable_columns.iter().any(|c| c == key) {
            return;
        }

        match self.rules.iter().position(|r| r.key == key) {
            None => {
                let rule = SortRule::asc(key);
                match self.mode {
                    SortMode::Replace => self.rules.insert(0, rule),
                    SortMode::Add => self.rules.push(rule),
                }
            }
            Some(idx) => match self.rules[idx].direction {
                Direction::Asc => self.rules[idx].direction = Direction::Desc,
                Direction::Desc => {
                    self.rules.remove(idx);
                }
            },
        }
    }

    /// Switches the sort mode.
    ///
    /// A mode change always clears the rule sequence; same-mode calls are
    /// no-ops.
    pub fn handle_sort_mode_change(&mut self, mode: SortMode) {
        if self.mode != mode {
            self.mode = mode;
            self.rules.clear();
        }
    }

    /// Clears all active sorts.
    pub fn clear_all_sorts(&mut self) {
        self.rules.clear();
    }

    /// Sorts rows by the active rules.
    ///
    /// Identity when no rules are active. Otherwise one stable multi-key
    /// sort: rules apply in priority order and the first non-equal
    /// comparison wins, so rows equal under every rule keep their relative
    /// input order.
    pub fn sort_rows(&self, mut rows: Vec<Row>) -> Vec<Row> {
        if self.rules.is_empty() {
            return rows;
        }

        rows.sort_by(|a, b| {
            for rule in &self.rules {
                let av = a.sortable_value(&rule.key);
                let bv = b.sortable_value(&rule.key);

                let ord = if self.date_fields.iter().any(|f| *f == rule.key) {
                    compare_dates(av, bv, rule.direction)
                } else {
                    compare_values(av, bv, rule.direction)
                };

                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });

        rows
    }
}
