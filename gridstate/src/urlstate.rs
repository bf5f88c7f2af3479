//! URL query-parameter binding for table state.
//!
//! Four parameters make a table view shareable by link:
//!
//! | parameter  | form                                  | default |
//! |------------|---------------------------------------|---------|
//! | `search`   | raw string                            | empty   |
//! | `page`     | integer >= 1                          | 1       |
//! | `pageSize` | integer >= 1                          | 10      |
//! | `sort`     | `field:(asc\|desc)` comma-separated   | none    |
//!
//! Decoding never fails: non-numeric or out-of-range numbers fall back to
//! their defaults, malformed sort tokens are dropped, and an absent or
//! empty parameter means its default. Parameters sitting at their defaults
//! are omitted when encoding, so round-trips are lossless and URLs stay
//! minimal.

use serde::Deserialize;
use serde::Serialize;
use url::Url;
use url::form_urlencoded;

use crate::query::DEFAULT_PAGE_SIZE;
use crate::query::Direction;
use crate::query::SortRule;

const PARAM_SEARCH: &str = "search";
const PARAM_PAGE: &str = "page";
const PARAM_PAGE_SIZE: &str = "pageSize";
const PARAM_SORT: &str = "sort";

/// A table-state snapshot bound to URL query parameters.
///
/// # Example
///
/// ```
/// use gridstate::query::SortRule;
/// use gridstate::urlstate::TableQuery;
///
/// let q = TableQuery::from_query_string("search=al&page=2&sort=name:asc");
/// assert_eq!(q.search, "al");
/// assert_eq!(q.page, 2);
/// assert_eq!(q.page_size, 10);
/// assert_eq!(q.sort_rules, vec![SortRule::asc("name")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableQuery {
    /// Raw search string.
    pub search: String,
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Sort rules in priority order.
    pub sort_rules: Vec<SortRule>,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_rules: Vec::new(),
        }
    }
}

impl TableQuery {
    /// Decodes a snapshot from a query string (without the leading `?`).
    pub fn from_query_string(query: &str) -> Self {
        let mut out = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PARAM_SEARCH => out.search = value.into_owned(),
                PARAM_PAGE => out.page = parse_positive(&value, 1),
                PARAM_PAGE_SIZE => out.page_size = parse_positive(&value, DEFAULT_PAGE_SIZE),
                PARAM_SORT => out.sort_rules = parse_sort_param(&value),
                _ => {}
            }
        }
        out
    }

    /// Decodes a snapshot from a URL's query string.
    pub fn from_url(url: &Url) -> Self {
        Self::from_query_string(url.query().unwrap_or(""))
    }

    /// Encodes the snapshot as a query string (without the leading `?`).
    ///
    /// Parameters at their defaults are omitted; the default snapshot
    /// encodes to the empty string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        self.append_pairs(&mut serializer);
        serializer.finish()
    }

    /// Writes the snapshot into a URL's query string.
    ///
    /// Query parameters other than the four table parameters are
    /// preserved untouched.
    pub fn apply_to_url(&self, url: &mut Url) {
        let preserved: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !is_table_param(key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &preserved {
            serializer.append_pair(key, value);
        }
        self.append_pairs(&mut serializer);

        let query = serializer.finish();
        url.set_query(if query.is_empty() { None } else { Some(&query) });
    }

    fn append_pairs(&self, serializer: &mut form_urlencoded::Serializer<'_, String>) {
        if !self.search.is_empty() {
            serializer.append_pair(PARAM_SEARCH, &self.search);
        }
        if self.page != 1 {
            serializer.append_pair(PARAM_PAGE, &self.page.to_string());
        }
        if self.page_size != DEFAULT_PAGE_SIZE {
            serializer.append_pair(PARAM_PAGE_SIZE, &self.page_size.to_string());
        }
        if !self.sort_rules.is_empty() {
            serializer.append_pair(PARAM_SORT, &encode_sort_param(&self.sort_rules));
        }
    }
}

fn is_table_param(key: &str) -> bool {
    matches!(key, PARAM_SEARCH | PARAM_PAGE | PARAM_PAGE_SIZE | PARAM_SORT)
}

/// Parses a positive integer parameter, falling back on anything invalid.
fn parse_positive(value: &str, fallback: usize) -> usize {
    match value.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n,
        _ => {
            log::debug!("invalid numeric parameter '{value}', using {fallback}");
            fallback
        }
    }
}

/// Parses the `sort` parameter grammar `(field:(asc|desc))(,...)*`.
///
/// Malformed tokens are dropped; well-formed tokens still apply. Later
/// duplicates of a field are dropped to keep the at-most-once invariant.
fn parse_sort_param(param: &str) -> Vec<SortRule> {
    if param.trim().is_empty() {
        return Vec::new();
    }

    let mut rules: Vec<SortRule> = Vec::new();
    for token in param.split(',') {
        let Some((key, direction)) = token.split_once(':') else {
            log::warn!("dropping malformed sort token '{token}'");
            continue;
        };
        let direction = match direction {
            "asc" => Direction::Asc,
            "desc" => Direction::Desc,
            _ => {
                log::warn!("dropping malformed sort token '{token}'");
                continue;
            }
        };
        if key.is_empty() {
            log::warn!("dropping malformed sort token '{token}'");
            continue;
        }
        if rules.iter().any(|r| r.key == key) {
            log::debug!("dropping duplicate sort token for column '{key}'");
            continue;
        }
        rules.push(SortRule {
            key: key.to_owned(),
            direction,
        });
    }
    rules
}

fn encode_sort_param(rules: &[SortRule]) -> String {
    rules
        .iter()
        .map(|rule| format!("{}:{}", rule.key, rule.direction.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}
