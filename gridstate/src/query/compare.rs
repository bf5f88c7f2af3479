//! Ordering primitives for table sorting.

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the wire form of the direction (`asc`/`desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Applies the direction to an ascending comparison result.
    pub(crate) fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }
}

/// Compares two optional cell values under a direction.
///
/// Absent values (`None` or `Value::Null`) compare equal to each other and
/// sort before present values under `Asc`, after them under `Desc`. Present
/// values compare by a total order: within a type, natural ordering
/// (integers and floats share the real line); across types, by a fixed type
/// rank, so mixed-type columns still sort consistently.
///
/// The result is a strict weak ordering, safe for use in a stable sort.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use gridstate::model::Value;
/// use gridstate::query::Direction;
/// use gridstate::query::compare_values;
///
/// let a = Value::from("apple");
/// let b = Value::from("banana");
/// assert_eq!(compare_values(Some(&a), Some(&b), Direction::Asc), Ordering::Less);
/// assert_eq!(compare_values(Some(&a), Some(&b), Direction::Desc), Ordering::Greater);
/// assert_eq!(compare_values(None, Some(&b), Direction::Asc), Ordering::Less);
/// ```
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: Direction) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    let ord = match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => value_order(x, y),
    };
    direction.apply(ord)
}

/// Compares two optional cell values as dates under a direction.
///
/// Each side is opportunistically converted to a timestamp: `DateTime`
/// values directly, strings via a fixed set of formats, numbers as
/// milliseconds since the Unix epoch. A value that fails to parse is
/// treated as absent and sorts per the absent-value rule of
/// [`compare_values`]. Lenient by contract, not an error path.
pub fn compare_dates(a: Option<&Value>, b: Option<&Value>, direction: Direction) -> Ordering {
    let a = a.and_then(timestamp_millis);
    let b = b.and_then(timestamp_millis);
    let ord = match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y),
    };
    direction.apply(ord)
}

fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::String(_) => 3,
        Value::DateTime(_) => 4,
    }
}

fn value_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        // NaN has no order; let it tie rather than poison the sort.
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::Int(x), Value::Float(y)) => {
            (*x as f64).partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (Value::Float(x), Value::Int(y)) => {
            x.partial_cmp(&(*y as f64)).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Converts a cell value to milliseconds since the Unix epoch, if it is
/// date-like.
pub(crate) fn timestamp_millis(value: &Value) -> Option<i64> {
    match value {
        Value::DateTime(dt) => Some(dt.timestamp_millis()),
        Value::Int(n) => Some(*n),
        Value::Float(n) => Some(*n as i64),
        Value::String(s) => parse_date_str(s),
        Value::Null | Value::Bool(_) => None,
    }
}

fn parse_date_str(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_absent_equal() {
        let null = Value::Null;
        assert_eq!(
            compare_values(None, None, Direction::Asc),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(Some(&null), None, Direction::Desc),
            Ordering::Equal
        );
    }

    #[test]
    fn test_absent_sorts_first_asc_last_desc() {
        let v = Value::from("x");
        assert_eq!(
            compare_values(None, Some(&v), Direction::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_values(None, Some(&v), Direction::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn test_antisymmetric() {
        let a = Value::from(1i64);
        let b = Value::from(2i64);
        for direction in [Direction::Asc, Direction::Desc] {
            let forward = compare_values(Some(&a), Some(&b), direction);
            let backward = compare_values(Some(&b), Some(&a), direction);
            assert_eq!(forward, backward.reverse());
        }
        assert_eq!(
            compare_values(Some(&a), Some(&a), Direction::Asc),
            Ordering::Equal
        );
    }

    #[test]
    fn test_numeric_cross_type() {
        let i = Value::from(2i64);
        let f = Value::from(1.5f64);
        assert_eq!(
            compare_values(Some(&i), Some(&f), Direction::Asc),
            Ordering::Greater
        );
    }

    #[test]
    fn test_mixed_types_use_rank() {
        let s = Value::from("10");
        let n = Value::from(9i64);
        // Numbers rank below strings regardless of content.
        assert_eq!(
            compare_values(Some(&n), Some(&s), Direction::Asc),
            Ordering::Less
        );
    }

    #[test]
    fn test_date_strings_compare_chronologically() {
        let a = Value::from("2024-01-02");
        let b = Value::from("2024-01-10");
        assert_eq!(
            compare_dates(Some(&a), Some(&b), Direction::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_dates(Some(&a), Some(&b), Direction::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn test_unparseable_date_is_absent() {
        let bad = Value::from("not a date");
        let good = Value::from("2024-01-02");
        assert_eq!(
            compare_dates(Some(&bad), Some(&good), Direction::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_dates(Some(&bad), None, Direction::Asc),
            Ordering::Equal
        );
    }

    #[test]
    fn test_numbers_are_epoch_millis() {
        let early = Value::from(1_000i64);
        let late = Value::from(2_000i64);
        assert_eq!(
            compare_dates(Some(&early), Some(&late), Direction::Asc),
            Ordering::Less
        );
    }

    #[test]
    fn test_rfc3339_parse() {
        assert_eq!(
            parse_date_str("1970-01-01T00:00:01Z"),
            Some(1_000)
        );
    }
}
