//! String matching predicates for table search.

use regex::Regex;
use regex::RegexBuilder;

/// Returns `true` if `value` contains `query`, case-insensitively.
pub fn matches_partial(value: &str, query: &str) -> bool {
    value.to_lowercase().contains(&query.to_lowercase())
}

/// Returns `true` if `value` equals `query`, case-insensitively.
pub fn matches_exact(value: &str, query: &str) -> bool {
    value.to_lowercase() == query.to_lowercase()
}

/// Returns `true` if `value` matches a compiled pattern.
pub fn matches_regex(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// Compiles `query` as a case-insensitive regular expression.
///
/// Returns `None` when the query is not a valid pattern; search then
/// degrades to partial and exact matching only. Never panics.
///
/// # Example
///
/// ```
/// use gridstate::query::compile_pattern;
///
/// assert!(compile_pattern("^Al.*e$").is_some());
/// assert!(compile_pattern("[unclosed").is_none());
/// ```
pub fn compile_pattern(query: &str) -> Option<Regex> {
    match RegexBuilder::new(query).case_insensitive(true).build() {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            log::debug!("search query is not a valid pattern, regex matching disabled: {err}");
            None
        }
    }
}

/// Returns `true` if `value` matches `query` under any mode.
///
/// Partial, exact, and regex matching are tried in that order,
/// short-circuiting on the first success. The regex clause is skipped when
/// no pattern compiled.
pub fn matches_any(value: &str, query: &str, pattern: Option<&Regex>) -> bool {
    if matches_partial(value, query) {
        return true;
    }
    if matches_exact(value, query) {
        return true;
    }
    if let Some(pattern) = pattern {
        if matches_regex(value, pattern) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_is_case_insensitive() {
        assert!(matches_partial("Alice", "al"));
        assert!(matches_partial("Alice", "LIC"));
        assert!(!matches_partial("Alice", "bob"));
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        assert!(matches_exact("Alice", "alice"));
        assert!(!matches_exact("Alice", "Al"));
    }

    #[test]
    fn test_compile_pattern_never_fails_loudly() {
        assert!(compile_pattern("[").is_none());
        assert!(compile_pattern("(unbalanced").is_none());
        assert!(compile_pattern("a|b").is_some());
    }

    #[test]
    fn test_compiled_pattern_is_case_insensitive() {
        let pattern = compile_pattern("^ali").unwrap();
        assert!(matches_regex("Alice", &pattern));
    }

    #[test]
    fn test_matches_any_falls_through_modes() {
        // No substring or exact hit, but the regex matches.
        let pattern = compile_pattern("^a.c$");
        assert!(matches_any("abc", "^a.c$", pattern.as_ref()));
        // Invalid pattern: only partial/exact remain.
        assert!(!matches_any("abc", "[", None));
        assert!(matches_any("a[bc", "[", None));
    }
}
