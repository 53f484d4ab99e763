//! Name search helpers.
//!
//! Search is a case-insensitive substring match executed with PostgreSQL
//! `ILIKE ... ESCAPE '\'`. The user's term is matched literally.

use serde::Serialize;

/// Escape character declared in every `ILIKE` that uses [`contains_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern that matches names containing `term`.
///
/// `%`, `_` and the escape character itself are escaped so they match
/// literally. Surrounding whitespace is trimmed; an empty term yields `%%`,
/// which matches every row.
///
/// # Examples
///
/// ```
/// use fyyur_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Hop"), "%Hop%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// assert_eq!(contains_pattern(""), "%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let term = term.trim();
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Search response payload: number of matches and the matches themselves.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_term_in_wildcards() {
        assert_eq!(contains_pattern("Music"), "%Music%");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(contains_pattern("  band "), "%band%");
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
        assert_eq!(contains_pattern("   "), "%%");
    }

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("back\\slash"), "%back\\\\slash%");
    }

    #[test]
    fn keeps_ampersand_and_unicode() {
        assert_eq!(contains_pattern("Live & Café"), "%Live & Café%");
    }

    #[test]
    fn results_count_matches_data() {
        let results = SearchResults::new(vec!["a", "b"]);
        assert_eq!(results.count, 2);
        assert_eq!(results.data, vec!["a", "b"]);
    }
}
