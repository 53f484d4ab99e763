//! Genre lists for venues and artists.
//!
//! Genres are persisted as a PostgreSQL `TEXT[]`. The comma-joined text form
//! is the serialization boundary for callers that submit or display a single
//! string, so genre names may never contain the separator themselves.

use serde::{Deserialize, Serialize};

/// Separator used by the joined text form.
pub const GENRE_SEPARATOR: char = ',';

/// Maximum length of a single genre name in characters.
pub const MAX_GENRE_LENGTH: usize = 60;

/// An ordered, de-duplicated list of genre names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreList(Vec<String>);

impl GenreList {
    /// Build a list from raw user input.
    ///
    /// - Surrounding whitespace is trimmed.
    /// - Blank entries are dropped.
    /// - Duplicates are dropped, keeping the first occurrence.
    /// - Names containing [`GENRE_SEPARATOR`] or longer than
    ///   [`MAX_GENRE_LENGTH`] are rejected.
    pub fn new<I, S>(genres: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for raw in genres {
            let genre = raw.as_ref().trim();
            if genre.is_empty() {
                continue;
            }
            if genre.contains(GENRE_SEPARATOR) {
                return Err(format!(
                    "Genre '{genre}' must not contain '{GENRE_SEPARATOR}'"
                ));
            }
            if genre.chars().count() > MAX_GENRE_LENGTH {
                return Err(format!(
                    "Genre '{genre}' exceeds maximum length of {MAX_GENRE_LENGTH} characters"
                ));
            }
            if !list.iter().any(|g| g == genre) {
                list.push(genre.to_string());
            }
        }
        Ok(Self(list))
    }

    /// Parse the comma-joined text form (`"Jazz,Reggae"`).
    pub fn parse_joined(joined: &str) -> Result<Self, String> {
        Self::new(joined.split(GENRE_SEPARATOR))
    }

    /// Render the comma-joined text form. Inverse of [`GenreList::parse_joined`].
    pub fn joined(&self) -> String {
        self.0.join(&GENRE_SEPARATOR.to_string())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Genres as submitted in a JSON body: either a list or a joined string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenreInput {
    List(Vec<String>),
    Joined(String),
}

impl Default for GenreInput {
    fn default() -> Self {
        GenreInput::List(Vec::new())
    }
}

impl GenreInput {
    pub fn into_genre_list(self) -> Result<GenreList, String> {
        match self {
            GenreInput::List(items) => GenreList::new(items),
            GenreInput::Joined(joined) => GenreList::parse_joined(&joined),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_comma() {
        let list = GenreList::new(["Jazz", "Reggae"]).unwrap();
        assert_eq!(list.joined(), "Jazz,Reggae");
    }

    #[test]
    fn split_reproduces_original_list() {
        let original = vec!["Jazz".to_string(), "Reggae".to_string()];
        let list = GenreList::new(&original).unwrap();
        let split: Vec<String> = list.joined().split(',').map(str::to_string).collect();
        assert_eq!(split, original);
        assert_eq!(GenreList::parse_joined(&list.joined()).unwrap(), list);
    }

    #[test]
    fn trims_and_drops_blank_entries() {
        let list = GenreList::new(["  Jazz ", "", "   ", "Folk"]).unwrap();
        assert_eq!(list.as_slice(), &["Jazz".to_string(), "Folk".to_string()]);
    }

    #[test]
    fn drops_duplicates_keeping_first_occurrence() {
        let list = GenreList::new(["Rock n Roll", "Jazz", "Rock n Roll"]).unwrap();
        assert_eq!(list.joined(), "Rock n Roll,Jazz");
    }

    #[test]
    fn rejects_embedded_separator() {
        let err = GenreList::new(["Jazz, Blues"]).unwrap_err();
        assert!(err.contains("must not contain"));
    }

    #[test]
    fn rejects_overlong_genre() {
        let long = "x".repeat(MAX_GENRE_LENGTH + 1);
        assert!(GenreList::new([long]).is_err());
    }

    #[test]
    fn empty_joined_string_is_empty_list() {
        let list = GenreList::parse_joined("").unwrap();
        assert!(list.is_empty());
        assert_eq!(list.joined(), "");
    }

    #[test]
    fn input_accepts_list_or_joined_string() {
        let from_list: GenreInput = serde_json::from_str(r#"["Jazz","Soul"]"#).unwrap();
        let from_joined: GenreInput = serde_json::from_str(r#""Jazz,Soul""#).unwrap();
        assert_eq!(
            from_list.into_genre_list().unwrap(),
            from_joined.into_genre_list().unwrap()
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let list = GenreList::new(["Pop"]).unwrap();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["Pop"]"#);
    }
}
