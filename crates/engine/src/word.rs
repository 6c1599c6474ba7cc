use hashbrown::HashMap;
use regex::Regex;

use crate::error::{EngineError, Result};
use crate::stopwords::StopWordVocabulary;
use crate::table::OccurrenceTable;

/// Upper bound (exclusive) of the tracked word-length range.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 40;

/// Largest accepted word-length bound.
pub const WORD_LENGTH_LIMIT: usize = 1024;

/// Word-length universe `[0, end)`, with `1 <= end <= WORD_LENGTH_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLengthRange {
    end: usize,
}

impl WordLengthRange {
    pub fn new(end: usize) -> Result<Self> {
        if end == 0 || end > WORD_LENGTH_LIMIT {
            return Err(EngineError::Config(format!(
                "max_word_length must be between 1 and {WORD_LENGTH_LIMIT}, got {end}"
            )));
        }
        Ok(Self { end })
    }

    pub fn end(self) -> usize {
        self.end
    }

    pub fn contains(self, len: usize) -> bool {
        len < self.end
    }
}

impl Default for WordLengthRange {
    fn default() -> Self {
        Self { end: DEFAULT_MAX_WORD_LENGTH }
    }
}

/// Optional digits, optional apostrophe/hyphen run, a letter, then letters,
/// digits, apostrophes or hyphens. The whole token must match.
const WORD_SHAPE: &str = r"^\d*['-]*[a-zA-Z][a-zA-Z0-9'-]*$";

/// Sparse uppercase word -> occurrence mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, usize>,
}

impl WordCounts {
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, n)| (word.as_str(), *n))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of counted word tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent words; equal counts are ordered alphabetically.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut words: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        words.truncate(n);
        words
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut counts = HashMap::new();
        for (word, n) in iter {
            *counts.entry(word.into()).or_insert(0) += n;
        }
        Self { counts }
    }
}

/// Counts word-shaped tokens, case-insensitively.
#[derive(Debug, Clone)]
pub struct WordCounter {
    shape: Regex,
}

impl WordCounter {
    pub fn new() -> Result<Self> {
        Ok(Self { shape: Regex::new(WORD_SHAPE)? })
    }

    /// Whether the whole token has the shape of a word.
    pub fn is_word(&self, token: &str) -> bool {
        self.shape.is_match(token)
    }

    /// Tokens failing the word shape, including those with trailing
    /// punctuation such as `cat,`, are skipped rather than cleaned.
    pub fn count<S: AsRef<str>>(&self, tokens: &[S]) -> WordCounts {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens.iter().map(AsRef::as_ref) {
            if self.is_word(token) {
                *counts.entry(token.to_uppercase()).or_insert(0) += 1;
            }
        }
        WordCounts { counts }
    }
}

/// Dense stop-word table; words outside the vocabulary are dropped.
pub fn project_stopwords(words: &WordCounts, vocabulary: &StopWordVocabulary) -> OccurrenceTable<String> {
    let mut table = OccurrenceTable::zeroed(vocabulary.words().iter().cloned());
    for (word, count) in words.iter() {
        if let Some(idx) = vocabulary.position(word) {
            table.add_at(idx, count);
        }
    }
    table
}

/// Occurrences grouped by word length over `range`.
///
/// Lengths are counted in characters. Words of `range.end()` characters or
/// more fall outside the range and are dropped.
pub fn project_word_lengths(words: &WordCounts, range: WordLengthRange) -> OccurrenceTable<usize> {
    let mut table = OccurrenceTable::zeroed(0..range.end());
    for (word, count) in words.iter() {
        let len = word.chars().count();
        if range.contains(len) {
            table.add_at(len, count);
        } else {
            log::debug!("Dropping {count} occurrence(s) of {len}-character word {word}");
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_shape_accepts_words() {
        let counter = WordCounter::new().unwrap();
        for token in ["cat", "Don't", "well-known", "'tis", "--dash", "3rd", "1st-class", "b2b"] {
            assert!(counter.is_word(token), "{token} should be a word");
        }
    }

    #[test]
    fn word_shape_rejects_non_words() {
        let counter = WordCounter::new().unwrap();
        for token in ["", "42", "...", "cat,", "sat.", "-", "'", "a b", "x'-!", "café"] {
            assert!(!counter.is_word(token), "{token} should not be a word");
        }
    }

    #[test]
    fn count_folds_case_and_drops_decorated_tokens() {
        let counts = WordCounter::new().unwrap().count(&["The", "cat,", "sat.", "the", "THE"]);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("THE"), 3);
        assert_eq!(counts.get("CAT"), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn most_common_orders_by_count_then_word() {
        let counts: WordCounts = [("B", 2), ("A", 2), ("C", 5), ("D", 1)].into_iter().collect();
        let top = counts.most_common(3);
        assert_eq!(
            top,
            vec![("C".to_string(), 5), ("A".to_string(), 2), ("B".to_string(), 2)]
        );
    }

    #[test]
    fn stopword_projection_is_dense_over_vocabulary() {
        let counts: WordCounts = [("THE", 4), ("CAT", 2), ("OF", 1)].into_iter().collect();
        let vocabulary = StopWordVocabulary::from_words(["the", "of", "and"]);
        let table = project_stopwords(&counts, &vocabulary);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&"THE".to_string()), Some(4));
        assert_eq!(table.get(&"OF".to_string()), Some(1));
        assert_eq!(table.get(&"AND".to_string()), Some(0));
        assert_eq!(table.get(&"CAT".to_string()), None);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn stopword_projection_with_empty_vocabulary() {
        let counts: WordCounts = [("THE", 4)].into_iter().collect();
        let table = project_stopwords(&counts, &StopWordVocabulary::empty());
        assert!(table.is_empty());
    }

    #[test]
    fn word_length_projection_groups_by_length() {
        let counts: WordCounts = [("THE", 4), ("CAT", 2), ("A", 1), ("HOUSE", 3)].into_iter().collect();
        let table = project_word_lengths(&counts, WordLengthRange::default());
        assert_eq!(table.len(), 40);
        assert_eq!(table.get_at(1), Some(1));
        assert_eq!(table.get_at(3), Some(6));
        assert_eq!(table.get_at(5), Some(3));
        assert_eq!(table.get_at(0), Some(0));
        assert_eq!(table.total(), 10);
    }

    #[test]
    fn word_length_projection_drops_overlong_words() {
        let long = "A".repeat(40);
        let just_fits = "B".repeat(39);
        let counts: WordCounts = [(long, 2), (just_fits, 1)].into_iter().collect();
        let table = project_word_lengths(&counts, WordLengthRange::default());
        assert_eq!(table.get_at(39), Some(1));
        assert_eq!(table.total(), 1);
    }

    #[test]
    fn word_length_range_is_bounded() {
        assert_eq!(WordLengthRange::new(WORD_LENGTH_LIMIT).unwrap().end(), WORD_LENGTH_LIMIT);
        assert!(matches!(WordLengthRange::new(0), Err(EngineError::Config(_))));
        let err = WordLengthRange::new(usize::MAX).unwrap_err();
        assert!(err.to_string().contains("between 1 and 1024"));
    }

    #[test]
    fn word_length_range_default_matches_default_bound() {
        assert_eq!(WordLengthRange::default().end(), DEFAULT_MAX_WORD_LENGTH);
        assert!(WordLengthRange::default().contains(39));
        assert!(!WordLengthRange::default().contains(40));
    }
}
