//! Stop-word vocabulary and its plain-text list format.
//!
//! A list file holds one word per line. Blank lines and lines starting with
//! `#` are skipped, words are uppercased, and repeated words keep their first
//! position.

use std::path::Path;

use hashbrown::HashMap;

use crate::error::{EngineError, Result};

/// Ordered, duplicate-free set of uppercase stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordVocabulary {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl StopWordVocabulary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a vocabulary from already extracted words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        for word in words {
            vocabulary.insert(word.as_ref());
        }
        vocabulary
    }

    /// Parse the list format described in the module docs.
    pub fn parse(list: &str) -> Self {
        Self::from_words(
            list.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Read and parse a stop-word list file.
    pub fn load(path: &Path) -> Result<Self> {
        let list = std::fs::read_to_string(path).map_err(|source| EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary = Self::parse(&list);
        log::info!("Loaded {} stop words from {}", vocabulary.len(), path.display());
        Ok(vocabulary)
    }

    fn insert(&mut self, word: &str) {
        let word = word.to_uppercase();
        if self.index.contains_key(&word) {
            return;
        }
        self.index.insert(word.clone(), self.words.len());
        self.words.push(word);
    }

    /// Position of `word` (already uppercase) in the vocabulary.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
