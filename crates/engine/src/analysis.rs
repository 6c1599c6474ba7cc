//! Per-work analysis: counting and normalization for one text.

use serde::{Deserialize, Serialize};
use stylometry_shared_kernel::{CharCount, WordCount};

use crate::alphabet::Alphabet;
use crate::character::{CharacterCounter, punctuation};
use crate::error::Result;
use crate::normalizer::normalize;
use crate::stopwords::StopWordVocabulary;
use crate::table::{FrequencyTable, OccurrenceTable};
use crate::tokenizer::tokenize;
use crate::word::{WordCounter, WordCounts, WordLengthRange, project_stopwords, project_word_lengths};

/// Absolute counts of one work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkAnalysis {
    pub work: String,
    pub characters: OccurrenceTable<char>,
    pub punctuation: OccurrenceTable<char>,
    pub stopwords: OccurrenceTable<String>,
    pub word_lengths: OccurrenceTable<usize>,
    pub words: WordCounts,
    /// Sum of the full character table.
    pub total_chars: CharCount,
    /// Sum of the word-length table.
    pub total_words: WordCount,
}

impl WorkAnalysis {
    /// Relative frequencies of every table.
    ///
    /// Fails with `DivisionByZero` when the work has no tracked characters
    /// or no in-range words.
    pub fn frequencies(&self, top_words: usize) -> Result<WorkFrequencies> {
        let chars = self.total_chars.value();
        let words = self.total_words.value();
        Ok(WorkFrequencies {
            work: self.work.clone(),
            char_freq: normalize(&self.characters, chars, "characters")?,
            punc_freq: normalize(&self.punctuation, chars, "punctuation")?,
            stop_freq: normalize(&self.stopwords, words, "stop words")?,
            word_len_freq: normalize(&self.word_lengths, words, "word lengths")?,
            total_chars: self.total_chars,
            total_words: self.total_words,
            top_words: self.words.most_common(top_words),
        })
    }
}

/// One report row. Field order is the report's column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkFrequencies {
    pub work: String,
    pub char_freq: FrequencyTable<char>,
    pub punc_freq: FrequencyTable<char>,
    pub stop_freq: FrequencyTable<String>,
    pub word_len_freq: FrequencyTable<usize>,
    pub total_chars: CharCount,
    pub total_words: WordCount,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_words: Vec<(String, usize)>,
}

/// Shared, immutable analysis setup: alphabet, vocabulary and counters.
#[derive(Debug, Clone)]
pub struct Analyzer {
    alphabet: Alphabet,
    vocabulary: StopWordVocabulary,
    words: WordCounter,
    lengths: WordLengthRange,
}

impl Analyzer {
    /// Fails with `EngineError::Config` when `max_word_length` is outside
    /// `1..=WORD_LENGTH_LIMIT`.
    pub fn new(vocabulary: StopWordVocabulary, max_word_length: usize) -> Result<Self> {
        Ok(Self {
            alphabet: Alphabet::new(),
            vocabulary,
            words: WordCounter::new()?,
            lengths: WordLengthRange::new(max_word_length)?,
        })
    }

    /// Count everything in `text`; never fails.
    pub fn count(&self, work: &str, text: &str) -> WorkAnalysis {
        let tokens = tokenize(text);

        let characters = CharacterCounter::new(&self.alphabet).count(&tokens);
        let punctuation = punctuation(&characters);

        let words = self.words.count(&tokens);
        let stopwords = project_stopwords(&words, &self.vocabulary);
        let word_lengths = project_word_lengths(&words, self.lengths);

        let total_chars = CharCount::new(characters.total());
        let total_words = WordCount::new(word_lengths.total());
        log::debug!(
            "{work}: {} tokens, {total_chars} characters, {total_words} words ({} distinct)",
            tokens.len(),
            words.len()
        );

        WorkAnalysis {
            work: work.to_string(),
            characters,
            punctuation,
            stopwords,
            word_lengths,
            words,
            total_chars,
            total_words,
        }
    }

    /// Count and normalize `text` into one report row.
    pub fn analyze(&self, work: &str, text: &str, top_words: usize) -> Result<WorkFrequencies> {
        self.count(work, text)
            .frequencies(top_words)
            .map_err(|e| e.in_work(work))
    }
}
