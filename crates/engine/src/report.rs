//! Cross-work report: one row per work plus per-section comparison matrices.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use stylometry_shared_kernel::RelativeFrequency;

use crate::alphabet::is_alphanumeric;
use crate::analysis::WorkFrequencies;
use crate::options::Section;
use crate::table::FrequencyTable;

/// Report rows in work-list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub works: Vec<WorkFrequencies>,
}

/// Frequencies of one section for every work.
///
/// `values[row][col]` is the frequency of `categories[row]` in `works[col]`.
/// Categories that are zero in every work are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub section: Section,
    pub works: Vec<String>,
    pub categories: Vec<String>,
    pub values: Vec<Vec<RelativeFrequency>>,
}

impl Report {
    pub fn new(works: Vec<WorkFrequencies>) -> Self {
        Self { works }
    }

    pub fn work_names(&self) -> Vec<String> {
        self.works.iter().map(|w| w.work.clone()).collect()
    }

    pub fn get(&self, work: &str) -> Option<&WorkFrequencies> {
        self.works.iter().find(|w| w.work == work)
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Build the section matrix.
    ///
    /// Rows follow the order in which categories first appear across the
    /// works, so rows produced with different vocabularies or word-length
    /// bounds line up by label. A category missing from a work reads as zero.
    pub fn comparison(&self, section: Section) -> Comparison {
        let works = self.work_names();

        let mut categories: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut values: Vec<Vec<RelativeFrequency>> = Vec::new();
        for (col, work) in self.works.iter().enumerate() {
            for (category, freq) in section_column(work, section) {
                let row = *index.entry(category).or_insert_with_key(|key| {
                    categories.push(key.clone());
                    values.push(vec![RelativeFrequency::ZERO; works.len()]);
                    categories.len() - 1
                });
                values[row][col] = freq;
            }
        }

        let (categories, values): (Vec<String>, Vec<Vec<RelativeFrequency>>) = categories
            .into_iter()
            .zip(values)
            .filter(|(_, cells)| !cells.iter().all(|f| f.is_zero()))
            .unzip();

        Comparison { section, works, categories, values }
    }
}

fn section_column(work: &WorkFrequencies, section: Section) -> Vec<(String, RelativeFrequency)> {
    match section {
        Section::Characters => labelled(&work.char_freq.filter(|c| is_alphanumeric(*c))),
        Section::Punctuation => labelled(&work.punc_freq),
        Section::Stopwords => labelled(&work.stop_freq),
        Section::WordLengths => labelled(&work.word_len_freq),
    }
}

fn labelled<K: ToString>(table: &FrequencyTable<K>) -> Vec<(String, RelativeFrequency)> {
    table.iter().map(|(k, f)| (k.to_string(), f)).collect()
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate `(category, values per work)`.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[RelativeFrequency])> {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }
}
