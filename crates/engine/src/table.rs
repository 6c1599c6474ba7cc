//! Dense per-category tables.
//!
//! A table holds exactly one row per category of its universe, in the
//! universe's order, including zero rows. Counters fill rows by index.

use serde::{Deserialize, Serialize};
use stylometry_shared_kernel::RelativeFrequency;

/// One `(category, value)` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row<K, V> {
    pub category: K,
    pub value: V,
}

/// Absolute occurrence counts over a fixed universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceTable<K> {
    rows: Vec<Row<K, usize>>,
}

/// Relative frequencies over a fixed universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable<K> {
    rows: Vec<Row<K, RelativeFrequency>>,
}

impl<K: Eq> Eq for Row<K, usize> {}

impl<K> OccurrenceTable<K> {
    /// A table with a zero row for every category.
    pub fn zeroed(categories: impl IntoIterator<Item = K>) -> Self {
        let rows = categories
            .into_iter()
            .map(|category| Row { category, value: 0 })
            .collect();
        Self { rows }
    }

    #[inline]
    pub fn add_at(&mut self, idx: usize, count: usize) {
        self.rows[idx].value += count;
    }

    pub fn get_at(&self, idx: usize) -> Option<usize> {
        self.rows.get(idx).map(|row| row.value)
    }

    pub fn rows(&self) -> &[Row<K, usize>] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.rows.iter().map(|row| (&row.category, row.value))
    }

    pub fn categories(&self) -> impl Iterator<Item = &K> {
        self.rows.iter().map(|row| &row.category)
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.value).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: PartialEq> OccurrenceTable<K> {
    pub fn get(&self, category: &K) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| &row.category == category)
            .map(|row| row.value)
    }
}

impl<K: Clone> OccurrenceTable<K> {
    /// Sub-table of the rows whose category satisfies `keep`, order preserved.
    pub fn filter(&self, mut keep: impl FnMut(&K) -> bool) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|row| keep(&row.category))
            .cloned()
            .collect();
        Self { rows }
    }

    /// Map every count to `count / total`, `None` if `total` is zero.
    pub(crate) fn to_frequencies(&self, total: usize) -> Option<FrequencyTable<K>> {
        if total == 0 {
            return None;
        }
        let rows = self
            .rows
            .iter()
            .map(|row| {
                RelativeFrequency::ratio(row.value, total).map(|value| Row {
                    category: row.category.clone(),
                    value,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(FrequencyTable { rows })
    }
}

impl<K> FrequencyTable<K> {
    pub fn rows(&self) -> &[Row<K, RelativeFrequency>] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, RelativeFrequency)> {
        self.rows.iter().map(|row| (&row.category, row.value))
    }

    /// Sum of all frequencies; at most 1 when the total covered the table.
    pub fn sum(&self) -> f64 {
        self.rows.iter().map(|row| row.value.value()).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: PartialEq> FrequencyTable<K> {
    pub fn get(&self, category: &K) -> Option<RelativeFrequency> {
        self.rows
            .iter()
            .find(|row| &row.category == category)
            .map(|row| row.value)
    }
}

impl<K: Clone> FrequencyTable<K> {
    /// Sub-table of the rows whose category satisfies `keep`, order preserved.
    pub fn filter(&self, mut keep: impl FnMut(&K) -> bool) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|row| keep(&row.category))
            .cloned()
            .collect();
        Self { rows }
    }
}
