use crate::error::{EngineError, Result};
use crate::table::{FrequencyTable, OccurrenceTable};

/// Divide every count of `table` by `total`.
///
/// `what` names the table in the error raised for a zero total. The total
/// is supplied by the caller: character and punctuation tables share the
/// full character total, stop-word and word-length tables share the word
/// total, so frequencies of a sub-table may sum to less than one.
pub fn normalize<K: Clone>(table: &OccurrenceTable<K>, total: usize, what: &'static str) -> Result<FrequencyTable<K>> {
    table
        .to_frequencies(total)
        .ok_or(EngineError::DivisionByZero { what })
}
