use crate::alphabet::Alphabet;
use crate::table::OccurrenceTable;

/// Counts alphabet characters across a token sequence.
pub struct CharacterCounter<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> CharacterCounter<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Occurrence of every alphabet character in the uppercased tokens.
    ///
    /// Characters outside the alphabet (lowercase leftovers of the Unicode
    /// uppercase mapping, whitespace, non-ASCII) are ignored.
    pub fn count<S: AsRef<str>>(&self, tokens: &[S]) -> OccurrenceTable<char> {
        let mut table = OccurrenceTable::zeroed(self.alphabet.chars().iter().copied());
        for token in tokens {
            for c in token.as_ref().chars().flat_map(char::to_uppercase) {
                if let Some(idx) = self.alphabet.position(c) {
                    table.add_at(idx, 1);
                }
            }
        }
        table
    }
}

/// Rows of `table` that are ASCII punctuation.
pub fn punctuation(table: &OccurrenceTable<char>) -> OccurrenceTable<char> {
    table.filter(char::is_ascii_punctuation)
}
