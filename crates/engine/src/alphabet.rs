//! The fixed character universe tracked by the character counter.

/// ASCII punctuation in ASCII order.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

const NOT_TRACKED: u8 = u8::MAX;

/// Ordered set of tracked characters: `A`-`Z`, `0`-`9`, then ASCII punctuation.
///
/// Built once and shared by reference; positions are stable so tables over
/// the alphabet line up across works.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
    positions: [u8; 128],
}

impl Alphabet {
    pub fn new() -> Self {
        let chars: Vec<char> = ('A'..='Z').chain('0'..='9').chain(PUNCTUATION.chars()).collect();
        let mut positions = [NOT_TRACKED; 128];
        for (idx, c) in chars.iter().enumerate() {
            // 68 entries, always below NOT_TRACKED
            positions[*c as usize] = idx as u8;
        }
        Self { chars, positions }
    }

    /// Index of `c` in the alphabet, `None` for untracked characters.
    #[inline]
    pub fn position(&self, c: char) -> Option<usize> {
        if !c.is_ascii() {
            return None;
        }
        match self.positions[c as usize] {
            NOT_TRACKED => None,
            idx => Some(idx as usize),
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.position(c).is_some()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

/// Letters and digits, the rows plotted as "characters".
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}
