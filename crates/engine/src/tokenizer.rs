/// Split `text` on the space character.
///
/// Only `' '` separates tokens; runs of spaces produce empty tokens and an
/// empty input yields a single empty token. Newlines are expected to have
/// been turned into spaces by the reader.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}
