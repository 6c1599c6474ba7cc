use std::{fmt::Display, str::FromStr};
use stylometry_engine::word::WORD_LENGTH_LIMIT;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a thread count constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

/// Parse a `--max-word-length` bound within [1, `WORD_LENGTH_LIMIT`].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is out of range.
pub fn parse_word_length(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(WORD_LENGTH_LIMIT))
}

/// Work paths listed in a `--works-from` file.
///
/// One path per line; blank lines and `#` comments are skipped.
pub fn parse_work_list(content: &str) -> Vec<std::path::PathBuf> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(std::path::PathBuf::from)
        .collect()
}
