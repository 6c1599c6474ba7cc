use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Md,
    Json,
    Yaml,
}

/// A comparison section of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Letters and digits.
    Characters,
    Punctuation,
    Stopwords,
    WordLengths,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Characters, Self::Punctuation, Self::Stopwords, Self::WordLengths];

    pub fn title(self) -> &'static str {
        match self {
            Self::Characters => "Relative character frequencies",
            Self::Punctuation => "Relative punctuation frequencies",
            Self::Stopwords => "Relative stop-word frequencies",
            Self::WordLengths => "Relative word-length frequencies",
        }
    }

    pub fn category_label(self) -> &'static str {
        match self {
            Self::Characters => "character",
            Self::Punctuation => "punctuation",
            Self::Stopwords => "stopword",
            Self::WordLengths => "wordlength",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Characters => "characters",
            Self::Punctuation => "punctuation",
            Self::Stopwords => "stopwords",
            Self::WordLengths => "word-lengths",
        };
        f.write_str(name)
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "characters" | "chars" | "char" => Ok(Self::Characters),
            "punctuation" | "punc" => Ok(Self::Punctuation),
            "stopwords" | "stop" => Ok(Self::Stopwords),
            "word-lengths" | "wordlengths" | "lengths" => Ok(Self::WordLengths),
            other => Err(format!("Unknown section: {other}")),
        }
    }
}
