// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::{
    options::{LogLevel, OutputFormat, Section},
    parsers,
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "stylometry",
    version = crate::VERSION,
    about = "Compare character, punctuation, stop-word and word-length frequencies across works"
)]
pub struct Args {
    /// Work files, analyzed and reported in the given order
    #[arg(value_hint = ValueHint::FilePath)]
    pub works: Vec<PathBuf>,

    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

/// Where works and the stop-word list come from
#[derive(clap::Args, Debug)]
pub struct InputOptions {
    /// Read additional work paths from a file, one per line
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub works_from: Option<PathBuf>,

    /// Stop-word list: one word per line, `#` starts a comment
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub stopwords: Option<PathBuf>,

    /// Words of this length or longer are left out of the word-length table (1-1024)
    #[arg(long, default_value_t = 40, value_parser = parsers::parse_word_length, help_heading = "Input")]
    pub max_word_length: usize,
}

/// Output-related options
#[derive(clap::Args, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Sections to report (repeatable or comma separated; default: all)
    #[arg(long = "section", value_enum, value_delimiter = ',', help_heading = "Output")]
    pub sections: Vec<Section>,

    /// Also list the N most frequent words of each work
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Output")]
    pub top_words: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

/// Execution options
#[derive(clap::Args, Debug)]
pub struct BehaviorOptions {
    /// Worker threads (default: number of CPUs)
    #[arg(long, short = 'j', value_parser = parsers::parse_jobs, help_heading = "Behavior")]
    pub jobs: Option<usize>,

    /// Abort on the first failing work instead of skipping it
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Log verbosity on stderr
    #[arg(long, value_enum, default_value = "warn", help_heading = "Behavior")]
    pub log_level: LogLevel,
}
