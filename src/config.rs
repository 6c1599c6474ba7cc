// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options;
use crate::parsers::parse_work_list;
use std::path::{Path, PathBuf};
pub use stylometry_engine::config::{Config, ConfigBuilder};
use stylometry_engine::error::EngineError;
use stylometry_engine::options as engine_options;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let mut works = args.works;
        if let Some(list) = &args.input.works_from {
            works.extend(read_work_list(list)?);
        }

        let sections: Vec<engine_options::Section> = if args.output.sections.is_empty() {
            engine_options::Section::ALL.to_vec()
        } else {
            dedup_sections(args.output.sections)
        };
        let format: engine_options::OutputFormat = args.output.format.into();
        let jobs = args.behavior.jobs.unwrap_or_else(num_cpus::get);

        ConfigBuilder::default()
            .works(works)
            .stopwords(args.input.stopwords)
            .max_word_length(args.input.max_word_length)
            .jobs(jobs)
            .strict(args.behavior.strict)
            .format(format)
            .sections(sections)
            .top_words(args.output.top_words.unwrap_or(0))
            .output_path(args.output.output)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()).into())
    }
}

fn read_work_list(path: &Path) -> Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("cannot read work list '{}': {e}", path.display()))
    })?;
    let works = parse_work_list(&content);
    log::debug!("Read {} work path(s) from {}", works.len(), path.display());
    Ok(works)
}

/// Keep the first occurrence of each section, in the order given.
fn dedup_sections(sections: Vec<options::Section>) -> Vec<engine_options::Section> {
    let mut out: Vec<engine_options::Section> = Vec::with_capacity(sections.len());
    for section in sections.into_iter().map(engine_options::Section::from) {
        if !out.contains(&section) {
            out.push(section);
        }
    }
    out
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Csv,
    Tsv,
    Md,
    Json,
    Yaml
);
map_enum!(
    options::Section,
    engine_options::Section,
    Characters,
    Punctuation,
    Stopwords,
    WordLengths
);
