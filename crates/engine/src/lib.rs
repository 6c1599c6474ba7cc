// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

pub mod alphabet;
pub mod analysis;
pub mod character;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod options;
pub mod processor;
pub mod report;
pub mod stopwords;
pub mod table;
pub mod tokenizer;
pub mod word;

use crate::analysis::{Analyzer, WorkFrequencies};
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::report::Report;
use crate::stopwords::StopWordVocabulary;

/// Outcome of a batch run.
#[derive(Debug)]
pub struct RunResult {
    /// Successfully analyzed works, in work-list order.
    pub report: Report,
    /// Works that were skipped, with the reason.
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Load the stop-word vocabulary named by the config, or an empty one.
///
/// # Errors
///
/// Returns an error if the configured list file cannot be read.
pub fn load_vocabulary(config: &Config) -> Result<StopWordVocabulary> {
    match &config.stopwords {
        Some(path) => StopWordVocabulary::load(path),
        None => {
            log::warn!("No stop-word list given; stop-word frequencies will be empty");
            Ok(StopWordVocabulary::empty())
        }
    }
}

/// Analyze every configured work.
///
/// Works run in parallel on a rayon pool of `config.jobs` threads and are
/// reported in the order they were configured. A failing work is skipped and
/// recorded in `RunResult::errors` unless `config.strict` is set.
///
/// # Errors
///
/// Returns an error when no works are configured, the thread pool cannot be
/// built, or (in strict mode) any work fails.
pub fn run(config: &Config, vocabulary: StopWordVocabulary) -> Result<RunResult> {
    if config.works.is_empty() {
        return Err(EngineError::NoWorks);
    }

    let analyzer = Analyzer::new(vocabulary, config.max_word_length)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;

    let started = Instant::now();
    let outcomes: Vec<(PathBuf, Result<WorkFrequencies>)> = pool.install(|| {
        config
            .works
            .par_iter()
            .map(|path| {
                let outcome = processor::process_work(path, &analyzer, config.top_words);
                (path.clone(), outcome)
            })
            .collect()
    });
    log::debug!(
        "Analyzed {} work(s) on {} thread(s) in {:?}",
        outcomes.len(),
        pool.current_num_threads(),
        started.elapsed()
    );

    let mut rows = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(row) => {
                log::info!(
                    "Analyzed {} ({} characters, {} words)",
                    row.work,
                    row.total_chars,
                    row.total_words
                );
                rows.push(row);
            }
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                log::warn!("Skipping {}: {e}", path.display());
                errors.push((path, e));
            }
        }
    }

    Ok(RunResult {
        report: Report::new(rows),
        errors,
    })
}
