use std::path::Path;

use crate::analysis::{Analyzer, WorkFrequencies};
use crate::error::{EngineError, Result};

/// Read a work file, turning line breaks into spaces.
pub fn read_work(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(join_lines(&content))
}

/// Every line ending (`\r\n`, `\n` or a lone `\r`) becomes a single space,
/// including the last one.
fn join_lines(content: &str) -> String {
    content.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Work name shown in reports: the file name of `path`.
pub fn work_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and analyze a single work file.
pub fn process_work(path: &Path, analyzer: &Analyzer, top_words: usize) -> Result<WorkFrequencies> {
    let work = work_name(path);
    let text = read_work(path).map_err(|e| e.in_work(work.as_str()))?;
    analyzer.analyze(&work, &text, top_words)
}
