// tests/common/mod.rs
//! Shared fixtures for CLI tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub const STOPWORDS: &str = "# common English function words\nthe\nand\nof\na\nto\n";

/// A temporary directory holding a few works and a stop-word list.
pub struct Corpus {
    dir: TempDir,
}

impl Corpus {
    pub fn new() -> Self {
        let corpus = Self { dir: TempDir::new().unwrap() };
        corpus.write("stopwords.txt", STOPWORDS);
        corpus.write("hamlet.tok", "to be , or not to be\nthat is the question\n");
        corpus.write("emma.tok", "Emma Woodhouse , handsome , clever , and rich\n");
        corpus
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn file(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }
}

/// The binary under test with the corpus stop-word list preselected.
pub fn stylometry(corpus: &Corpus) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylometry"));
    cmd.arg("--stopwords").arg(corpus.file("stopwords.txt"));
    cmd
}
