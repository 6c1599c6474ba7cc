use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{Corpus, stylometry};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_stylometry"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--stopwords"))
        .stdout(predicate::str::contains("--section"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_stylometry"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_works_is_fatal() {
    Command::new(env!("CARGO_BIN_EXE_stylometry"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No works to analyze"));
}

#[test]
fn missing_work_is_reported_but_run_succeeds() {
    let corpus = Corpus::new();
    stylometry(&corpus)
        .args(["--format", "csv"])
        .arg(corpus.file("hamlet.tok"))
        .arg(corpus.file("lost.tok"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Error processing"))
        .stderr(predicate::str::contains("lost.tok"))
        .stdout(predicate::str::contains("hamlet.tok"));
}

#[test]
fn strict_mode_fails_on_missing_work() {
    let corpus = Corpus::new();
    stylometry(&corpus)
        .arg("--strict")
        .arg(corpus.file("hamlet.tok"))
        .arg(corpus.file("lost.tok"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("lost.tok"));
}

#[test]
fn unreadable_stopword_list_is_fatal() {
    let corpus = Corpus::new();
    Command::new(env!("CARGO_BIN_EXE_stylometry"))
        .arg("--stopwords")
        .arg(corpus.file("no-such-list.txt"))
        .arg(corpus.file("hamlet.tok"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load stop words"));
}

#[test]
fn empty_work_is_skipped() {
    let corpus = Corpus::new();
    corpus.write("blank.tok", "\n\n");
    stylometry(&corpus)
        .args(["--format", "json"])
        .arg(corpus.file("blank.tok"))
        .arg(corpus.file("emma.tok"))
        .assert()
        .success()
        .stderr(predicate::str::contains("total is zero"))
        .stdout(predicate::str::contains("emma.tok"))
        .stdout(predicate::str::contains("blank.tok").not());
}

#[test]
fn rejects_zero_max_word_length() {
    Command::new(env!("CARGO_BIN_EXE_stylometry"))
        .args(["--max-word-length", "0", "work.tok"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn rejects_oversized_max_word_length() {
    Command::new(env!("CARGO_BIN_EXE_stylometry"))
        .args(["--max-word-length", "18446744073709551615", "work.tok"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at most 1024"));
}
