use predicates::prelude::*;
use serde_json::Value;

use crate::common::{Corpus, stylometry};

fn json_report(corpus: &Corpus, extra: &[&str]) -> Value {
    let output = stylometry(corpus)
        .args(["--format", "json"])
        .args(extra)
        .arg(corpus.file("hamlet.tok"))
        .arg(corpus.file("emma.tok"))
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn json_rows_follow_work_order_and_column_names() {
    let corpus = Corpus::new();
    let report = json_report(&corpus, &[]);
    let works = report["works"].as_array().unwrap();
    assert_eq!(works.len(), 2);
    assert_eq!(works[0]["work"], "hamlet.tok");
    assert_eq!(works[1]["work"], "emma.tok");
    for key in ["work", "char_freq", "punc_freq", "stop_freq", "word_len_freq"] {
        assert!(works[0].get(key).is_some(), "missing column {key}");
    }
    assert!(works[0].get("top_words").is_none());
}

#[test]
fn json_stop_word_frequencies_share_the_word_total() {
    let corpus = Corpus::new();
    let report = json_report(&corpus, &[]);
    let hamlet = &report["works"][0];

    // to be , or not to be / that is the question: ten words, the comma is not one.
    assert_eq!(hamlet["total_words"], 10);
    let stop: Vec<(String, f64)> = hamlet["stop_freq"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| (row["category"].as_str().unwrap().to_string(), row["value"].as_f64().unwrap()))
        .collect();
    let categories: Vec<&str> = stop.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(categories, vec!["THE", "AND", "OF", "A", "TO"]);
    assert!((stop[0].1 - 1.0 / 10.0).abs() < 1e-12);
    assert!((stop[4].1 - 2.0 / 10.0).abs() < 1e-12);
}

#[test]
fn top_words_are_listed_when_requested() {
    let corpus = Corpus::new();
    let report = json_report(&corpus, &["--top-words", "2"]);
    let top = report["works"][0]["top_words"].as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0][0], "BE");
    assert_eq!(top[0][1], 2);
    assert_eq!(top[1][0], "TO");
}

#[test]
fn csv_lists_selected_section_only() {
    let corpus = Corpus::new();
    stylometry(&corpus)
        .args(["--format", "csv", "--section", "punctuation"])
        .arg(corpus.file("hamlet.tok"))
        .arg(corpus.file("emma.tok"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("section,category,work,frequency\n"))
        .stdout(predicate::str::contains("punctuation,\",\",hamlet.tok,"))
        .stdout(predicate::str::contains("punctuation,\",\",emma.tok,"))
        .stdout(predicate::str::contains("stopwords,").not());
}

#[test]
fn markdown_has_one_heading_per_section() {
    let corpus = Corpus::new();
    stylometry(&corpus)
        .args(["--format", "md", "--section", "stopwords,word-lengths"])
        .arg(corpus.file("hamlet.tok"))
        .arg(corpus.file("emma.tok"))
        .assert()
        .success()
        .stdout(predicate::str::contains("### Relative stop-word frequencies"))
        .stdout(predicate::str::contains("### Relative word-length frequencies"))
        .stdout(predicate::str::contains("| stopword | hamlet.tok | emma.tok |"))
        .stdout(predicate::str::contains("Relative character frequencies").not());
}

#[test]
fn table_is_the_default_format() {
    let corpus = Corpus::new();
    stylometry(&corpus)
        .arg(corpus.file("emma.tok"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Relative character frequencies"))
        .stdout(predicate::str::contains("Relative punctuation frequencies"))
        .stdout(predicate::str::contains("emma.tok"));
}

#[test]
fn output_file_receives_the_report() {
    let corpus = Corpus::new();
    let out = corpus.path().join("report.yaml");
    stylometry(&corpus)
        .args(["--format", "yaml", "--output"])
        .arg(&out)
        .arg(corpus.file("emma.tok"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("work: emma.tok"));
    assert!(written.contains("word_len_freq:"));
}

#[test]
fn works_from_file_is_appended() {
    let corpus = Corpus::new();
    let list = corpus.write("works.txt", &format!("# corpus\n{}\n", corpus.file("emma.tok")));
    let output = stylometry(&corpus)
        .args(["--format", "json", "--works-from"])
        .arg(&list)
        .arg(corpus.file("hamlet.tok"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["works"][0]["work"], "hamlet.tok");
    assert_eq!(report["works"][1]["work"], "emma.tok");
}
