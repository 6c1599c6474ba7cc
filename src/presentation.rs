// src/presentation.rs
use crate::config::Config;
use comfy_table::{presets::UTF8_FULL, CellAlignment, ContentArrangement, Table};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use stylometry_engine::options::OutputFormat;
use stylometry_engine::report::{Comparison, Report};
use stylometry_shared_kernel::{ErrorContext, OutputError, RelativeFrequency, Result};

/// Decimal places of frequencies in text formats.
const PRECISION: usize = 6;

/// Render the report in the configured format.
///
/// # Errors
/// Returns an error if JSON or YAML serialization fails.
pub fn render(report: &Report, config: &Config) -> Result<String> {
    let out = match config.format {
        OutputFormat::Json => render_json(report)?,
        OutputFormat::Yaml => render_yaml(report)?,
        OutputFormat::Md => render_markdown(report, config),
        OutputFormat::Csv => render_sv(report, config, ','),
        OutputFormat::Tsv => render_sv(report, config, '\t'),
        OutputFormat::Table => render_table(report, config),
    };
    Ok(out)
}

/// Write rendered output to `path`, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the file or stdout cannot be written.
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| OutputError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("Report written to {}", path.display());
            Ok(())
        }
        None => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("Failed to write report to stdout"),
    }
}

fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

fn render_yaml(report: &Report) -> Result<String> {
    Ok(serde_yaml::to_string(report)?)
}

fn frequency(f: RelativeFrequency) -> String {
    format!("{f:.PRECISION$}")
}

fn render_table(report: &Report, config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "stylometry v{} · works={} · jobs={}",
        crate::VERSION,
        report.works.len(),
        config.jobs
    );

    let mut totals = new_table();
    totals.set_header(["work", "characters", "words"]);
    for work in &report.works {
        totals.add_row([work.work.clone(), work.total_chars.to_string(), work.total_words.to_string()]);
    }
    right_align(&mut totals, 1);
    let _ = writeln!(out, "\n{totals}");

    for &section in &config.sections {
        let comparison = report.comparison(section);
        let _ = writeln!(out, "\n{}", section.title());
        if comparison.is_empty() {
            let _ = writeln!(out, "(no occurrences)");
            continue;
        }
        let mut table = new_table();
        let mut header = vec![section.category_label().to_string()];
        header.extend(comparison.works.iter().cloned());
        table.set_header(header);
        for (category, cells) in comparison.rows() {
            let mut row = vec![category.to_string()];
            row.extend(cells.iter().copied().map(frequency));
            table.add_row(row);
        }
        right_align(&mut table, 1);
        let _ = writeln!(out, "{table}");
    }

    if config.top_words > 0 {
        for work in &report.works {
            let _ = writeln!(out, "\nMost frequent words in {}", work.work);
            let mut table = new_table();
            table.set_header(["rank", "word", "count"]);
            for (rank, (word, count)) in work.top_words.iter().enumerate() {
                table.add_row([(rank + 1).to_string(), word.clone(), count.to_string()]);
            }
            let _ = writeln!(out, "{table}");
        }
    }

    out
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Right-align every column from `first` on.
fn right_align(table: &mut Table, first: usize) {
    for column in table.column_iter_mut().skip(first) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn render_markdown(report: &Report, config: &Config) -> String {
    let mut out = String::new();
    for &section in &config.sections {
        let comparison = report.comparison(section);
        let _ = writeln!(out, "### {}", section.title());
        let _ = writeln!(out);
        write_markdown_comparison(&mut out, &comparison);
        let _ = writeln!(out);
    }

    if config.top_words > 0 {
        for work in &report.works {
            let _ = writeln!(out, "### Most frequent words in {}", md_escape(&work.work));
            let _ = writeln!(out);
            let _ = writeln!(out, "| Rank | Word | Count |");
            let _ = writeln!(out, "|---:|:---|---:|");
            for (rank, (word, count)) in work.top_words.iter().enumerate() {
                let _ = writeln!(out, "| {} | {} | {count} |", rank + 1, md_escape(word));
            }
            let _ = writeln!(out);
        }
    }
    out
}

fn write_markdown_comparison(out: &mut String, comparison: &Comparison) {
    let mut header = format!("| {} |", comparison.section.category_label());
    let mut separator = String::from("|:---|");
    for work in &comparison.works {
        let _ = write!(header, " {} |", md_escape(work));
        separator.push_str("---:|");
    }
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{separator}");

    for (category, cells) in comparison.rows() {
        let mut row = format!("| {} |", md_escape(category));
        for &cell in cells {
            let _ = write!(row, " {} |", frequency(cell));
        }
        let _ = writeln!(out, "{row}");
    }
}

fn md_escape(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Long format: one line per (section, category, work).
fn render_sv(report: &Report, config: &Config, delimiter: char) -> String {
    let sep = delimiter.to_string();
    let mut out = String::new();
    let _ = writeln!(out, "{}", ["section", "category", "work", "frequency"].join(sep.as_str()));

    for &section in &config.sections {
        let comparison = report.comparison(section);
        for (category, cells) in comparison.rows() {
            for (work, &cell) in comparison.works.iter().zip(cells) {
                let fields = [
                    section.to_string(),
                    sv_escape(category, delimiter),
                    sv_escape(work, delimiter),
                    frequency(cell),
                ];
                let _ = writeln!(out, "{}", fields.join(sep.as_str()));
            }
        }
    }
    out
}

/// Quote a field when it contains the delimiter, a quote or a line break.
fn sv_escape(field: &str, delimiter: char) -> String {
    if field.contains([delimiter, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
