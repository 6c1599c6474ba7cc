use anyhow::Context as _;
use clap::Parser;
use std::process::ExitCode;
use stylometry::args::Args;
use stylometry::config::Config;
use stylometry::presentation;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.behavior.log_level.into());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber; it also picks up `log` records from the library crates.
fn init_logging(level: tracing::Level) {
    let result = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to install log subscriber: {e}");
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    tracing::debug!(
        works = config.works.len(),
        jobs = config.jobs,
        strict = config.strict,
        "configuration resolved"
    );

    let vocabulary = stylometry_engine::load_vocabulary(&config).context("Failed to load stop words")?;
    let result = stylometry_engine::run(&config, vocabulary)?;

    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }

    let rendered = presentation::render(&result.report, &config)?;
    presentation::write_output(&rendered, config.output_path.as_deref())?;
    Ok(())
}
