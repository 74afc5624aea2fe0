use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use geoseed::cli::{Args, Command};
use geoseed::models::{OutcomeStatus, RunSummary};
use geoseed::DatasetProcessor;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(summary) => {
            report(&summary);
            if summary.failures() > 0 {
                process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<RunSummary> {
    let config = args.config();
    let processor = DatasetProcessor::new(config).context("failed to initialize processor")?;

    let summary = match args.command {
        Some(Command::Seed) => processor.seed_legacy(),
        Some(Command::Clean) => processor.clean_meteorites(),
        Some(Command::Process) | None => processor.process_all(),
    };
    Ok(summary)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn report(summary: &RunSummary) {
    println!("{}", "Seeding Summary".bright_green().bold());
    for outcome in &summary.outcomes {
        match &outcome.status {
            OutcomeStatus::Written { path, records } => println!(
                "  {} {} -> {} ({} records)",
                outcome.label.bright_cyan(),
                outcome.input,
                path.display(),
                records.to_string().bright_white().bold()
            ),
            OutcomeStatus::MissingInput => println!(
                "  {} {} {}",
                outcome.label.bright_cyan(),
                "skipped:".bright_yellow(),
                format!("no input matching '{}'", outcome.input)
            ),
            OutcomeStatus::Empty => println!(
                "  {} {} {}",
                outcome.label.bright_cyan(),
                "skipped:".bright_yellow(),
                "no records survived normalization"
            ),
            OutcomeStatus::Failed { reason } => println!(
                "  {} {} {}",
                outcome.label.bright_cyan(),
                "failed:".bright_red().bold(),
                reason
            ),
        }
    }
    println!(
        "  {} {} files, {} records",
        "Total:".bright_cyan(),
        summary.files_written().to_string().bright_white().bold(),
        summary.records_written().to_string().bright_white().bold()
    );
}
