use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use md_cleaner::{BatchSummary, FileOutcome, MarkdownCleaner};
use tracing_subscriber::EnvFilter;

/// Clean and format Markdown files
#[derive(Parser, Debug)]
#[command(name = "md-cleaner")]
#[command(version, about, long_about = None)]
struct Args {
    /// Markdown files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Modify files in place
    #[arg(short, long)]
    in_place: bool,

    /// Disable fixing spacing
    #[arg(long)]
    no_spacing: bool,

    /// Disable header standardization
    #[arg(long)]
    no_headers: bool,

    /// Disable list fixing
    #[arg(long)]
    no_lists: bool,

    /// Keep multiple blank lines
    #[arg(long)]
    keep_blanks: bool,

    /// Extract plain text, removing all markdown formatting
    #[arg(short, long)]
    extract_text: bool,

    /// Config file (.json/.toml) or inline config; flags override it
    #[arg(short, long)]
    config: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    // Per-file failures go to stderr directly, so their warn! is verbose-only.
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_cleaner(args: &Args) -> Result<MarkdownCleaner, md_cleaner::ConfigError> {
    let mut builder = MarkdownCleaner::new();
    if let Some(source) = &args.config {
        builder = builder.with_config_source(source);
    }
    // Flags only ever switch behavior away from the default.
    if args.no_spacing {
        builder = builder.fix_spacing(false);
    }
    if args.no_headers {
        builder = builder.standardize_headers(false);
    }
    if args.no_lists {
        builder = builder.fix_lists(false);
    }
    if args.keep_blanks {
        builder = builder.remove_multiple_blanks(false);
    }
    if args.extract_text {
        builder = builder.extract_text(true);
    }
    builder.build()
}

#[cfg(feature = "multi_thread")]
fn run(args: &Args, cleaner: &MarkdownCleaner) -> Vec<FileOutcome> {
    md_cleaner::process_files_parallel(&args.files, cleaner, args.in_place)
}

#[cfg(not(feature = "multi_thread"))]
fn run(args: &Args, cleaner: &MarkdownCleaner) -> Vec<FileOutcome> {
    md_cleaner::process_files(&args.files, cleaner, args.in_place)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let cleaner = match build_cleaner(&args) {
        Ok(cleaner) => cleaner,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            return ExitCode::from(2);
        }
    };
    tracing::info!(?cleaner, files = args.files.len(), "starting");

    let outcomes = run(&args, &cleaner);
    for outcome in &outcomes {
        match &outcome.result {
            Ok(Some(text)) => print!("{text}"),
            Ok(None) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    tracing::info!(processed = summary.processed, failed = summary.failed, "done");
    if summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
