//! CLI for multimodal evaluation reports.
//!
//! This crate provides the command-line interface for inspecting
//! collected evaluation reports, including the `list` subcommand that
//! mirrors what the HTTP endpoint serves.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use multimodal_eval_reports::{
    collect_from_dir, collect_reports, markdown, DirSource, EvalSummary, DEFAULT_REPORTS_DIR,
};

/// Multimodal eval report CLI.
#[derive(Parser, Debug)]
#[command(name = "multimodal-eval")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List collected evaluation reports, newest filename first.
    ///
    /// Scans the report directory for `*.json` run files and prints one
    /// line per parseable report. Files that cannot be used are reported
    /// as warnings on stderr.
    List {
        /// Report directory override (optional).
        #[arg(short, long, env = "MULTIMODAL_EVAL_DIR")]
        dir: Option<PathBuf>,

        /// Output format (default: text).
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Verbose output.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show report system status and configuration.
    Status {
        /// Show detailed status information.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Output format for the `list` subcommand.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// One line per report.
    Text,
    /// Pretty-printed JSON array of summaries.
    Json,
    /// Markdown summary table.
    Markdown,
}

/// Run the CLI with the given arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            dir,
            format,
            verbose,
        } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_DIR));
            let outcome = collect_from_dir(&dir)?;

            for skip in &outcome.skipped {
                eprintln!("warning: skipping {}: {}", skip.file, skip.reason);
            }

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&outcome.summaries)?)
                }
                OutputFormat::Markdown => {
                    print!("{}", markdown::generate_summary(&outcome.summaries))
                }
                OutputFormat::Text => {
                    for summary in &outcome.summaries {
                        println!("{}", summary_line(summary));
                        if verbose {
                            let mut metrics: Vec<_> = summary.summary.iter().collect();
                            metrics.sort_by(|a, b| a.0.cmp(b.0));
                            for (name, value) in metrics {
                                println!("    {name} = {value}");
                            }
                        }
                    }
                    println!(
                        "{} reports, {} skipped",
                        outcome.summaries.len(),
                        outcome.skipped.len()
                    );
                }
            }

            Ok(())
        }
        Commands::Status { detailed } => {
            println!("Multimodal Eval Report System");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));

            let dir = std::env::var("MULTIMODAL_EVAL_DIR")
                .unwrap_or_else(|_| DEFAULT_REPORTS_DIR.to_string());
            let source = DirSource::new(dir);
            println!("Report directory: {}", source.root().display());

            match collect_reports(&source) {
                Ok(outcome) => {
                    println!(
                        "Reports: {} parseable, {} skipped",
                        outcome.summaries.len(),
                        outcome.skipped.len()
                    );
                    if detailed {
                        for summary in &outcome.summaries {
                            println!("  - {}", summary_line(summary));
                        }
                        for skip in &outcome.skipped {
                            println!("  ! {}: {}", skip.file, skip.reason);
                        }
                    }
                }
                Err(e) => println!("Reports: directory not found ({e})"),
            }

            Ok(())
        }
    }
}

fn summary_line(summary: &EvalSummary) -> String {
    let generated = summary
        .generated_at
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| "unknown time".to_string());
    format!(
        "{}  {} on {}  ({})",
        summary.slug, summary.model, summary.benchmark, generated
    )
}
