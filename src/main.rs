// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, written to stderr)
// 3. Run the clone -> find -> copy -> clean up pipeline
// 4. Print a summary and exit with the proper code (0 = success, 1 = error)
//
// Everything runs on the main thread, one step after the other. The only
// long wait is `git clone`, whose progress is shown directly in the terminal.
// =============================================================================

mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - typed errors
mod markdown; // src/markdown/ - finding and copying Markdown files
mod pipeline; // src/pipeline.rs - runs the steps in order
mod repo; // src/repo/ - URL handling, cloning, temporary clone

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use pipeline::{Harvester, RunSummary};
use repo::GitFetcher;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also come through here, on stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let Some(repo_url) = cli.repo_url.as_deref() else {
        eprintln!("{}", cli::USAGE);
        eprintln!("{}", cli::EXAMPLE);
        return ExitCode::FAILURE;
    };

    init_tracing();

    match run(&cli, repo_url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr so that --json output on stdout stays parseable.
// RUST_LOG overrides the default filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "md_harvest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli, repo_url: &str) -> Result<()> {
    let harvester = Harvester::new(GitFetcher::with_program(&cli.git), &cli.base_dir);
    let summary = harvester.run(repo_url)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

// Prints the human-readable end of run report
fn print_summary(summary: &RunSummary) {
    println!("📄 Found {} Markdown file(s)", summary.found);

    let Some(output_dir) = &summary.output_dir else {
        println!("⚠️  No Markdown files found in this repository");
        return;
    };

    for failed in &summary.report.failed {
        println!("   ❌ {}: {}", failed.source.display(), failed.error);
    }

    println!();
    println!(
        "✅ Done! All Markdown files were saved to: {}",
        output_dir.display()
    );
    println!(
        "   Copied {} of {} file(s)",
        summary.report.copied.len(),
        summary.found
    );
}
