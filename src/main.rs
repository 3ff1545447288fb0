use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use codescope::fetch::{self, FetchedRepo};
use codescope::{analyze_project_with_config, Config};

/// Scan a project and write a consolidated analysis report: language
/// statistics, TODO/FIXME markers, Python complexity scores and
/// near-duplicate code fragments.
#[derive(Debug, Parser)]
#[command(name = "codescope", version, about)]
struct Cli {
    /// Local project directory or GitHub repository URL
    source: String,

    /// Report destination (default: <project>_analysis.txt in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Duplication window size in lines
    #[arg(long)]
    window: Option<usize>,

    /// How many complex functions to list
    #[arg(long)]
    top_complex: Option<usize>,

    /// Large-file threshold in bytes
    #[arg(long)]
    large_file_threshold: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(window) = cli.window {
        config.duplication_window = window.max(2);
    }
    if let Some(top) = cli.top_complex {
        config.top_complex = top.max(1);
    }
    if let Some(threshold) = cli.large_file_threshold {
        config.large_file_threshold = threshold;
    }

    // A fetched repository lives in a temp directory that is removed when
    // `_fetched` drops, whether or not the analysis succeeds.
    let (project_root, _fetched): (PathBuf, Option<FetchedRepo>) =
        if fetch::is_github_url(&cli.source) {
            let repo = fetch::clone_repository(&cli.source)
                .with_context(|| format!("cannot fetch {}", cli.source))?;
            (repo.path().to_path_buf(), Some(repo))
        } else {
            (PathBuf::from(&cli.source), None)
        };

    let project_name = project_root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string());
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{project_name}_analysis.txt")));

    let file_count = analyze_project_with_config(&project_root, &output, &config)
        .with_context(|| format!("analysis of {} failed", project_root.display()))?;

    println!(
        "Analyzed {file_count} code files. Report written to {}",
        output.display()
    );
    Ok(())
}
