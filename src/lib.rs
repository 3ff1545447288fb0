use std::path::Path;

/// Project scanning, metric extraction and report generation

/// Per-file metric extractors and the duplication detector
pub mod analysis;

/// Thresholds and tunables for a scan run
pub mod config;

/// Fatal error taxonomy
pub mod error;

/// GitHub fetch collaborator
pub mod fetch;

/// Path-exclusion rules
pub mod ignore;

/// Report rendering and atomic persistence
pub mod report;

/// Directory walk and aggregation
pub mod scanner;

// Re-export commonly used types
pub use analysis::{ComplexityEntry, DuplicatePair, TodoEntry};
pub use config::Config;
pub use error::ScanError;
pub use ignore::IgnorePolicy;
pub use scanner::{AnalysisAggregate, FileRecord, ProjectScanner};

/// Analyze a project directory and write the consolidated report.
///
/// The single seam where a fatal error becomes a caller-visible message;
/// per-file problems are logged and skipped inside the scan. Returns the
/// number of eligible code files analyzed.
pub fn analyze_project_with_config(
    project_path: &Path,
    output_path: &Path,
    config: &Config,
) -> Result<usize, ScanError> {
    let scanner = ProjectScanner::new(project_path, config.clone())?;
    let aggregate = scanner.scan();
    report::write_report(output_path, &aggregate, config)?;
    Ok(aggregate.file_count)
}

/// [`analyze_project_with_config`] with default thresholds.
pub fn analyze_project(project_path: &Path, output_path: &Path) -> Result<usize, ScanError> {
    analyze_project_with_config(project_path, output_path, &Config::default())
}
