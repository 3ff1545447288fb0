use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort an analysis run.
///
/// Everything else (unreadable files, undecodable content, Python parse
/// failures) is a soft, per-file condition: logged and skipped by the
/// scanner without surfacing here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("project root does not exist or is not a directory: {0}")]
    MissingRoot(PathBuf),

    #[error("failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GitHub repository URL: {0}")]
    InvalidRepoUrl(String),

    #[error("failed to clone repository {url}: {reason}")]
    CloneFailed { url: String, reason: String },
}
