use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use url::Url;

use crate::error::ScanError;

lazy_static! {
    static ref GITHUB_URL: Regex =
        Regex::new(r"^https?://github\.com/[\w-]+/[\w.-]+/?$").expect("valid URL regex");
}

/// Whether a string looks like a GitHub repository URL we can fetch.
pub fn is_github_url(url: &str) -> bool {
    GITHUB_URL.is_match(url)
}

/// A cloned working tree inside a temporary directory.
///
/// Dropping the value removes the directory unconditionally, success or
/// failure, so a fetched copy never outlives the analysis run.
pub struct FetchedRepo {
    dir: TempDir,
}

impl FetchedRepo {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Clone a GitHub repository into a temporary directory.
///
/// The core treats the result like any local project path; cleanup is the
/// caller's concern and happens automatically when `FetchedRepo` drops.
pub fn clone_repository(url: &str) -> Result<FetchedRepo, ScanError> {
    if !is_github_url(url) {
        return Err(ScanError::InvalidRepoUrl(url.to_string()));
    }

    let parsed = Url::parse(url).map_err(|_| ScanError::InvalidRepoUrl(url.to_string()))?;
    let repo_name = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(|s| s.trim_end_matches(".git").to_string())
        .unwrap_or_else(|| "repository".to_string());

    let dir = tempfile::Builder::new()
        .prefix(&format!("codescope_{repo_name}_"))
        .tempdir()
        .map_err(|e| ScanError::CloneFailed {
            url: url.to_string(),
            reason: format!("cannot create temporary directory: {e}"),
        })?;

    tracing::info!(url, dest = %dir.path().display(), "cloning repository");
    let output = Command::new("git")
        .args(["clone", "--depth", "1", url])
        .arg(dir.path())
        .output()
        .map_err(|e| ScanError::CloneFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScanError::CloneFailed {
            url: url.to_string(),
            reason: stderr.trim().to_string(),
        });
    }

    Ok(FetchedRepo { dir })
}
