use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Path-exclusion rules for the scanner.
///
/// Two rules, either of which excludes a path:
/// 1. any segment of the project-relative path starts with a dot;
/// 2. the relative path matches a shell-glob pattern from the project
///    root's `.gitignore`.
///
/// Only the root `.gitignore` is read, once, at construction. Negation
/// patterns and nested ignore files are not supported. The predicate is
/// applied both when pruning directories and when filtering files, so
/// ignored directories are never descended into.
#[derive(Debug, Clone)]
pub struct IgnorePolicy {
    globs: GlobSet,
}

impl IgnorePolicy {
    /// Load the policy for a project root.
    ///
    /// An unreadable `.gitignore` or an invalid pattern is logged and
    /// skipped rather than failing the scan.
    pub fn new(root: &Path) -> Self {
        let mut builder = GlobSetBuilder::new();
        let gitignore_path = root.join(".gitignore");
        if gitignore_path.exists() {
            match std::fs::read_to_string(&gitignore_path) {
                Ok(content) => {
                    for line in content.lines() {
                        let line = line.trim();
                        if line.is_empty() || line.starts_with('#') {
                            continue;
                        }
                        // Default globset semantics let `*` span `/`,
                        // matching the shell-glob behaviour these
                        // patterns are written against.
                        match Glob::new(line) {
                            Ok(glob) => {
                                builder.add(glob);
                            }
                            Err(e) => {
                                tracing::warn!(pattern = line, error = %e, "skipping invalid .gitignore pattern");
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %gitignore_path.display(), error = %e, "cannot read .gitignore");
                }
            }
        }

        let globs = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build ignore globs, ignoring nothing");
            GlobSet::empty()
        });

        Self { globs }
    }

    /// Whether a project-relative path should be excluded from the scan.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        let has_dot_segment = relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'));
        if has_dot_segment {
            return true;
        }

        let normalized = relative.to_string_lossy().replace('\\', "/");
        self.globs.is_match(Path::new(&normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn policy_with_gitignore(lines: &str) -> IgnorePolicy {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".gitignore"), lines).unwrap();
        IgnorePolicy::new(dir.path())
    }

    #[test]
    fn dot_segments_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let policy = IgnorePolicy::new(dir.path());

        assert!(policy.is_ignored(&PathBuf::from(".git")));
        assert!(policy.is_ignored(&PathBuf::from(".venv/lib/thing.py")));
        assert!(policy.is_ignored(&PathBuf::from("src/.hidden.py")));
        assert!(!policy.is_ignored(&PathBuf::from("src/main.py")));
    }

    #[test]
    fn gitignore_globs_match_whole_relative_path() {
        let policy = policy_with_gitignore("*.log\nbuild\n");

        assert!(policy.is_ignored(&PathBuf::from("app.log")));
        // `*` spans separators, like fnmatch over the full path string
        assert!(policy.is_ignored(&PathBuf::from("nested/deep/app.log")));
        assert!(policy.is_ignored(&PathBuf::from("build")));
        assert!(!policy.is_ignored(&PathBuf::from("build/out.txt")));
        assert!(!policy.is_ignored(&PathBuf::from("src/main.py")));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let policy = policy_with_gitignore("# comment\n\n*.tmp\n");

        assert!(policy.is_ignored(&PathBuf::from("scratch.tmp")));
        assert!(!policy.is_ignored(&PathBuf::from("comment")));
    }

    #[test]
    fn missing_gitignore_ignores_only_dot_paths() {
        let dir = tempfile::tempdir().unwrap();
        let policy = IgnorePolicy::new(dir.path());

        assert!(!policy.is_ignored(&PathBuf::from("anything/goes.py")));
    }
}
