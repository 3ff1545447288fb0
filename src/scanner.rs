use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{
    analyze_python_complexity, detect_duplicates, guess_language, scan_todos, ComplexityEntry,
    DuplicatePair, TodoEntry, BINARY, UNKNOWN,
};
use crate::analysis::language::decode_content;
use crate::config::Config;
use crate::error::ScanError;
use crate::ignore::IgnorePolicy;

/// One eligible scanned file. Created once a file passes the ignore policy
/// and the language gate; immutable afterwards and held only for the run.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Project-root-relative, forward-slash normalized
    pub relative_path: String,
    /// Used only for size/content retrieval
    pub absolute_path: PathBuf,
    pub language: String,
    pub size: u64,
    /// Full text; undecodable bytes become the binary placeholder
    pub content: String,
    pub todos: Vec<TodoEntry>,
}

/// Everything one analysis run accumulates, built incrementally during the
/// walk and consumed read-only by the report writer.
#[derive(Debug)]
pub struct AnalysisAggregate {
    pub project_name: String,
    pub file_count: usize,
    /// Language tag -> file count; BTreeMap for a stable report order
    pub language_distribution: BTreeMap<String, usize>,
    /// (relative path, byte size) for files over the threshold, walk order
    pub large_files: Vec<(String, u64)>,
    /// Every TODO entry, tagged with its owning file, walk order
    pub todos: Vec<(String, TodoEntry)>,
    /// Every complexity entry, tagged with its owning file, walk order
    pub complexities: Vec<(String, ComplexityEntry)>,
    pub duplicates: Vec<DuplicatePair>,
    pub files: Vec<FileRecord>,
}

impl AnalysisAggregate {
    fn new(project_name: String) -> Self {
        Self {
            project_name,
            file_count: 0,
            language_distribution: BTreeMap::new(),
            large_files: Vec::new(),
            todos: Vec::new(),
            complexities: Vec::new(),
            duplicates: Vec::new(),
            files: Vec::new(),
        }
    }
}

/// Walks a project tree, applies the ignore policy, runs the metric
/// extractors per eligible file and finishes with one duplication pass
/// over everything collected. Owns the aggregate until handoff.
pub struct ProjectScanner {
    root: PathBuf,
    project_name: String,
    config: Config,
    ignore: IgnorePolicy,
}

impl ProjectScanner {
    /// Fatal if the project root is missing or not a directory; everything
    /// after construction degrades per file instead of aborting.
    pub fn new(root: &Path, config: Config) -> Result<Self, ScanError> {
        let root = root
            .canonicalize()
            .map_err(|_| ScanError::MissingRoot(root.to_path_buf()))?;
        if !root.is_dir() {
            return Err(ScanError::MissingRoot(root));
        }
        let project_name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        let ignore = IgnorePolicy::new(&root);
        Ok(Self {
            root,
            project_name,
            config,
            ignore,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the full scan: walk, then one duplication pass, then hand the
    /// finalized aggregate back.
    pub fn scan(&self) -> AnalysisAggregate {
        let mut aggregate = AnalysisAggregate::new(self.project_name.clone());
        self.walk(&self.root, &mut aggregate);

        let buffer: Vec<(&str, &str)> = aggregate
            .files
            .iter()
            .map(|record| (record.relative_path.as_str(), record.content.as_str()))
            .collect();
        aggregate.duplicates = detect_duplicates(&buffer, self.config.duplication_window);

        aggregate
    }

    fn walk(&self, dir: &Path, aggregate: &mut AnalysisAggregate) {
        let reader = match fs::read_dir(dir) {
            Ok(reader) => reader,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "cannot read directory, skipping");
                return;
            }
        };

        let mut entries: Vec<_> = reader
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "unreadable directory entry, skipping");
                    None
                }
            })
            .collect();
        // Name order keeps repeated runs byte-identical
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let relative = match path.strip_prefix(&self.root) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => continue,
            };
            if self.ignore.is_ignored(&relative) {
                tracing::debug!(path = %relative.display(), "ignored");
                continue;
            }

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot stat entry, skipping");
                    continue;
                }
            };
            if file_type.is_dir() {
                self.walk(&path, aggregate);
            } else if file_type.is_file() {
                self.process_file(&path, &relative, aggregate);
            }
            // Symlinks are left alone: following them risks walking out of
            // the project or looping.
        }
    }

    fn process_file(&self, path: &Path, relative: &Path, aggregate: &mut AnalysisAggregate) {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read file, skipping");
                return;
            }
        };

        let language = guess_language(path, &bytes);
        if language == UNKNOWN || language == BINARY {
            tracing::debug!(path = %relative.display(), language, "excluded from analysis");
            return;
        }

        let relative_path = relative.to_string_lossy().replace('\\', "/");
        let size = bytes.len() as u64;
        let content = decode_content(bytes);

        if size > self.config.large_file_threshold {
            aggregate.large_files.push((relative_path.clone(), size));
        }

        let todos = scan_todos(&content);
        for todo in &todos {
            aggregate.todos.push((relative_path.clone(), todo.clone()));
        }

        if language == "Python" {
            for entry in analyze_python_complexity(&content) {
                aggregate.complexities.push((relative_path.clone(), entry));
            }
        }

        *aggregate
            .language_distribution
            .entry(language.to_string())
            .or_insert(0) += 1;
        aggregate.file_count += 1;
        aggregate.files.push(FileRecord {
            relative_path,
            absolute_path: path.to_path_buf(),
            language: language.to_string(),
            size,
            content,
            todos,
        });
    }
}
