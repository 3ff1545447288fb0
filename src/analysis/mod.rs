/// Per-file metric extractors and the cross-file duplication detector
pub mod complexity;
pub mod duplication;
pub mod language;
pub mod todo;

// Re-export commonly used types
pub use complexity::{analyze_python_complexity, ComplexityEntry};
pub use duplication::{detect_duplicates, DuplicatePair};
pub use language::{guess_language, BINARY, UNKNOWN};
pub use todo::{scan_todos, TodoEntry};
