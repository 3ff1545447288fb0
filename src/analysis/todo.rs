use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whole-word, case-insensitive; "mastodon" must not match
    static ref TODO_MARKER: Regex = Regex::new(r"(?i)\b(todo|fixme)\b").expect("valid marker regex");
}

/// One TODO/FIXME marker found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    /// 1-based source line number
    pub line: usize,
    /// The matching line, whitespace-trimmed
    pub text: String,
}

/// Collect every line containing a whole-word `TODO` or `FIXME`,
/// case-insensitively. Content that could not be decoded upstream simply
/// yields no entries.
pub fn scan_todos(content: &str) -> Vec<TodoEntry> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| TODO_MARKER.is_match(line))
        .map(|(idx, line)| TodoEntry {
            line: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}
