use std::path::Path;

/// Sentinel tag for files whose extension matches no known language.
pub const UNKNOWN: &str = "Unknown";
/// Sentinel tag for files whose content does not look like text.
pub const BINARY: &str = "Binary";

/// Placeholder stored as file content when the bytes are not valid UTF-8.
pub const BINARY_PLACEHOLDER: &str = "[Binary content]";

/// Map a file's name and raw bytes to a language tag.
///
/// Binary sniffing comes first: a NUL byte anywhere means the content is
/// not text in any reasonable encoding and the file is tagged `Binary`.
/// Otherwise the extension decides; extensions outside the table yield
/// `Unknown`. Both sentinels exclude the file from every other metric —
/// this is the single per-file gate of the pipeline.
pub fn guess_language(path: &Path, bytes: &[u8]) -> &'static str {
    if bytes.contains(&0) {
        return BINARY;
    }

    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_lowercase(),
        None => return UNKNOWN,
    };

    match ext.as_str() {
        "py" | "pyw" => "Python",
        "rs" => "Rust",
        "js" | "mjs" | "cjs" | "jsx" => "JavaScript",
        "ts" | "tsx" => "TypeScript",
        "java" => "Java",
        "c" | "h" => "C",
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" => "C++",
        "cs" => "C#",
        "go" => "Go",
        "php" => "PHP",
        "rb" => "Ruby",
        "kt" | "kts" => "Kotlin",
        "swift" => "Swift",
        "sh" | "bash" | "zsh" => "Shell",
        "pl" | "pm" => "Perl",
        "lua" => "Lua",
        "sql" => "SQL",
        "html" | "htm" => "HTML",
        "css" => "CSS",
        "scss" | "sass" => "SCSS",
        "xml" => "XML",
        "json" => "JSON",
        "yml" | "yaml" => "YAML",
        "toml" => "TOML",
        "md" | "markdown" => "Markdown",
        _ => UNKNOWN,
    }
}

/// Decode file content for the report, falling back to the binary
/// placeholder when the bytes are not valid UTF-8 (for example a
/// legacy-encoded text file that still passed the NUL sniff).
pub fn decode_content(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|_| BINARY_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn known_extensions_map_to_languages() {
        assert_eq!(guess_language(&PathBuf::from("a.py"), b"x = 1\n"), "Python");
        assert_eq!(guess_language(&PathBuf::from("src/lib.rs"), b"fn main() {}\n"), "Rust");
        assert_eq!(guess_language(&PathBuf::from("App.TSX"), b"export {}\n"), "TypeScript");
    }

    #[test]
    fn unknown_extension_is_unknown() {
        assert_eq!(guess_language(&PathBuf::from("data.xyz"), b"text\n"), UNKNOWN);
        assert_eq!(guess_language(&PathBuf::from("Makefile"), b"all:\n"), UNKNOWN);
    }

    #[test]
    fn nul_bytes_mean_binary_regardless_of_extension() {
        assert_eq!(guess_language(&PathBuf::from("a.py"), b"\x00\x01\x02"), BINARY);
    }

    #[test]
    fn non_utf8_content_decodes_to_placeholder() {
        // Latin-1 "café" has no NUL bytes but is not valid UTF-8
        let bytes = vec![b'c', b'a', b'f', 0xe9];
        assert_eq!(decode_content(bytes), BINARY_PLACEHOLDER);
        assert_eq!(decode_content(b"plain".to_vec()), "plain");
    }
}
