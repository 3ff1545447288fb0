use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// A line window found in two different files.
///
/// `first_*` is the later-processed occurrence (the one that triggered
/// the match), `second_*` the earliest prior occurrence in another file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePair {
    pub first_file: String,
    pub second_file: String,
    /// 1-based start line of the window in `first_file`
    pub first_line: usize,
    /// 1-based start line of the window in `second_file`
    pub second_line: usize,
    /// The shared block, newline-joined
    pub chunk: String,
}

/// Detect repeated fixed-size line windows across file boundaries.
///
/// Windows slide by one line, so overlapping duplicate regions produce a
/// run of consecutive pairs; that is accepted, not deduplicated. For each
/// window only the first prior occurrence in a *different* file is
/// reported, which under-reports blocks shared by three or more files —
/// kept that way so output stays comparable across versions. Fingerprint
/// collisions are treated as true matches without byte verification.
///
/// Files shorter than the window contribute no windows at all.
pub fn detect_duplicates(files: &[(&str, &str)], window: usize) -> Vec<DuplicatePair> {
    // Fingerprint -> every (file index, 0-based start) seen so far, in
    // processing order. Append-only; lives only for this run.
    let mut occurrences: HashMap<[u8; 32], Vec<(usize, usize)>> = HashMap::new();
    let mut pairs = Vec::new();

    for (file_idx, (path, content)) in files.iter().enumerate() {
        let lines: Vec<&str> = content.lines().collect();
        if lines.len() < window {
            continue;
        }
        for start in 0..=lines.len() - window {
            let chunk = lines[start..start + window].join("\n");
            let fingerprint: [u8; 32] = Sha256::digest(chunk.as_bytes()).into();
            let history = occurrences.entry(fingerprint).or_default();

            if let Some(&(other_idx, other_start)) =
                history.iter().find(|(idx, _)| *idx != file_idx)
            {
                pairs.push(DuplicatePair {
                    first_file: (*path).to_string(),
                    second_file: files[other_idx].0.to_string(),
                    first_line: start + 1,
                    second_line: other_start + 1,
                    chunk,
                });
                history.push((file_idx, start));
                continue;
            }
            history.push((file_idx, start));
        }
    }

    pairs
}
