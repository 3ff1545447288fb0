use codescope::{analyze_project, analyze_project_with_config, Config, ScanError};
use std::fs;
use std::path::Path;

const SHARED_FUNCTION: &str =
    "def pick(value):\n    result = None\n    if value:\n        result = value\n    else:\n        result = 0\n";

fn run(dir: &Path) -> (usize, String) {
    let out = dir.join("out/report.txt");
    let count = analyze_project(dir, &out).expect("analysis succeeds");
    let text = fs::read_to_string(&out).expect("report readable");
    (count, text)
}

#[test]
fn shared_block_yields_complexity_and_duplicate_pair() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.py"), SHARED_FUNCTION).unwrap();
    fs::write(dir.path().join("b.py"), SHARED_FUNCTION).unwrap();

    let (count, text) = run(dir.path());
    assert_eq!(count, 2);
    assert!(text.contains("Total number of code files: 2"));
    assert!(text.contains("Python: 2 files (100.00%)"));

    // one if -> score 2, listed per owning file
    assert!(text.contains("a.py - pick: Complexity 2"));

    // a.py walks first, so b.py is the later-processed side of the pair
    assert!(text.contains("Potential Code Duplications:"));
    assert!(text.contains("  1. b.py (line 1)"));
    assert!(text.contains("  2. a.py (line 1)"));
    assert!(text.contains("Duplicated code:"));
    assert!(text.contains("def pick(value):"));
}

#[test]
fn empty_project_produces_report_without_summary_sections() {
    let dir = tempfile::tempdir().unwrap();

    let (count, text) = run(dir.path());
    assert_eq!(count, 0);
    assert!(text.contains("Total number of code files: 0"));
    assert!(text.contains("No code files were analyzed."));
    assert!(!text.contains("Large Files"));
    assert!(!text.contains("All TODO/FIXME Comments:"));
    assert!(!text.contains("Most Complex Functions:"));
    assert!(!text.contains("Potential Code Duplications:"));
    assert!(text.contains("Conclusion and Recommendations:"));
}

#[test]
fn todo_marker_is_reported_with_line_number_and_trimmed_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut content = "x = 0\n".repeat(41);
    content.push_str("    # TODO: fix this\n");
    fs::write(dir.path().join("app.py"), content).unwrap();

    let (_, text) = run(dir.path());
    assert!(text.contains("All TODO/FIXME Comments:"));
    assert!(text.contains("app.py (Line 42): # TODO: fix this"));
}

#[test]
fn large_files_are_listed_by_size_descending() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("big.py"), "x = 1\n".repeat(25_000)).unwrap();
    fs::write(dir.path().join("mid.py"), "y = 2\n".repeat(20_000)).unwrap();
    fs::write(dir.path().join("tiny.py"), "z = 3\n").unwrap();

    let (count, text) = run(dir.path());
    assert_eq!(count, 3);
    assert!(text.contains("Large Files (>100KB):"));
    let big_at = text.find("big.py: 146.48 KB").expect("150KB file listed");
    let mid_at = text.find("mid.py: 117.19 KB").expect("120KB file listed");
    assert!(big_at < mid_at);
    assert!(!text.contains("tiny.py: 0.01 KB"));
}

#[test]
fn unknown_and_binary_files_never_reach_the_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("code.py"), "x = 1\n").unwrap();
    fs::write(dir.path().join("image.bin"), b"\x00\xffdata").unwrap();
    fs::write(dir.path().join("notes.weird"), "# TODO: unseen\n").unwrap();

    let (count, text) = run(dir.path());
    assert_eq!(count, 1);
    assert!(text.contains("Total number of code files: 1"));
    assert!(!text.contains("image.bin"));
    assert!(!text.contains("notes.weird"));
    assert!(!text.contains("TODO: unseen"));
}

#[test]
fn repeated_runs_are_identical_apart_from_the_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.py"), SHARED_FUNCTION).unwrap();
    fs::write(dir.path().join("b.py"), SHARED_FUNCTION).unwrap();
    fs::write(dir.path().join("c.py"), "# TODO: later\n").unwrap();

    let out1 = dir.path().join("report1.txt");
    let out2 = dir.path().join("report2.txt");
    analyze_project(dir.path(), &out1).unwrap();
    analyze_project(dir.path(), &out2).unwrap();

    let strip_date = |text: String| -> String {
        text.lines()
            .filter(|line| !line.starts_with("Date of Analysis:"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let first = strip_date(fs::read_to_string(&out1).unwrap());
    let second = strip_date(fs::read_to_string(&out2).unwrap());
    assert_eq!(first, second);
}

#[test]
fn missing_root_leaves_no_report_behind() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.txt");
    let err = analyze_project(&dir.path().join("does-not-exist"), &out);
    assert!(matches!(err, Err(ScanError::MissingRoot(_))));
    assert!(!out.exists());
}

#[test]
fn configured_window_changes_duplicate_detection() {
    let dir = tempfile::tempdir().unwrap();
    // three shared lines: invisible at the default window of six
    fs::write(dir.path().join("a.py"), "a = 1\nb = 2\nc = 3\n").unwrap();
    fs::write(dir.path().join("b.py"), "a = 1\nb = 2\nc = 3\n").unwrap();

    let out_default = dir.path().join("default.txt");
    analyze_project(dir.path(), &out_default).unwrap();
    assert!(!fs::read_to_string(&out_default)
        .unwrap()
        .contains("Potential Code Duplications:"));

    let config = Config {
        duplication_window: 3,
        ..Config::default()
    };
    let out_small = dir.path().join("small.txt");
    analyze_project_with_config(dir.path(), &out_small, &config).unwrap();
    assert!(fs::read_to_string(&out_small)
        .unwrap()
        .contains("Potential Code Duplications:"));
}

#[test]
fn file_blocks_show_path_language_size_and_content() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("app.py"), "print('hi')\n").unwrap();

    let (_, text) = run(dir.path());
    assert!(text.contains("Filename: app.py"));
    assert!(text.contains("Language: Python"));
    assert!(text.contains("File Size: 12 bytes"));
    assert!(text.contains("print('hi')"));
}
