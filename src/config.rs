/// Tunable thresholds for a scan run
#[derive(Debug, Clone)]
pub struct Config {
    /// Files larger than this many bytes are listed in the "Large Files" section
    pub large_file_threshold: u64,
    /// Line-window size used by the duplication detector
    pub duplication_window: usize,
    /// How many entries the "Most Complex Functions" section shows
    pub top_complex: usize,
}

pub const DEFAULT_LARGE_FILE_THRESHOLD: u64 = 100_000; // 100KB
pub const DEFAULT_DUPLICATION_WINDOW: usize = 6;
pub const DEFAULT_TOP_COMPLEX: usize = 10;

impl Default for Config {
    fn default() -> Self {
        Self {
            large_file_threshold: DEFAULT_LARGE_FILE_THRESHOLD,
            duplication_window: DEFAULT_DUPLICATION_WINDOW,
            top_complex: DEFAULT_TOP_COMPLEX,
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Values are parsed leniently and clamped to sane ranges so a bad
    /// environment never aborts a scan.
    pub fn from_env() -> Self {
        let large_file_threshold = std::env::var("CODESCOPE_LARGE_FILE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_LARGE_FILE_THRESHOLD)
            .clamp(1_000, 1_000_000_000);

        let duplication_window = std::env::var("CODESCOPE_WINDOW")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_DUPLICATION_WINDOW)
            .clamp(2, 64);

        let top_complex = std::env::var("CODESCOPE_TOP_COMPLEX")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_TOP_COMPLEX)
            .clamp(1, 100);

        Self {
            large_file_threshold,
            duplication_window,
            top_complex,
        }
    }
}
