use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "students.json";
pub const DEFAULT_EXPORT_FILE: &str = "students.csv";

/// Where the application keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Roster snapshot, rewritten after every change.
    pub data_file: PathBuf,
    /// Suggested target for CSV export.
    pub export_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}
