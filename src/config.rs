// ⚙️ Configuration - compiled-in defaults
// The tracker takes no flags; the data file lives in the working directory.

use std::ffi::OsString;
use std::path::PathBuf;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file holding the whole expense collection
    pub data_file: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive used as fallback
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Same defaults, different data file
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Config {
            data_file: data_file.into(),
            ..Config::default()
        }
    }

    /// Scratch file a save is written to before being renamed over `data_file`
    pub fn temp_file(&self) -> PathBuf {
        let mut name = OsString::from(self.data_file.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
