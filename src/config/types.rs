use serde::{Serialize, Deserialize};
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory every tool analyzes.
    pub project_path: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub output_preferences: OutputPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPreferences {
    pub markdown_rendering: bool,
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_path: PathBuf::from("."),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output_preferences: OutputPreferences::default(),
        }
    }
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            markdown_rendering: true,
            colors: true,
        }
    }
}
