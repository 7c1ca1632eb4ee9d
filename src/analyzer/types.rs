use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use crate::analyzer::discovery::classify;

/// A discovered source file. The language label is derived from the extension on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn language(&self) -> &'static str {
        classify(&self.path)
    }

    /// Path relative to `root`, falling back to the full path when it lies outside.
    pub fn relative_to(&self, root: &Path) -> String {
        self.path
            .strip_prefix(root)
            .unwrap_or(&self.path)
            .to_string_lossy()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub file: String,
    pub line: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityEntry {
    pub file: String,
    pub complexity: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub file_count: usize,
    pub total_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRow {
    pub language: String,
    #[serde(flatten)]
    pub stats: LanguageStats,
}

/// Per-language totals, rows ordered by descending line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCountReport {
    pub root_path: PathBuf,
    pub languages: Vec<LanguageRow>,
    pub total_files: usize,
    pub total_lines: usize,
}

/// Marker comments in discovery order, optionally narrowed to one marker type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoReport {
    pub filter: Option<String>,
    pub items: Vec<TodoItem>,
}

/// Files at or above `threshold`, ordered by descending complexity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub threshold: f64,
    pub files: Vec<ComplexityEntry>,
}
