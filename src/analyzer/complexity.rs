use regex::Regex;
use std::path::Path;
use crate::analyzer::read_source;
use crate::analyzer::types::{ComplexityEntry, ComplexityReport, FileEntry};

pub const DEFAULT_COMPLEXITY_THRESHOLD: f64 = 10.0;

/// Control-flow token shapes, counted over the raw text (comments and strings included).
/// Keyword boundaries are ASCII-only, so a non-ASCII letter next to a keyword
/// does not hide it.
const CONTROL_FLOW_PATTERNS: &[&str] = &[
    r"(?-u:\b)if(?-u:\b)",
    r"(?-u:\b)else(?-u:\b)",
    r"(?-u:\b)for(?-u:\b)",
    r"(?-u:\b)while(?-u:\b)",
    r"(?-u:\b)switch(?-u:\b)",
    r"(?-u:\b)catch(?-u:\b)",
    r"\?\s*.*\s*:",
    r"&&",
    r"\|\|",
];

pub struct ComplexityEstimator {
    patterns: Vec<Regex>,
}

impl Default for ComplexityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityEstimator {
    pub fn new() -> Self {
        let patterns = CONTROL_FLOW_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("valid control flow regex"))
            .collect();
        Self { patterns }
    }

    /// 1 plus the number of control-flow matches; 0 when the file cannot be read.
    pub fn estimate_file(&self, path: &Path) -> u32 {
        match read_source(path) {
            Some(content) => self.estimate_text(&content),
            None => 0,
        }
    }

    pub fn estimate_text(&self, content: &str) -> u32 {
        let matches: usize = self
            .patterns
            .iter()
            .map(|pattern| pattern.find_iter(content).count())
            .sum();
        1 + matches as u32
    }
}

/// Keeps files scoring at or above `threshold`, highest first. Equal scores keep discovery order.
pub fn summarize_complexity(
    estimator: &ComplexityEstimator,
    root: &Path,
    files: &[FileEntry],
    threshold: f64,
) -> ComplexityReport {
    let mut entries: Vec<ComplexityEntry> = files
        .iter()
        .filter_map(|file| {
            let complexity = estimator.estimate_file(&file.path);
            (f64::from(complexity) >= threshold).then(|| ComplexityEntry {
                file: file.relative_to(root),
                complexity,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.complexity.cmp(&a.complexity));

    ComplexityReport { threshold, files: entries }
}
