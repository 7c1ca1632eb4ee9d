mod types;
pub mod discovery;
pub mod lines;
pub mod todos;
pub mod complexity;

pub use types::*;
pub use discovery::{classify, discover_files, IGNORED_DIRS, SOURCE_EXTENSIONS};
pub use lines::{count_lines, summarize_lines};
pub use todos::{summarize_todos, TodoScanner, NO_DESCRIPTION, TODO_MARKERS};
pub use complexity::{summarize_complexity, ComplexityEstimator, DEFAULT_COMPLEXITY_THRESHOLD};

use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a file as text, replacing invalid UTF-8. `None` means unreadable.
pub(crate) fn read_source(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            debug!("cannot read {}: {}", path.display(), err);
            None
        }
    }
}

/// Runs the three analyses for one request against a fixed project root.
///
/// Matchers are compiled when the analyzer is built, so each request that
/// builds its own analyzer starts from fresh scanning state.
pub struct CodeAnalyzer {
    project_root: PathBuf,
    todo_scanner: TodoScanner,
    complexity_estimator: ComplexityEstimator,
}

impl CodeAnalyzer {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            todo_scanner: TodoScanner::new(),
            complexity_estimator: ComplexityEstimator::new(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Line counts under `subdir`, resolved against the project root.
    pub fn analyze_lines(&self, subdir: Option<&str>) -> LineCountReport {
        let target = match subdir {
            Some(dir) if !dir.is_empty() => self.project_root.join(dir),
            _ => self.project_root.clone(),
        };
        let files = discover_files(&target);
        summarize_lines(&target, &files)
    }

    pub fn analyze_todos(&self, filter: Option<&str>) -> TodoReport {
        let files = discover_files(&self.project_root);
        summarize_todos(&self.todo_scanner, &self.project_root, &files, filter)
    }

    pub fn analyze_complexity(&self, threshold: f64) -> ComplexityReport {
        let files = discover_files(&self.project_root);
        summarize_complexity(&self.complexity_estimator, &self.project_root, &files, threshold)
    }
}
