pub mod schema;
pub mod server;

pub use schema::{tool_schemas, ToolSchema};
pub use server::{run_server, McpServer};

use serde::{Serialize, Deserialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analyzer::{
    CodeAnalyzer, ComplexityReport, LineCountReport, TodoReport, DEFAULT_COMPLEXITY_THRESHOLD,
};
use crate::renderer::{format_complexity_report, format_line_report, format_todo_report};

pub const COUNT_LINES: &str = "count_lines";
pub const FIND_TODOS: &str = "find_todos";
pub const COMPLEXITY_REPORT: &str = "complexity_report";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountLinesOptions {
    /// Subdirectory relative to the project root.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindTodosOptions {
    /// Marker type to keep, compared case-insensitively.
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityOptions {
    pub threshold: f64,
}

impl Default for ComplexityOptions {
    fn default() -> Self {
        Self { threshold: DEFAULT_COMPLEXITY_THRESHOLD }
    }
}

/// A validated tool call. Argument bags are resolved here once; anything
/// missing or of the wrong type falls back to the tool's default.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
    CountLines(CountLinesOptions),
    FindTodos(FindTodosOptions),
    ComplexityReport(ComplexityOptions),
    Unknown(String),
}

impl ToolRequest {
    pub fn parse(name: &str, arguments: &Value) -> Self {
        match name {
            COUNT_LINES => Self::CountLines(CountLinesOptions {
                path: non_empty_string(arguments, "path"),
            }),
            FIND_TODOS => Self::FindTodos(FindTodosOptions {
                kind: non_empty_string(arguments, "type"),
            }),
            COMPLEXITY_REPORT => {
                let threshold = arguments
                    .get("threshold")
                    .and_then(Value::as_f64)
                    .filter(|t| *t != 0.0)
                    .unwrap_or(DEFAULT_COMPLEXITY_THRESHOLD);
                Self::ComplexityReport(ComplexityOptions { threshold })
            }
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::CountLines(_) => COUNT_LINES,
            Self::FindTodos(_) => FIND_TODOS,
            Self::ComplexityReport(_) => COMPLEXITY_REPORT,
            Self::Unknown(name) => name,
        }
    }
}

fn non_empty_string(arguments: &Value, key: &str) -> Option<String> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Structured result of a known tool, before formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Lines(LineCountReport),
    Todos(TodoReport),
    Complexity(ComplexityReport),
}

impl ToolOutput {
    pub fn to_markdown(&self) -> String {
        match self {
            Self::Lines(report) => format_line_report(report),
            Self::Todos(report) => format_todo_report(report),
            Self::Complexity(report) => format_complexity_report(report),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub text: String,
}

impl ToolResponse {
    pub fn text(text: String) -> Self {
        Self { text }
    }

    /// Unknown names are answered with plain text, never a failure.
    pub fn unknown_tool(name: &str) -> Self {
        Self::text(format!("Unknown tool: {}", name))
    }
}

/// Routes tool calls to the analyzer. Holds nothing but the project root, so
/// calls never share state.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    project_root: PathBuf,
}

impl ToolDispatcher {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into() }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn dispatch(&self, name: &str, arguments: &Value) -> ToolResponse {
        let request = ToolRequest::parse(name, arguments);
        debug!("dispatching {:?}", request);
        self.execute(&request)
    }

    pub fn execute(&self, request: &ToolRequest) -> ToolResponse {
        match self.analyze(request) {
            Some(output) => ToolResponse::text(output.to_markdown()),
            None => ToolResponse::unknown_tool(request.name()),
        }
    }

    /// Runs the analysis behind a request; `None` for unknown tools.
    pub fn analyze(&self, request: &ToolRequest) -> Option<ToolOutput> {
        let analyzer = CodeAnalyzer::new(&self.project_root);

        let output = match request {
            ToolRequest::CountLines(options) => {
                ToolOutput::Lines(analyzer.analyze_lines(options.path.as_deref()))
            }
            ToolRequest::FindTodos(options) => {
                ToolOutput::Todos(analyzer.analyze_todos(options.kind.as_deref()))
            }
            ToolRequest::ComplexityReport(options) => {
                ToolOutput::Complexity(analyzer.analyze_complexity(options.threshold))
            }
            ToolRequest::Unknown(_) => return None,
        };

        Some(output)
    }
}
