use serde::{Serialize, Deserialize};
use serde_json::{json, Value};

use super::{COMPLEXITY_REPORT, COUNT_LINES, FIND_TODOS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub fn tool_schemas() -> Vec<ToolSchema> {
    vec![
        ToolSchema {
            name: COUNT_LINES.to_string(),
            description: "Count lines of code in the project, grouped by language".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Subdirectory to analyze (optional, defaults to project root)"
                    }
                }
            }),
        },
        ToolSchema {
            name: FIND_TODOS.to_string(),
            description: "Find all TODO, FIXME, HACK, and XXX comments in the codebase".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "type": {
                        "type": "string",
                        "description": "Filter by type: TODO, FIXME, HACK, or XXX (optional)"
                    }
                }
            }),
        },
        ToolSchema {
            name: COMPLEXITY_REPORT.to_string(),
            description: "Generate a complexity report for the codebase. Lists files by estimated cyclomatic complexity.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "threshold": {
                        "type": "number",
                        "description": "Only show files with complexity at or above this threshold (default: 10)"
                    }
                }
            }),
        },
    ]
}
