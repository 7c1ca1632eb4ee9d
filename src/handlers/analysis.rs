use anyhow::{anyhow, Result};
use colored::*;
use crate::{
    cli::{OutputArgs, OutputFormat},
    config::Config,
    renderer::MarkdownRenderer,
    tools::{run_server, tool_schemas, ToolDispatcher, ToolOutput, ToolRequest},
};

/// Runs one tool against the configured project and prints the result.
pub fn handle_tool(request: &ToolRequest, output: &OutputArgs, config: &Config) -> Result<()> {
    eprintln!("{} {}", "Analyzing:".yellow(), config.project_path.display());

    let result = run_tool(request, config)?;

    match output.format {
        OutputFormat::Markdown => {
            let styled = config.output_preferences.markdown_rendering && !output.raw;
            MarkdownRenderer::new(styled).render(&result.to_markdown())?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&result)?);
        }
    }

    Ok(())
}

pub fn run_tool(request: &ToolRequest, config: &Config) -> Result<ToolOutput> {
    ToolDispatcher::new(&config.project_path)
        .analyze(request)
        .ok_or_else(|| anyhow!("Unknown tool: {}", request.name()))
}

pub async fn handle_serve(config: &Config) -> Result<()> {
    eprintln!("{} {}", "Serving metrics for".green(), config.project_path.display());
    run_server(config.project_path.clone()).await
}

pub fn handle_tools() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&tool_schemas())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{ComplexityOptions, CountLinesOptions};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_tool_returns_structured_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.go"), "package main\n").unwrap();
        let config = Config {
            project_path: dir.path().to_path_buf(),
            ..Config::default()
        };

        let output = run_tool(&ToolRequest::CountLines(CountLinesOptions::default()), &config).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["total_files"], 1);
        assert_eq!(value["languages"][0]["language"], "Go");
        assert_eq!(value["languages"][0]["total_lines"], 2);

        let output = run_tool(&ToolRequest::ComplexityReport(ComplexityOptions::default()), &config).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["threshold"], 10.0);
        assert!(value["files"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_run_tool_rejects_unknown() {
        let config = Config::default();
        assert!(run_tool(&ToolRequest::Unknown("x".to_string()), &config).is_err());
    }
}
