use clap::{CommandFactory, Parser};
use clap_complete::{generate, Generator};
use anyhow::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use project_metrics::{
    cli::{Cli, Commands},
    config::Config,
    handlers::{handle_config, handle_serve, handle_tool, handle_tools},
    tools::{ComplexityOptions, CountLinesOptions, FindTodosOptions, ToolRequest},
};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may provide PROJECT_PATH
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let project = cli.project;

    match cli.command {
        // config actions must work even when the stored config is broken
        Commands::Config { action } => handle_config(action)?,
        Commands::Completion { shell } => print_completions(shell, &mut Cli::command()),
        Commands::Serve => {
            let config = prepare(project)?;
            handle_serve(&config).await?;
        }
        Commands::Lines { path, output } => {
            let config = prepare(project)?;
            let request = ToolRequest::CountLines(CountLinesOptions { path });
            handle_tool(&request, &output, &config)?;
        }
        Commands::Todos { kind, output } => {
            let config = prepare(project)?;
            let request = ToolRequest::FindTodos(FindTodosOptions { kind });
            handle_tool(&request, &output, &config)?;
        }
        Commands::Complexity { threshold, output } => {
            let config = prepare(project)?;
            let options = threshold
                .filter(|t| *t != 0.0)
                .map(|threshold| ComplexityOptions { threshold })
                .unwrap_or_default();
            handle_tool(&ToolRequest::ComplexityReport(options), &output, &config)?;
        }
        Commands::Tools => {
            prepare(project)?;
            handle_tools()?;
        }
    }

    Ok(())
}

/// Loads the stored config, applies `--project`, and sets up logging and colors.
fn prepare(project: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(project) = project {
        config.project_path = project;
    }

    init_tracing(&config);

    if !config.output_preferences.colors {
        colored::control::set_override(false);
    }

    Ok(config)
}

/// Logs go to stderr; stdout carries reports and protocol frames.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

pub fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
