use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use crate::handlers::config::ConfigAction;

#[derive(Parser)]
#[clap(name = "project-metrics")]
#[clap(about = "Static code metrics for a project directory", version)]
#[clap(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
pub struct Cli {
    /// Project directory to analyze (overrides the config file and PROJECT_PATH)
    #[clap(short, long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the metric tools as JSON-RPC over stdin/stdout
    Serve,

    /// Count lines of code grouped by language
    Lines {
        /// Subdirectory of the project to analyze
        path: Option<String>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// List TODO, FIXME, HACK and XXX comments
    Todos {
        /// Only show one marker type
        #[clap(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// List files by estimated complexity
    Complexity {
        /// Minimum complexity to report (default: 10)
        #[clap(short, long)]
        threshold: Option<f64>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Print the tool schemas as JSON
    Tools,

    /// Manage the configuration file
    Config {
        #[clap(subcommand)]
        action: ConfigAction,
    },

    /// Generate a shell completion script
    Completion {
        /// Target shell
        #[clap(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[clap(short, long, value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Print markdown without terminal styling
    #[clap(long)]
    pub raw: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
    Yaml,
}
