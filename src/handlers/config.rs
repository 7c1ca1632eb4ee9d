use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use crate::config::{get_config_path, Config};

#[derive(clap::Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Store the project directory in the config file
    SetProject {
        /// Project directory
        path: PathBuf,
    },
    /// Delete the config file
    Reset,
}

pub fn handle_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", config.display());
        }
        ConfigAction::Path => {
            println!("{}", get_config_path()?.display());
        }
        ConfigAction::SetProject { path } => {
            let saved_to = Config::set_project_path(path.clone())?;
            println!("{} {} ({})", "Project path set:".green(), path.display(), saved_to.display());
        }
        ConfigAction::Reset => {
            Config::reset()?;
            println!("{}", "Configuration reset.".yellow());
        }
    }
    Ok(())
}
