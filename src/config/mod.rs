mod types;
mod loader;
mod validators;

pub use types::*;
pub use loader::{
    apply_project_override, get_config_path, load_config, load_config_from, save_config,
    save_config_to, PROJECT_PATH_ENV,
};
pub use validators::validate_config;

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

impl Config {
    pub fn load() -> Result<Self> {
        let config = load_config()?;
        validate_config(&config)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        save_config(self)
    }

    /// Persists a new project path in the config file.
    pub fn set_project_path(path: PathBuf) -> Result<PathBuf> {
        let mut config = load_config_from(&get_config_path()?)?;
        config.project_path = path;
        validate_config(&config)?;
        config.save()
    }

    pub fn reset() -> Result<()> {
        let config_path = get_config_path()?;
        if config_path.exists() {
            std::fs::remove_file(&config_path)?;
        }
        Ok(())
    }

    pub fn display(&self) -> String {
        let on_off = |flag: bool| if flag { "on".green() } else { "off".red() };

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Current configuration:".bright_cyan().bold()));
        output.push_str(&format!("{}\n", "=".repeat(50).dimmed()));
        output.push_str(&format!("  Project path: {}\n", self.project_path.display().to_string().yellow()));
        output.push_str(&format!("  Log filter: {}\n", self.log_filter.yellow()));

        output.push_str("\nOutput:\n");
        output.push_str(&format!("  Markdown rendering: {}\n", on_off(self.output_preferences.markdown_rendering)));
        output.push_str(&format!("  Colors: {}\n", on_off(self.output_preferences.colors)));

        output
    }
}
