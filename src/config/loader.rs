use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::config::types::Config;

pub const PROJECT_PATH_ENV: &str = "PROJECT_PATH";

/// Defaults, then the config file if present, then `PROJECT_PATH`.
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;
    let config = load_config_from(&config_path)?;
    Ok(apply_project_override(config, std::env::var(PROJECT_PATH_ENV).ok()))
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        debug!("no config file at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    debug!("loading config file: {}", config_path.display());

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config file {}", config_path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", config_path.display()))
}

/// A non-empty override replaces the configured project path.
pub fn apply_project_override(mut config: Config, project_path: Option<String>) -> Config {
    if let Some(path) = project_path.filter(|p| !p.trim().is_empty()) {
        config.project_path = PathBuf::from(path);
    }
    config
}

pub fn save_config(config: &Config) -> Result<PathBuf> {
    let config_path = get_config_path()?;
    save_config_to(config, &config_path)?;
    Ok(config_path)
}

pub fn save_config_to(config: &Config, config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .context("failed to create config directory")?;
    }

    let content = toml::to_string_pretty(config)
        .context("failed to serialize config")?;

    fs::write(config_path, content)
        .context("failed to write config file")?;

    debug!("saved config to {}", config_path.display());
    Ok(())
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("could not locate the user config directory")?;

    Ok(config_dir.join("project-metrics").join("config.toml"))
}
