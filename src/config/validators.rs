use anyhow::{Result, anyhow};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use crate::config::types::Config;

pub fn validate_config(config: &Config) -> Result<()> {
    if config.project_path.as_os_str().is_empty() {
        return Err(anyhow!("project_path must not be empty"));
    }

    if let Err(err) = EnvFilter::try_new(&config.log_filter) {
        return Err(anyhow!("invalid log_filter '{}': {}", config.log_filter, err));
    }

    // reports degrade to empty for a missing directory, so this is not fatal
    if !config.project_path.is_dir() {
        warn!("project path {} is not a directory", config.project_path.display());
    }

    Ok(())
}
