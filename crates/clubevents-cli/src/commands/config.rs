//! Configuration commands.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// The current configuration as TOML.
pub fn dump(config: &ClientConfig) -> ClientResult<String> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    Ok(format!(
        "# config.toml ({})\n{}",
        ClientConfig::default_path().display(),
        toml_str.trim_end()
    ))
}

/// Validate the configuration.
pub fn validate(config: &ClientConfig) -> ClientResult<String> {
    config.validate()?;

    let events = config.events_path();
    if !events.exists() {
        return Err(ClientError::Config(format!(
            "content file {} does not exist",
            events.display()
        )));
    }

    Ok("Configuration is valid.".to_string())
}

/// The configuration and content file paths.
pub fn path(config: &ClientConfig) -> ClientResult<String> {
    Ok(format!(
        "config: {}\nevents: {}",
        ClientConfig::default_path().display(),
        config.events_path().display()
    ))
}
