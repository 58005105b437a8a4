use crate::config::types::Config;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;
use url::Url;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// This is used to detect if the configuration has changed between scan runs.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Validates semantic constraints the TOML schema cannot express
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.scanner.audit_timeout_seconds == 0 {
        return Err(ConfigError::Validation(
            "audit-timeout-seconds must be at least 1".to_string(),
        ));
    }

    match Url::parse(&config.audit.endpoint) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => {
            return Err(ConfigError::Validation(format!(
                "audit endpoint must be http or https, got: {}",
                url.scheme()
            )));
        }
        Err(e) => {
            return Err(ConfigError::Validation(format!(
                "audit endpoint is not a valid URL: {}",
                e
            )));
        }
    }

    if config.output.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results-path must not be empty".to_string(),
        ));
    }

    Ok(())
}
