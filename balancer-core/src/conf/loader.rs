use crate::conf::error::ConfigError;
use crate::conf::types::BalancerConfig;
use crate::conf::validate::validate;
use std::fs;
use std::path::Path;

/// Read and decode a balancer config file.
///
/// Validation findings never fail the load; they are logged as warnings so the
/// selector can still be built with the documented fallbacks.
pub fn load_config(path: &Path) -> Result<BalancerConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(&s).map_err(|e| ConfigError::parse(path, e))?;

    for warning in validate(&config) {
        tracing::warn!(path = %path.display(), "{warning}");
    }

    tracing::debug!(
        path = %path.display(),
        algorithm = %config.algorithm(),
        endpoints = config.endpoints.len(),
        "loaded balancer config"
    );

    Ok(config)
}

pub fn parse_config(s: &str) -> Result<BalancerConfig, toml::de::Error> {
    toml::from_str(s)
}
