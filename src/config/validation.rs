use crate::config::types::{Config, CONCURRENCY_RANGE};
use crate::ConfigError;

/// Validates the entire configuration
///
/// Called once before any crawling starts; every failure here is fatal.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_base_url(config)?;
    validate_concurrency(config)?;
    validate_accepted_codes(config)?;
    validate_depth(config)?;
    Ok(())
}

fn validate_base_url(config: &Config) -> Result<(), ConfigError> {
    let url = &config.base_url;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http or https",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "URL '{}' has no host",
            url
        )));
    }

    Ok(())
}

fn validate_concurrency(config: &Config) -> Result<(), ConfigError> {
    let (min, max) = CONCURRENCY_RANGE;
    if config.max_concurrency < min || config.max_concurrency > max {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between {} and {}, got {}",
            min, max, config.max_concurrency
        )));
    }
    Ok(())
}

fn validate_accepted_codes(config: &Config) -> Result<(), ConfigError> {
    if config.accepted_codes.is_empty() {
        return Err(ConfigError::Validation(
            "at least one accepted status code is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_depth(config: &Config) -> Result<(), ConfigError> {
    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "depth must be at least 1, got {}",
            config.max_depth
        )));
    }
    Ok(())
}
