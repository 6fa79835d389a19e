use crate::config::types::{FetchConfig, FilterConfig, OutputConfig, Settings};
use crate::ConfigError;

/// Validates the entire settings structure
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    validate_fetch_config(&settings.fetch)?;
    validate_filter_config(&settings.filter)?;
    validate_output_config(&settings.output)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout must be at least 1 second".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates main-page filter configuration
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    for ext in &config.excluded_extensions {
        if ext.is_empty() {
            return Err(ConfigError::Validation(
                "excluded extensions cannot be empty".to_string(),
            ));
        }

        if ext.contains('/') {
            return Err(ConfigError::Validation(format!(
                "excluded extension '{}' must not contain '/'",
                ext
            )));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.exists() && !config.directory.is_dir() {
        return Err(ConfigError::Validation(format!(
            "output directory '{}' is not a directory",
            config.directory.display()
        )));
    }

    Ok(())
}
