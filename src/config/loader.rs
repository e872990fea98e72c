//! Configuration loader
//!
//! Loading pipeline:
//! 1. Read the YAML file (if one was given or the default exists)
//! 2. Deserialize to [`SiteConfig`]
//! 3. Apply CLI overrides (done by the caller)
//! 4. Validate

use std::path::Path;

use crate::config::schema::SiteConfig;
use crate::error::ConfigError;

/// Loads the site configuration.
///
/// With `Some(path)` the file must exist and parse. With `None` the
/// defaults are returned unchanged.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let config = match path {
        Some(path) => load_config_file(path)?,
        None => SiteConfig::default(),
    };
    validate(&config)?;
    Ok(config)
}

/// Loads and parses a single YAML configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
pub fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Validates a loaded configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] naming the offending field.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.base_url.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: "base_url",
            message: "must not be empty".to_string(),
        });
    }
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ConfigError::Invalid {
            field: "base_url",
            message: format!("expected an http(s) URL, got {:?}", config.base_url),
        });
    }
    if config.mobile_breakpoint == 0 {
        return Err(ConfigError::Invalid {
            field: "mobile_breakpoint",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.fetch_timeout_ms == 0 {
        return Err(ConfigError::Invalid {
            field: "fetch_timeout_ms",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
