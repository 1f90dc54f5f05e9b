//! Configuration validation.
//!
//! Serde handles syntax; this checks values. All errors are collected, not
//! just the first.

use url::Url;

use crate::config::schema::ContractsConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ContractsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.rpc.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError {
            field: "rpc.url",
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "rpc.url",
            message: format!("invalid URL '{}': {}", config.rpc.url, e),
        }),
    }

    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "rpc.timeout_secs",
            message: "must be greater than 0".to_string(),
        });
    }

    if config.artifacts.token.as_os_str().is_empty() {
        errors.push(ValidationError {
            field: "artifacts.token",
            message: "path is empty".to_string(),
        });
    }

    if config.artifacts.marketplace.as_os_str().is_empty() {
        errors.push(ValidationError {
            field: "artifacts.marketplace",
            message: "path is empty".to_string(),
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: format!("unknown level '{}'", config.observability.log_level),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
