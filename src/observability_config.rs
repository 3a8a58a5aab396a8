//! # Observability Configuration
//!
//! Environment-specific settings for logging and metrics.

use std::env;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Observability configuration for different environments
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Environment name (development, staging, production)
    pub environment: String,
    /// Log level for the translator crate
    pub log_level: String,
    /// Explicit log format ("pretty" or "json"); derived from the environment when unset
    pub log_format: Option<String>,
    /// Whether to record translation metrics
    pub enable_metrics: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: "info".to_string(),
            log_format: None,
            enable_metrics: true,
        }
    }
}

impl ObservabilityConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").ok(),
            enable_metrics: env::var("ENABLE_METRICS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }

    /// Check if running in development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Whether logs should be human-readable rather than JSON
    pub fn use_pretty_logs(&self) -> bool {
        match self.log_format.as_deref() {
            Some(format) => format == "pretty",
            None => self.is_development(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.trim().is_empty() {
            return Err("Environment cannot be empty".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(format!("Invalid log level: {}", self.log_level));
        }

        if let Some(format) = &self.log_format {
            if format != "pretty" && format != "json" {
                return Err(format!("Invalid log format: {}", format));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert!(config.enable_metrics);
        assert!(config.use_pretty_logs());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ObservabilityConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        config.log_level = "warn".to_string();
        config.log_format = Some("xml".to_string());
        assert!(config.validate().is_err());

        config.log_format = Some("json".to_string());
        assert!(config.validate().is_ok());

        config.environment = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_selection() {
        let mut config = ObservabilityConfig {
            environment: "production".to_string(),
            ..Default::default()
        };
        // Non-development environments log JSON unless told otherwise
        assert!(!config.is_development());
        assert!(!config.use_pretty_logs());

        config.log_format = Some("pretty".to_string());
        assert!(config.use_pretty_logs());
    }
}
