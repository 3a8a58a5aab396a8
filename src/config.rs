//! # Unified Application Configuration
//!
//! Collects the translator and observability settings into one structure,
//! loaded from environment variables (a `.env` file is honoured by the binary
//! through `dotenvy`).

use crate::errors::{AppError, AppResult};
use crate::lexicon::loader::LEXICON_CONFIG_ENV;
use crate::observability_config::ObservabilityConfig;
use std::env;

/// Translation engine settings
#[derive(Debug, Clone, Default)]
pub struct TranslatorConfig {
    /// JSON lexicon file replacing the built-in tables
    pub lexicon_path: Option<String>,
    /// Log every translation that was not a full match
    pub diagnostics_enabled: bool,
}

impl TranslatorConfig {
    /// Validate translator configuration
    pub fn validate(&self) -> AppResult<()> {
        if let Some(path) = &self.lexicon_path {
            if path.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "{} cannot be empty if provided",
                    LEXICON_CONFIG_ENV
                )));
            }
            if !path.ends_with(".json") {
                return Err(AppError::Config(format!(
                    "{} must point to a .json file, got '{}'",
                    LEXICON_CONFIG_ENV, path
                )));
            }
        }
        Ok(())
    }
}

/// Unified application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Translation engine configuration
    pub translator: TranslatorConfig,
    /// Observability configuration
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        config.translator.lexicon_path = env::var(LEXICON_CONFIG_ENV)
            .ok()
            .filter(|path| !path.trim().is_empty());

        config.translator.diagnostics_enabled = env::var("TRANSLATION_DIAGNOSTICS")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config("TRANSLATION_DIAGNOSTICS must be true or false".to_string())
            })?;

        config.observability = ObservabilityConfig::from_env();

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.translator.validate()?;
        self.observability.validate().map_err(AppError::Config)?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: lexicon={}, diagnostics={}, environment={}, log_level={}, metrics={}",
            self.translator.lexicon_path.as_deref().unwrap_or("built-in"),
            self.translator.diagnostics_enabled,
            self.observability.environment,
            self.observability.log_level,
            self.observability.enable_metrics
        )
    }
}
