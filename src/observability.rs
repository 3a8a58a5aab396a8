//! Observability module for logging and metrics setup.
//!
//! This module provides:
//! - Structured logging with configurable levels (pretty or JSON)
//! - Tracing spans for translation operations
//! - Translation metrics recorded through the `metrics` facade
//!
//! No metrics exporter is installed here; without a recorder the metric calls
//! are no-ops, so the library can be embedded by hosts that bring their own.

use anyhow::Result;
use tracing_subscriber::prelude::*;

use crate::observability_config::ObservabilityConfig;

/// Initialize structured logging with tracing and configuration
///
/// Logs go to stderr so that stdout stays free for translation output.
pub fn init_tracing_with_config(config: &ObservabilityConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("recipe_translator={}", config.log_level).parse()?);

    if config.use_pretty_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .try_init()?;
    }

    tracing::info!(
        environment = %config.environment,
        log_level = %config.log_level,
        "Tracing initialized with structured logging"
    );
    Ok(())
}

/// Create a span for translation operations
pub fn translation_span(operation: &str) -> tracing::Span {
    tracing::debug_span!(
        "translation_operation",
        operation = operation,
        component = "translator"
    )
}

/// Record the outcome of an ingredient name translation
pub fn record_ingredient_metrics(outcome: &str, full_match: bool, duration: std::time::Duration) {
    let outcome = outcome.to_string();
    metrics::counter!("ingredient_translations_total", "outcome" => outcome).increment(1);
    if !full_match {
        metrics::counter!("ingredient_partial_translations_total").increment(1);
    }
    metrics::histogram!("translation_duration_seconds", "operation" => "ingredient")
        .record(duration.as_secs_f64());
}

/// Record the outcome of a measure translation
pub fn record_measure_metrics(translated: bool, duration: std::time::Duration) {
    let result = if translated { "translated" } else { "unchanged" };
    metrics::counter!("measure_translations_total", "result" => result).increment(1);
    metrics::histogram!("translation_duration_seconds", "operation" => "measure")
        .record(duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_metrics_without_recorder_do_not_panic() {
        record_ingredient_metrics("composed", true, Duration::from_micros(5));
        record_ingredient_metrics("passthrough", false, Duration::from_micros(5));
        record_measure_metrics(false, Duration::from_micros(1));
    }

    #[test]
    fn test_translation_span_creation() {
        let span = translation_span("test");
        let _enter = span.enter();
    }
}
