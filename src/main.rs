use anyhow::Result;
use recipe_translator::config::AppConfig;
use recipe_translator::errors::error_logging;
use recipe_translator::observability;
use recipe_translator::{IngredientLine, IngredientTranslator};
use std::io::{self, BufRead, BufWriter, Write};
use tracing::{info, warn};

/// Load and validate configuration at startup
fn load_configuration() -> Result<AppConfig> {
    let config = AppConfig::from_env().map_err(|e| {
        error_logging::log_config_error(&e, "environment", "load_configuration");
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    config.validate().map_err(|e| {
        error_logging::log_config_error(&e, "app_config", "validate_configuration");
        anyhow::anyhow!("Invalid configuration: {}", e)
    })?;

    Ok(config)
}

/// Translate JSON ingredient lines from stdin, one result per line on stdout
fn run(translator: &IngredientTranslator) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut translated = 0usize;
    let mut rejected = 0usize;

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<IngredientLine>(&line) {
            Ok(ingredient) => {
                let result = translator.translate_line(&ingredient);
                serde_json::to_writer(&mut out, &result)?;
                out.write_all(b"\n")?;
                translated += 1;
            }
            Err(e) => {
                error_logging::log_input_error(&e, index + 1, &line);
                rejected += 1;
            }
        }
    }

    out.flush()?;

    if rejected > 0 {
        warn!(translated, rejected, "Some input lines were rejected");
    } else {
        info!(translated, "Translation finished");
    }
    Ok(())
}

fn main() -> Result<()> {
    // A missing .env file is fine; variables may come from the environment
    dotenvy::dotenv().ok();

    let config = load_configuration()?;
    observability::init_tracing_with_config(&config.observability)?;
    info!("{}", config.summary());

    let translator = IngredientTranslator::from_config(&config);
    run(&translator)
}
