//! Config-driven lexicon loading.
//!
//! A lexicon file is JSON with the same shape as [`LexiconTables`]:
//!
//! ```json
//! {
//!   "version": "en-it-custom",
//!   "base": [{ "source": "black beans", "target": "fagioli neri", "number": "plural" }],
//!   "states": [{ "source": "drained", "target": "scolato" }],
//!   "actions": [{ "source": "sliced", "target": "affettato" }],
//!   "units": [{ "source": "tbsp", "singular": "cucchiaio", "plural": "cucchiai" }],
//!   "fixed_phrases": [{ "source": "olive oil", "target": "olio d'oliva" }],
//!   "modifiers": ["optional"]
//! }
//! ```
//!
//! Any failure to read, parse or validate the configured file falls back to the
//! compiled-in lexicon so translation keeps working.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::{default_lexicon, Lexicon, LexiconTables};
use crate::config::TranslatorConfig;
use crate::errors::{error_logging, AppError, AppResult};

/// Environment variable naming a lexicon JSON file
pub const LEXICON_CONFIG_ENV: &str = "LEXICON_CONFIG_PATH";

/// Read and validate lexicon tables from a JSON file
pub fn load_tables_from_file(path: &Path) -> AppResult<LexiconTables> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::FileSystem(format!("failed to read '{}': {}", path.display(), e))
    })?;
    let tables: LexiconTables = serde_json::from_str(&content).map_err(|e| {
        AppError::Lexicon(format!("failed to parse '{}': {}", path.display(), e))
    })?;
    tables.validate()?;
    Ok(tables)
}

/// Build a lexicon from a JSON file
pub fn load_lexicon_from_file(path: &Path) -> AppResult<Lexicon> {
    let tables = load_tables_from_file(path)?;
    info!(
        path = %path.display(),
        version = %tables.version,
        "Loaded lexicon tables from file"
    );
    Lexicon::from_tables(tables)
}

/// Resolve the lexicon for the configured translator
///
/// Uses `config.lexicon_path` when set, otherwise the shared compiled-in lexicon.
pub fn load_lexicon(config: &TranslatorConfig) -> Arc<Lexicon> {
    let Some(path) = config.lexicon_path.as_deref() else {
        info!("No lexicon file configured, using built-in lexicon");
        return default_lexicon();
    };

    match load_lexicon_from_file(Path::new(path)) {
        Ok(lexicon) => Arc::new(lexicon),
        Err(e) => {
            match &e {
                AppError::FileSystem(_) => {
                    error_logging::log_filesystem_error(&e, "load_lexicon", Some(path))
                }
                _ => error_logging::log_lexicon_error(&e, "load_lexicon", path),
            }
            warn!(
                path = %path,
                "Falling back to built-in lexicon"
            );
            default_lexicon()
        }
    }
}
