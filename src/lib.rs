//! # Recipe Translator
//!
//! A deterministic rule engine that translates English recipe ingredient
//! phrases ("black beans, drained") and measures ("2 tbsp") into Italian.

pub mod agreement;
pub mod classifier;
pub mod composer;
pub mod config;
pub mod errors;
pub mod lexicon;
pub mod matcher;
pub mod measure;
pub mod normalizer;
pub mod observability;
pub mod observability_config;
pub mod translator;

// Re-export types for easier access
pub use lexicon::{Gender, GrammaticalNumber, Lexicon};
pub use translator::{IngredientLine, IngredientTranslator, TranslationResult};
