//! # Ingredient Translator
//!
//! Entry points of the translation engine. An [`IngredientTranslator`] holds a
//! shared, immutable [`Lexicon`] and runs the pipeline for each call:
//!
//! ```text
//! name:    normalize -> match (fixed | base) -> classify -> agree -> compose
//! measure: split -> parse quantity -> unit lookup -> render
//! ```
//!
//! Every call is independent; nothing is cached between calls, so one
//! translator can be shared across threads.
//!
//! ```rust
//! use recipe_translator::translator::IngredientTranslator;
//!
//! let translator = IngredientTranslator::default();
//! let result = translator.translate("black beans, drained", "2 cups");
//! assert_eq!(result.name, "Fagioli neri, scolati");
//! assert_eq!(result.measure, "2 tazze");
//! assert_eq!(result.original_name, "black beans, drained");
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::agreement::AgreementEngine;
use crate::classifier::{classify, ParsedPhrase};
use crate::composer::{capitalize_first, compose_parsed, HeadSource};
use crate::config::AppConfig;
use crate::lexicon::{default_lexicon, loader, Lexicon};
use crate::matcher::{match_phrase, PhraseMatch};
use crate::{measure, normalizer, observability};

/// Version of the translation rules, bumped when output for existing lexicon entries changes
pub const ENGINE_VERSION: &str = "5.0.0";

/// How an ingredient name was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Nothing left after normalization
    Empty,
    /// A fixed phrase translated as a whole; surrounding words are reported, not composed
    Fixed,
    /// Composed around a base ingredient
    Composed,
    /// Composed around an unmatched token because only descriptors were known
    HeadFallback,
    /// Nothing recognized; original returned capitalized
    Passthrough,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Empty => "empty",
            MatchOutcome::Fixed => "fixed",
            MatchOutcome::Composed => "composed",
            MatchOutcome::HeadFallback => "head_fallback",
            MatchOutcome::Passthrough => "passthrough",
        }
    }
}

/// A translated name with diagnostics about the match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientTranslation {
    pub name: String,
    pub outcome: MatchOutcome,
    /// Source tokens that did not make it into the translation
    pub untranslated: Vec<String>,
}

impl IngredientTranslation {
    /// Whether every meaningful word of the input was translated
    pub fn is_full_match(&self) -> bool {
        match self.outcome {
            MatchOutcome::Empty => true,
            MatchOutcome::Fixed | MatchOutcome::Composed => self.untranslated.is_empty(),
            MatchOutcome::HeadFallback | MatchOutcome::Passthrough => false,
        }
    }
}

/// The record returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub name: String,
    pub measure: String,
    pub original_name: String,
    pub original_measure: String,
}

/// One ingredient as delivered by a recipe source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Rule-based English→Italian ingredient translator
#[derive(Debug, Clone)]
pub struct IngredientTranslator {
    lexicon: Arc<Lexicon>,
    agreement: AgreementEngine,
    diagnostics_enabled: bool,
    metrics_enabled: bool,
}

impl Default for IngredientTranslator {
    fn default() -> Self {
        Self::new(default_lexicon())
    }
}

impl IngredientTranslator {
    /// Create a translator over a shared lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            agreement: AgreementEngine::default(),
            diagnostics_enabled: false,
            metrics_enabled: true,
        }
    }

    /// Create a translator from application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let lexicon = loader::load_lexicon(&config.translator);
        info!(
            engine_version = ENGINE_VERSION,
            lexicon_version = %lexicon.version(),
            "Ingredient translator ready"
        );
        Self {
            diagnostics_enabled: config.translator.diagnostics_enabled,
            metrics_enabled: config.observability.enable_metrics,
            ..Self::new(lexicon)
        }
    }

    /// Replace the agreement rules
    pub fn with_agreement(mut self, agreement: AgreementEngine) -> Self {
        self.agreement = agreement;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Translate an ingredient description, reporting how it matched
    pub fn translate_ingredient_detailed(&self, raw: &str) -> IngredientTranslation {
        let span = observability::translation_span("ingredient");
        let _enter = span.enter();
        let start = Instant::now();

        let normalized = normalizer::normalize(raw);
        let translation = if normalized.is_empty() {
            IngredientTranslation {
                name: String::new(),
                outcome: MatchOutcome::Empty,
                untranslated: Vec::new(),
            }
        } else {
            let tokens = normalizer::tokens(&normalized);
            match match_phrase(&self.lexicon, &tokens) {
                PhraseMatch::Fixed { entry, remaining } => IngredientTranslation {
                    name: capitalize_first(&entry.target),
                    outcome: MatchOutcome::Fixed,
                    untranslated: classify(&self.lexicon, None, &remaining).meaningful_sources(),
                },
                PhraseMatch::Base { entry, remaining } => {
                    self.compose(classify(&self.lexicon, Some(entry), &remaining), raw)
                }
                PhraseMatch::Unmatched { remaining } => {
                    self.compose(classify(&self.lexicon, None, &remaining), raw)
                }
            }
        };

        self.report(raw, &translation, start);
        translation
    }

    /// Translate an ingredient description
    pub fn translate_ingredient(&self, raw: &str) -> String {
        self.translate_ingredient_detailed(raw).name
    }

    /// Translate a `"<quantity> <unit>"` measure
    pub fn translate_measure(&self, raw: &str) -> String {
        let start = Instant::now();
        let translated = measure::translate_measure(&self.lexicon, raw);
        if self.metrics_enabled {
            observability::record_measure_metrics(translated != raw, start.elapsed());
        }
        translated
    }

    /// Translate a name and a measure into one result record
    pub fn translate(&self, name: &str, measure: &str) -> TranslationResult {
        TranslationResult {
            name: self.translate_ingredient(name),
            measure: self.translate_measure(measure),
            original_name: name.to_string(),
            original_measure: measure.to_string(),
        }
    }

    /// Translate an ingredient whose quantity and unit arrive separately
    pub fn translate_line(&self, line: &IngredientLine) -> TranslationResult {
        let measure = measure::join_measure(line.quantity, line.unit.as_deref());
        self.translate(&line.description, &measure)
    }

    /// Translate every ingredient of a recipe, preserving order
    pub fn translate_lines(&self, lines: &[IngredientLine]) -> Vec<TranslationResult> {
        lines.iter().map(|line| self.translate_line(line)).collect()
    }

    fn compose(&self, parsed: ParsedPhrase<'_>, raw: &str) -> IngredientTranslation {
        let composition = compose_parsed(&parsed, &self.agreement, raw);
        let outcome = match composition.head {
            HeadSource::Base => MatchOutcome::Composed,
            HeadSource::Unmatched => MatchOutcome::HeadFallback,
            HeadSource::Original => MatchOutcome::Passthrough,
        };
        IngredientTranslation {
            name: composition.text,
            outcome,
            untranslated: parsed.unmatched,
        }
    }

    fn report(&self, raw: &str, translation: &IngredientTranslation, start: Instant) {
        let full_match = translation.is_full_match();
        if !full_match && self.diagnostics_enabled {
            info!(
                input = %raw,
                output = %translation.name,
                outcome = translation.outcome.as_str(),
                untranslated = ?translation.untranslated,
                "Ingredient only partially translated"
            );
        } else {
            debug!(
                input = %raw,
                output = %translation.name,
                outcome = translation.outcome.as_str(),
                full_match,
                "Ingredient translated"
            );
        }

        if self.metrics_enabled {
            observability::record_ingredient_metrics(
                translation.outcome.as_str(),
                full_match,
                start.elapsed(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IngredientTranslator>();
        assert_send_sync::<Lexicon>();
    }

    #[test]
    fn test_outcomes() {
        let translator = IngredientTranslator::default();

        let fixed = translator.translate_ingredient_detailed("good quality olive oil");
        assert_eq!(fixed.outcome, MatchOutcome::Fixed);
        assert_eq!(fixed.name, "Olio d'oliva");
        assert!(fixed.is_full_match());

        let partial_fixed = translator.translate_ingredient_detailed("smoked olive oil");
        assert_eq!(partial_fixed.outcome, MatchOutcome::Fixed);
        assert_eq!(partial_fixed.name, "Olio d'oliva");
        assert_eq!(partial_fixed.untranslated, vec!["smoked"]);
        assert!(!partial_fixed.is_full_match());

        let composed = translator.translate_ingredient_detailed("garlic, minced");
        assert_eq!(composed.outcome, MatchOutcome::Composed);
        assert_eq!(composed.name, "Aglio tritato finemente");
        assert!(composed.is_full_match());

        let partial = translator.translate_ingredient_detailed("smoked garlic");
        assert_eq!(partial.outcome, MatchOutcome::Composed);
        assert_eq!(partial.name, "Aglio smoked");
        assert_eq!(partial.untranslated, vec!["smoked"]);
        assert!(!partial.is_full_match());

        let fallback = translator.translate_ingredient_detailed("seitan, sliced");
        assert_eq!(fallback.outcome, MatchOutcome::HeadFallback);
        assert_eq!(fallback.name, "Seitan affettato");

        let fallback = translator.translate_ingredient_detailed("cherry peppers, sliced");
        assert_eq!(fallback.outcome, MatchOutcome::HeadFallback);
        assert_eq!(fallback.name, "Cherry peppers affettato");
        assert_eq!(fallback.untranslated, vec!["cherry", "peppers"]);

        let passthrough = translator.translate_ingredient_detailed("xyzfood");
        assert_eq!(passthrough.outcome, MatchOutcome::Passthrough);
        assert_eq!(passthrough.name, "Xyzfood");
        assert!(!passthrough.is_full_match());

        let empty = translator.translate_ingredient_detailed("  ");
        assert_eq!(empty.outcome, MatchOutcome::Empty);
        assert_eq!(empty.name, "");
    }

    #[test]
    fn test_translate_line_joins_measure() {
        let translator = IngredientTranslator::default();
        let line = IngredientLine {
            quantity: Some(2.0),
            unit: Some("tbsp".to_string()),
            description: "olive oil".to_string(),
        };
        let result = translator.translate_line(&line);
        assert_eq!(result.name, "Olio d'oliva");
        assert_eq!(result.measure, "2 cucchiai");
        assert_eq!(result.original_measure, "2 tbsp");
        assert_eq!(result.original_name, "olive oil");
    }

    #[test]
    fn test_ingredient_line_deserialization_defaults() {
        let line: IngredientLine = serde_json::from_str(r#"{"description": "salt"}"#).unwrap();
        assert_eq!(line.quantity, None);
        assert_eq!(line.unit, None);

        let line: IngredientLine =
            serde_json::from_str(r#"{"quantity": null, "unit": "", "description": "basil"}"#)
                .unwrap();
        let result = IngredientTranslator::default().translate_line(&line);
        assert_eq!(result.measure, "");
        assert_eq!(result.name, "Basilico");
    }

    #[test]
    fn test_result_serializes_with_snake_case_keys() {
        let result = IngredientTranslator::default().translate("egg", "1");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], "Uovo");
        assert_eq!(json["measure"], "1");
        assert_eq!(json["original_name"], "egg");
        assert_eq!(json["original_measure"], "1");
    }
}
