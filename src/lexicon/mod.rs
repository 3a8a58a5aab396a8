//! # Lexicon Store
//!
//! Immutable English→Italian mapping tables consulted by the translation engine:
//! base ingredients, state descriptors, action descriptors, measurement units,
//! fixed idiomatic phrases and the set of modifier tokens.
//!
//! ## Matching
//!
//! Every category is backed by a [`PhraseTable`]. Entries are kept sorted by
//! descending key length (characters), ties broken alphabetically, so that the
//! first hit while iterating is always the longest key. The same routine serves
//! all categories:
//!
//! ```text
//! "large red bell pepper"
//!   keys tried: "red bell pepper" (15) -> hit at token 1
//!               "bell pepper" (11)     -> never reached
//!               "pepper" (6)           -> never reached
//! ```
//!
//! A lexicon is built once (either from the compiled-in tables or from a JSON
//! file, see [`loader`]) and shared behind an `Arc`; nothing mutates it after
//! construction.

pub mod builtin;
pub mod loader;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::normalizer;

/// Grammatical number carried by a base ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalNumber {
    #[default]
    Singular,
    Plural,
}

/// Grammatical gender of a base ingredient's target noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

/// Typed lexicon categories, each backed by its own table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconCategory {
    Base,
    State,
    Action,
    Unit,
    FixedPhrase,
}

impl LexiconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexiconCategory::Base => "base",
            LexiconCategory::State => "state",
            LexiconCategory::Action => "action",
            LexiconCategory::Unit => "unit",
            LexiconCategory::FixedPhrase => "fixed_phrase",
        }
    }
}

impl fmt::Display for LexiconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base ingredient: the head noun of a phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub number: GrammaticalNumber,
    #[serde(default)]
    pub gender: Gender,
}

/// A state or action descriptor
///
/// `target` holds the masculine singular form. `plural`, `feminine` and
/// `feminine_plural` override the suffix rules of the agreement engine for
/// forms they cannot derive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorEntry {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feminine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feminine_plural: Option<String>,
}

/// An idiom translated as a whole, bypassing composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedPhrase {
    pub source: String,
    pub target: String,
}

/// A measurement unit with both number forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub source: String,
    pub singular: String,
    pub plural: String,
}

/// Anything stored in a [`PhraseTable`]
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for LexiconEntry {
    fn key(&self) -> &str {
        &self.source
    }
}

impl Keyed for DescriptorEntry {
    fn key(&self) -> &str {
        &self.source
    }
}

impl Keyed for FixedPhrase {
    fn key(&self) -> &str {
        &self.source
    }
}

impl Keyed for UnitEntry {
    fn key(&self) -> &str {
        &self.source
    }
}

/// Location of a key inside a token stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhraseHit<'a, V> {
    /// Index of the first matched token
    pub start: usize,
    /// Number of tokens covered by the key
    pub len: usize,
    pub entry: &'a V,
}

/// Lookup table ordered for longest-match-first scanning
#[derive(Debug, Clone)]
pub struct PhraseTable<V> {
    entries: Vec<(Vec<String>, V)>,
    index: HashMap<String, usize>,
}

impl<V: Keyed> PhraseTable<V> {
    pub fn new(mut values: Vec<V>) -> Self {
        values.sort_by(|a, b| {
            b.key()
                .chars()
                .count()
                .cmp(&a.key().chars().count())
                .then_with(|| a.key().cmp(b.key()))
        });

        let entries: Vec<(Vec<String>, V)> = values
            .into_iter()
            .map(|value| {
                let tokens = value.key().split_whitespace().map(String::from).collect();
                (tokens, value)
            })
            .collect();

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (_, value))| (value.key().to_string(), i))
            .collect();

        Self { entries, index }
    }

    /// First (longest) key occurring anywhere in `tokens` as a contiguous run
    pub fn find(&self, tokens: &[&str]) -> Option<PhraseHit<'_, V>> {
        self.entries.iter().find_map(|(key, entry)| {
            position_of(tokens, key).map(|start| PhraseHit {
                start,
                len: key.len(),
                entry,
            })
        })
    }

    /// Longest key that starts exactly at `pos`
    pub fn longest_at(&self, tokens: &[&str], pos: usize) -> Option<PhraseHit<'_, V>> {
        let rest = tokens.get(pos..)?;
        self.entries
            .iter()
            .find(|(key, _)| starts_with_tokens(rest, key))
            .map(|(key, entry)| PhraseHit {
                start: pos,
                len: key.len(),
                entry,
            })
    }

    /// Exact key lookup
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in match priority order
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

fn starts_with_tokens(tokens: &[&str], key: &[String]) -> bool {
    !key.is_empty()
        && key.len() <= tokens.len()
        && tokens.iter().zip(key).all(|(t, k)| *t == k.as_str())
}

fn position_of(tokens: &[&str], key: &[String]) -> Option<usize> {
    if key.is_empty() || key.len() > tokens.len() {
        return None;
    }
    tokens
        .windows(key.len())
        .position(|window| starts_with_tokens(window, key))
}

/// Raw lexicon tables, as compiled in or read from a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconTables {
    pub version: String,
    pub base: Vec<LexiconEntry>,
    #[serde(default)]
    pub states: Vec<DescriptorEntry>,
    #[serde(default)]
    pub actions: Vec<DescriptorEntry>,
    pub units: Vec<UnitEntry>,
    #[serde(default)]
    pub fixed_phrases: Vec<FixedPhrase>,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

impl LexiconTables {
    /// Validate lexicon tables before they are turned into a [`Lexicon`]
    pub fn validate(&self) -> AppResult<()> {
        if self.version.trim().is_empty() {
            return Err(AppError::Lexicon("version cannot be empty".to_string()));
        }
        if self.base.is_empty() {
            return Err(AppError::Lexicon("base table cannot be empty".to_string()));
        }
        if self.units.is_empty() {
            return Err(AppError::Lexicon("units table cannot be empty".to_string()));
        }

        validate_phrase_keys(
            LexiconCategory::Base,
            self.base.iter().map(|e| (e.source.as_str(), e.target.as_str())),
        )?;
        validate_phrase_keys(
            LexiconCategory::State,
            self.states.iter().map(|e| (e.source.as_str(), e.target.as_str())),
        )?;
        validate_phrase_keys(
            LexiconCategory::Action,
            self.actions.iter().map(|e| (e.source.as_str(), e.target.as_str())),
        )?;
        validate_phrase_keys(
            LexiconCategory::FixedPhrase,
            self.fixed_phrases
                .iter()
                .map(|e| (e.source.as_str(), e.target.as_str())),
        )?;

        let mut seen = HashSet::new();
        for (i, unit) in self.units.iter().enumerate() {
            let key = unit_key(&unit.source);
            if key.is_empty() || key != unit.source {
                return Err(AppError::Lexicon(format!(
                    "unit[{}] '{}' must be lower-case with single spaces",
                    i, unit.source
                )));
            }
            if unit.singular.trim().is_empty() || unit.plural.trim().is_empty() {
                return Err(AppError::Lexicon(format!(
                    "unit[{}] '{}' needs both singular and plural forms",
                    i, unit.source
                )));
            }
            if !seen.insert(key) {
                return Err(AppError::Lexicon(format!(
                    "unit '{}' is defined more than once",
                    unit.source
                )));
            }
        }

        for (i, modifier) in self.modifiers.iter().enumerate() {
            if modifier.is_empty() || normalizer::normalize(modifier) != *modifier {
                return Err(AppError::Lexicon(format!(
                    "modifiers[{}] '{}' must be a single normalized token",
                    i, modifier
                )));
            }
            if modifier.split_whitespace().count() != 1 {
                return Err(AppError::Lexicon(format!(
                    "modifiers[{}] '{}' must be a single token",
                    i, modifier
                )));
            }
        }

        Ok(())
    }
}

fn validate_phrase_keys<'a>(
    category: LexiconCategory,
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> AppResult<()> {
    let mut seen = HashSet::new();
    for (i, (source, target)) in pairs.enumerate() {
        if source.trim().is_empty() {
            return Err(AppError::Lexicon(format!(
                "{}[{}] source cannot be empty",
                category, i
            )));
        }
        if target.trim().is_empty() {
            return Err(AppError::Lexicon(format!(
                "{}[{}] '{}' has an empty target",
                category, i, source
            )));
        }
        if source.chars().any(|c| c.is_control()) {
            return Err(AppError::Lexicon(format!(
                "{}[{}] '{}' contains control characters",
                category, i, source
            )));
        }
        // Keys are compared against normalized input, so they must already be normalized
        if normalizer::normalize(source) != source {
            return Err(AppError::Lexicon(format!(
                "{}[{}] '{}' is not in normalized form",
                category, i, source
            )));
        }
        if !seen.insert(source) {
            return Err(AppError::Lexicon(format!(
                "{} '{}' is defined more than once",
                category, source
            )));
        }
    }
    Ok(())
}

/// Canonical form of a unit for lookup
pub fn unit_key(unit: &str) -> String {
    unit.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// The immutable lexicon consulted by every translation call
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: String,
    base: PhraseTable<LexiconEntry>,
    states: PhraseTable<DescriptorEntry>,
    actions: PhraseTable<DescriptorEntry>,
    units: PhraseTable<UnitEntry>,
    fixed_phrases: PhraseTable<FixedPhrase>,
    modifiers: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from validated tables
    pub fn from_tables(tables: LexiconTables) -> AppResult<Self> {
        tables.validate()?;
        Ok(Self::build(tables))
    }

    /// The compiled-in English→Italian lexicon
    pub fn builtin() -> Self {
        Self::build(builtin::tables())
    }

    fn build(tables: LexiconTables) -> Self {
        let lexicon = Self {
            version: tables.version,
            base: PhraseTable::new(tables.base),
            states: PhraseTable::new(tables.states),
            actions: PhraseTable::new(tables.actions),
            units: PhraseTable::new(tables.units),
            fixed_phrases: PhraseTable::new(tables.fixed_phrases),
            modifiers: tables.modifiers.into_iter().collect(),
        };

        info!(
            version = %lexicon.version,
            base = lexicon.base.len(),
            states = lexicon.states.len(),
            actions = lexicon.actions.len(),
            units = lexicon.units.len(),
            fixed_phrases = lexicon.fixed_phrases.len(),
            "Lexicon built"
        );
        lexicon
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn base(&self) -> &PhraseTable<LexiconEntry> {
        &self.base
    }

    pub fn states(&self) -> &PhraseTable<DescriptorEntry> {
        &self.states
    }

    pub fn actions(&self) -> &PhraseTable<DescriptorEntry> {
        &self.actions
    }

    pub fn units(&self) -> &PhraseTable<UnitEntry> {
        &self.units
    }

    pub fn fixed_phrases(&self) -> &PhraseTable<FixedPhrase> {
        &self.fixed_phrases
    }

    /// Look up a unit, ignoring case and repeated whitespace
    pub fn unit(&self, unit: &str) -> Option<&UnitEntry> {
        self.units.get(&unit_key(unit))
    }

    /// Whether a token belongs to the modifier (adjective) set
    pub fn is_modifier(&self, token: &str) -> bool {
        self.modifiers.contains(token)
    }

    /// Number of entries in a category
    pub fn len(&self, category: LexiconCategory) -> usize {
        match category {
            LexiconCategory::Base => self.base.len(),
            LexiconCategory::State => self.states.len(),
            LexiconCategory::Action => self.actions.len(),
            LexiconCategory::Unit => self.units.len(),
            LexiconCategory::FixedPhrase => self.fixed_phrases.len(),
        }
    }
}

lazy_static! {
    static ref DEFAULT_LEXICON: Arc<Lexicon> = Arc::new(Lexicon::builtin());
}

/// Shared handle to the compiled-in lexicon, built on first use
pub fn default_lexicon() -> Arc<Lexicon> {
    Arc::clone(&DEFAULT_LEXICON)
}
