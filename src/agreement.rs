//! # Agreement Engine
//!
//! Rewrites descriptor endings so they agree in number and gender with the
//! head noun. Descriptors are stored in the masculine singular, so that form
//! is the identity. Every other form uses, in order:
//!
//! 1. the explicit form stored on the lexicon entry, if any;
//! 2. the first [`SuffixRule`] of that form's table whose suffix ends the
//!    descriptor's first word;
//! 3. the descriptor unchanged.
//!
//! Only the first word inflects: "tagliato a dadini" becomes
//! "tagliati a dadini" or "tagliate a dadini".

use tracing::trace;

use crate::lexicon::{DescriptorEntry, Gender, GrammaticalNumber};

/// One ending rewrite, e.g. `ato` -> `ati`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: String,
    pub replacement: String,
}

impl SuffixRule {
    pub fn new(suffix: &str, replacement: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Masculine plural endings, most specific first
pub const PLURAL_SUFFIXES: &[(&str, &str)] = &[
    // participles
    ("ato", "ati"),
    ("ito", "iti"),
    ("uto", "uti"),
    // hard consonants keep their sound
    ("co", "chi"),
    ("go", "ghi"),
    ("io", "i"),
    // terminal vowels
    ("o", "i"),
    ("e", "i"),
];

/// Feminine singular endings
pub const FEMININE_SUFFIXES: &[(&str, &str)] = &[("o", "a")];

/// Feminine plural endings, most specific first
pub const FEMININE_PLURAL_SUFFIXES: &[(&str, &str)] = &[
    ("co", "che"),
    ("go", "ghe"),
    ("io", "ie"),
    ("o", "e"),
    ("e", "i"),
];

fn rule_table(rows: &[(&str, &str)]) -> Vec<SuffixRule> {
    rows.iter()
        .map(|&(suffix, replacement)| SuffixRule::new(suffix, replacement))
        .collect()
}

/// Table-driven number and gender agreement for descriptors
#[derive(Debug, Clone)]
pub struct AgreementEngine {
    plural_rules: Vec<SuffixRule>,
    feminine_rules: Vec<SuffixRule>,
    feminine_plural_rules: Vec<SuffixRule>,
}

impl Default for AgreementEngine {
    fn default() -> Self {
        Self::with_rules(rule_table(PLURAL_SUFFIXES))
    }
}

impl AgreementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using a custom masculine plural rule table, tried in the given order
    ///
    /// Feminine forms keep the built-in tables.
    pub fn with_rules(plural_rules: Vec<SuffixRule>) -> Self {
        Self {
            plural_rules,
            feminine_rules: rule_table(FEMININE_SUFFIXES),
            feminine_plural_rules: rule_table(FEMININE_PLURAL_SUFFIXES),
        }
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.plural_rules
    }

    /// Render a descriptor in the given number and gender
    pub fn agree(
        &self,
        descriptor: &DescriptorEntry,
        number: GrammaticalNumber,
        gender: Gender,
    ) -> String {
        let (explicit, rules) = match (gender, number) {
            (Gender::Masculine, GrammaticalNumber::Singular) => return descriptor.target.clone(),
            (Gender::Masculine, GrammaticalNumber::Plural) => {
                (&descriptor.plural, &self.plural_rules)
            }
            (Gender::Feminine, GrammaticalNumber::Singular) => {
                (&descriptor.feminine, &self.feminine_rules)
            }
            (Gender::Feminine, GrammaticalNumber::Plural) => {
                (&descriptor.feminine_plural, &self.feminine_plural_rules)
            }
        };

        match explicit {
            Some(form) => form.clone(),
            None => inflect(&descriptor.target, rules),
        }
    }

    /// Apply the first matching masculine plural rule to the first word of `text`
    pub fn pluralize(&self, text: &str) -> String {
        inflect(text, &self.plural_rules)
    }
}

fn inflect(text: &str, rules: &[SuffixRule]) -> String {
    let (head, tail) = match text.find(' ') {
        Some(i) => text.split_at(i),
        None => (text, ""),
    };

    for rule in rules {
        if let Some(stem) = head.strip_suffix(rule.suffix.as_str()) {
            if stem.is_empty() {
                continue;
            }
            let inflected = format!("{}{}{}", stem, rule.replacement, tail);
            trace!("Inflected '{}' -> '{}' via -{}", text, inflected, rule.suffix);
            return inflected;
        }
    }

    trace!("No rule for '{}', keeping it unchanged", text);
    text.to_string()
}
