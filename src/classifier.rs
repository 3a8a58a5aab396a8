//! # Semantic Classifier
//!
//! Assigns every token left after base matching to a role: state descriptor,
//! action descriptor, plain adjective (a modifier with no translation),
//! connective (skipped) or unmatched. Scanning is left to right and multi-word
//! descriptors are preferred through longest-match, so discovery order within
//! each role is stable.

use tracing::trace;

use crate::lexicon::{DescriptorEntry, Gender, GrammaticalNumber, Lexicon, LexiconEntry};

// Function words that carry no meaning once descriptors are post-posed
const CONNECTIVES: &[&str] = &["and", "or", "of", "for", "to", "into", "with"];

/// Per-call parse of an ingredient phrase; never outlives one translation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPhrase<'a> {
    pub base: Option<&'a LexiconEntry>,
    pub states: Vec<&'a DescriptorEntry>,
    pub actions: Vec<&'a DescriptorEntry>,
    pub adjectives: Vec<String>,
    pub unmatched: Vec<String>,
}

impl ParsedPhrase<'_> {
    /// Whether any state or action descriptor was recognized
    pub fn has_descriptors(&self) -> bool {
        !self.states.is_empty() || !self.actions.is_empty()
    }

    /// Source words of every meaningful token: descriptors first, then unmatched
    ///
    /// Adjectives and connectives are left out since they never reach the output.
    pub fn meaningful_sources(&self) -> Vec<String> {
        self.states
            .iter()
            .chain(&self.actions)
            .map(|entry| entry.source.clone())
            .chain(self.unmatched.iter().cloned())
            .collect()
    }

    /// Number the descriptors must agree with
    pub fn number(&self) -> GrammaticalNumber {
        self.base.map(|entry| entry.number).unwrap_or_default()
    }

    /// Gender the descriptors must agree with
    pub fn gender(&self) -> Gender {
        self.base.map(|entry| entry.gender).unwrap_or_default()
    }
}

/// Classify the tokens remaining after base matching
pub fn classify<'a>(
    lexicon: &'a Lexicon,
    base: Option<&'a LexiconEntry>,
    tokens: &[&str],
) -> ParsedPhrase<'a> {
    let mut parsed = ParsedPhrase {
        base,
        ..Default::default()
    };

    let mut pos = 0;
    while pos < tokens.len() {
        let state = lexicon.states().longest_at(tokens, pos);
        let action = lexicon.actions().longest_at(tokens, pos);

        match (state, action) {
            (Some(s), Some(a)) if a.len > s.len => {
                trace!("'{}' is an action descriptor", a.entry.source);
                parsed.actions.push(a.entry);
                pos += a.len;
            }
            (Some(s), _) => {
                trace!("'{}' is a state descriptor", s.entry.source);
                parsed.states.push(s.entry);
                pos += s.len;
            }
            (None, Some(a)) => {
                trace!("'{}' is an action descriptor", a.entry.source);
                parsed.actions.push(a.entry);
                pos += a.len;
            }
            (None, None) => {
                let token = tokens[pos];
                if lexicon.is_modifier(token) {
                    parsed.adjectives.push(token.to_string());
                } else if !CONNECTIVES.contains(&token) {
                    parsed.unmatched.push(token.to_string());
                }
                pos += 1;
            }
        }
    }

    parsed
}
