//! # Phrase Matcher
//!
//! Finds the fixed phrase or base ingredient of a normalized phrase. Fixed
//! phrases are tried first and end decomposition; otherwise the longest base
//! key is located. Either way the matched words are removed from the token
//! stream, and what is left goes to the classifier.

use tracing::debug;

use crate::lexicon::{FixedPhrase, Lexicon, LexiconEntry};

/// Result of matching a token stream against the lexicon
#[derive(Debug, Clone, PartialEq)]
pub enum PhraseMatch<'a, 't> {
    /// An idiom covering (part of) the phrase; the remaining tokens are only
    /// checked for words the idiom leaves out
    Fixed {
        entry: &'a FixedPhrase,
        remaining: Vec<&'t str>,
    },
    /// A base ingredient, with the tokens left once its words are removed
    Base {
        entry: &'a LexiconEntry,
        remaining: Vec<&'t str>,
    },
    /// Nothing matched; every token is left for classification
    Unmatched { remaining: Vec<&'t str> },
}

/// Match normalized tokens, fixed phrases first, then base ingredients
pub fn match_phrase<'a, 't>(lexicon: &'a Lexicon, tokens: &[&'t str]) -> PhraseMatch<'a, 't> {
    if let Some(hit) = lexicon.fixed_phrases().find(tokens) {
        let remaining = without_hit(tokens, hit.start, hit.len);
        debug!(
            key = %hit.entry.source,
            target = %hit.entry.target,
            remaining = remaining.len(),
            "Fixed phrase matched"
        );
        return PhraseMatch::Fixed {
            entry: hit.entry,
            remaining,
        };
    }

    if let Some(hit) = lexicon.base().find(tokens) {
        let remaining = without_hit(tokens, hit.start, hit.len);
        debug!(
            key = %hit.entry.source,
            target = %hit.entry.target,
            number = ?hit.entry.number,
            remaining = remaining.len(),
            "Base ingredient matched"
        );
        return PhraseMatch::Base {
            entry: hit.entry,
            remaining,
        };
    }

    PhraseMatch::Unmatched {
        remaining: tokens.to_vec(),
    }
}

fn without_hit<'t>(tokens: &[&'t str], start: usize, len: usize) -> Vec<&'t str> {
    tokens[..start]
        .iter()
        .chain(&tokens[start + len..])
        .copied()
        .collect()
}
