//! # Lexical Normalizer
//!
//! Reduces a raw ingredient description to the canonical form used for lexicon
//! lookups:
//!
//! ```text
//! "The Black Beans (15 oz), drained."  ->  "black beans drained"
//! ```
//!
//! Steps, in order: lower-case, drop `( … )` and `[ … ]` asides, turn
//! punctuation into token breaks (word-internal apostrophes and hyphens
//! survive), collapse whitespace, drop one leading article.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref ASIDE_PATTERN: Regex =
        Regex::new(r"\([^)]*\)|\[[^\]]*\]").expect("Aside pattern should be valid");
}

const ARTICLES: &[&str] = &["a", "an", "the"];

/// Normalize a raw phrase; empty or whitespace-only input gives `""`
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let without_asides = ASIDE_PATTERN.replace_all(&lowered, " ");

    let spaced: String = without_asides
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || is_joiner(c) {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut words: Vec<&str> = spaced
        .split_whitespace()
        .map(|word| word.trim_matches(is_joiner))
        .filter(|word| !word.is_empty())
        .collect();

    if words.len() > 1 && ARTICLES.contains(&words[0]) {
        words.remove(0);
    }

    let normalized = words.join(" ");
    trace!("Normalized '{}' -> '{}'", input, normalized);
    normalized
}

/// Split normalized text into tokens
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '-' | '’')
}
