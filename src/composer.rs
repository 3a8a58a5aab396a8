//! # Phrase Composer
//!
//! Assembles the target phrase in Italian word order, noun first:
//!
//! ```text
//! base [unmatched...] [", " states...] [" " actions...]
//! "fagioli neri" + [scolati] + []        -> "Fagioli neri, scolati"
//! "peperone rosso" + [grande] + [affettato] -> "Peperone rosso, grande affettato"
//! "aglio" + "smoked"                     -> "Aglio smoked"
//! ```
//!
//! Unmatched words are passed through in their original order right after the
//! head, so nothing the lexicon does not know is lost.

use crate::agreement::AgreementEngine;
use crate::classifier::ParsedPhrase;
use crate::lexicon::{Gender, GrammaticalNumber};

/// Where the head of a composed phrase came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadSource {
    /// The matched base ingredient
    Base,
    /// The unmatched tokens, used when only descriptors were recognized
    Unmatched,
    /// Nothing usable; the original input is returned
    Original,
}

/// A composed name and the source of its head
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub text: String,
    pub head: HeadSource,
}

/// Compose a parsed phrase, falling back to `original` when no head exists
pub fn compose_parsed(
    parsed: &ParsedPhrase<'_>,
    agreement: &AgreementEngine,
    original: &str,
) -> Composition {
    let (head, source) = match parsed.base {
        Some(base) => (
            with_passthrough(&base.target, &parsed.unmatched),
            HeadSource::Base,
        ),
        None if parsed.has_descriptors() && !parsed.unmatched.is_empty() => {
            (parsed.unmatched.join(" "), HeadSource::Unmatched)
        }
        None => {
            return Composition {
                text: capitalize_first(original.trim()),
                head: HeadSource::Original,
            }
        }
    };

    // An unknown head has no known number or gender
    let (number, gender) = match source {
        HeadSource::Base => (parsed.number(), parsed.gender()),
        _ => (GrammaticalNumber::Singular, Gender::Masculine),
    };

    let states: Vec<String> = parsed
        .states
        .iter()
        .map(|d| agreement.agree(d, number, gender))
        .collect();
    let actions: Vec<String> = parsed
        .actions
        .iter()
        .map(|d| agreement.agree(d, number, gender))
        .collect();

    Composition {
        text: compose(&head, &states, &actions),
        head: source,
    }
}

fn with_passthrough(target: &str, unmatched: &[String]) -> String {
    std::iter::once(target)
        .chain(unmatched.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join head, states and actions, capitalizing the first character
pub fn compose(head: &str, states: &[String], actions: &[String]) -> String {
    let mut text = head.to_string();
    if !states.is_empty() {
        text.push_str(", ");
        text.push_str(&states.join(", "));
    }
    if !actions.is_empty() {
        text.push(' ');
        text.push_str(&actions.join(" "));
    }
    capitalize_first(&text)
}

/// Upper-case the first character only
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::lexicon::default_lexicon;

    #[test]
    fn test_compose_layout() {
        assert_eq!(compose("aglio", &[], &[]), "Aglio");
        assert_eq!(
            compose("fagioli neri", &["scolati".to_string()], &[]),
            "Fagioli neri, scolati"
        );
        assert_eq!(
            compose(
                "peperone",
                &["grande".to_string(), "rosso".to_string()],
                &["affettato".to_string()]
            ),
            "Peperone, grande, rosso affettato"
        );
        assert_eq!(compose("cipolla", &[], &["tritata".to_string()]), "Cipolla tritata");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("xyzfood"), "Xyzfood");
        assert_eq!(capitalize_first("èrba"), "Èrba");
        assert_eq!(capitalize_first("Already mixed CASE"), "Already mixed CASE");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_plural_agreement_applied() {
        let lexicon = default_lexicon();
        let parsed = classify(&lexicon, lexicon.base().get("black beans"), &["drained"]);
        let composed = compose_parsed(&parsed, &AgreementEngine::new(), "black beans, drained");
        assert_eq!(composed.text, "Fagioli neri, scolati");
        assert_eq!(composed.head, HeadSource::Base);
    }

    #[test]
    fn test_feminine_agreement_applied() {
        let lexicon = default_lexicon();
        let parsed = classify(&lexicon, lexicon.base().get("carrots"), &["peeled", "diced"]);
        let composed = compose_parsed(&parsed, &AgreementEngine::new(), "carrots, peeled and diced");
        assert_eq!(composed.text, "Carote, pelate tagliate a dadini");
    }

    #[test]
    fn test_unmatched_head_fallback() {
        let lexicon = default_lexicon();
        let parsed = classify(&lexicon, None, &["quorn", "sliced"]);
        let composed = compose_parsed(&parsed, &AgreementEngine::new(), "quorn, sliced");
        assert_eq!(composed.text, "Quorn affettato");
        assert_eq!(composed.head, HeadSource::Unmatched);
    }

    #[test]
    fn test_unmatched_words_are_passed_through() {
        let lexicon = default_lexicon();

        let parsed = classify(&lexicon, lexicon.base().get("garlic"), &["smoked"]);
        let composed = compose_parsed(&parsed, &AgreementEngine::new(), "smoked garlic");
        assert_eq!(composed.text, "Aglio smoked");

        let parsed = classify(&lexicon, lexicon.base().get("black beans"), &["can", "rinsed"]);
        let composed = compose_parsed(&parsed, &AgreementEngine::new(), "can black beans, rinsed");
        assert_eq!(composed.text, "Fagioli neri can, sciacquati");

        // Every unknown word stays in the head, not only the first one
        let parsed = classify(&lexicon, None, &["vegan", "chorizo", "sliced"]);
        let composed = compose_parsed(&parsed, &AgreementEngine::new(), "vegan chorizo, sliced");
        assert_eq!(composed.text, "Vegan chorizo affettato");
        assert_eq!(composed.head, HeadSource::Unmatched);
    }

    #[test]
    fn test_original_fallback() {
        let lexicon = default_lexicon();
        let parsed = classify(&lexicon, None, &["xyzfood"]);
        let composed = compose_parsed(&parsed, &AgreementEngine::new(), " xyzfood ");
        assert_eq!(composed.text, "Xyzfood");
        assert_eq!(composed.head, HeadSource::Original);
    }
}
