//! # Measure Translator
//!
//! Translates `"<quantity> <unit>"` strings, choosing the singular unit form
//! only when the quantity is exactly one.
//!
//! ## Quantity formats
//!
//! - **Decimals**: `2`, `0.5`, `2.0`
//! - **Fractions**: `1/2`, `3/4`
//! - **Unicode fractions**: `½`, `1½`
//! - **Mixed numbers**: `1 1/2`, `2 ½`
//!
//! Anything else in the quantity position (words like "a", "some", an empty
//! string, negative or non-finite numbers) leaves the measure untouched.
//!
//! ```rust
//! use recipe_translator::lexicon::default_lexicon;
//! use recipe_translator::measure::translate_measure;
//!
//! let lexicon = default_lexicon();
//! assert_eq!(translate_measure(&lexicon, "1 tbsp"), "1 cucchiaio");
//! assert_eq!(translate_measure(&lexicon, "2 tbsp"), "2 cucchiai");
//! assert_eq!(translate_measure(&lexicon, "a pinch"), "a pinch");
//! ```

use tracing::debug;

use crate::lexicon::Lexicon;

const UNICODE_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Parse a single quantity token
pub fn parse_quantity(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let value = if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator: f64 = parse_plain(numerator)?;
        let denominator: f64 = parse_plain(denominator)?;
        if denominator == 0.0 {
            return None;
        }
        numerator / denominator
    } else if let Some(fraction) = token.chars().last().and_then(unicode_fraction) {
        let whole = &token[..token.len() - token.chars().last()?.len_utf8()];
        if whole.is_empty() {
            fraction
        } else {
            parse_plain(whole)? + fraction
        }
    } else {
        parse_plain(token)?
    };

    (value.is_finite() && value >= 0.0).then_some(value)
}

fn parse_plain(text: &str) -> Option<f64> {
    // Reject words f64::from_str would accept, such as "inf" or "nan"
    if !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}

fn unicode_fraction(c: char) -> Option<f64> {
    UNICODE_FRACTIONS
        .iter()
        .find(|(fraction, _)| *fraction == c)
        .map(|&(_, value)| value)
}

/// A token that can complete a whole number ("1 1/2", "2 ½")
fn parse_fraction_part(token: &str) -> Option<f64> {
    if token.contains('/') || token.chars().count() == 1 {
        parse_quantity(token).filter(|v| *v > 0.0 && *v < 1.0)
    } else {
        None
    }
}

/// Render a quantity in its shortest exact decimal form
///
/// Whole values print without a trailing ".0". No rounding is applied, so the
/// rendered number always agrees with the unit form chosen for it.
pub fn format_quantity(quantity: f64) -> String {
    // f64 Display never uses exponent notation and drops ".0"; -0 becomes 0
    if quantity == 0.0 {
        return "0".to_string();
    }
    quantity.to_string()
}

/// Translate a unit, choosing singular only for a quantity of exactly one
///
/// Unknown units are returned unchanged.
pub fn translate_unit(lexicon: &Lexicon, unit: &str, quantity: f64) -> String {
    if unit.trim().is_empty() {
        return String::new();
    }

    match lexicon.unit(unit) {
        Some(entry) if quantity == 1.0 => entry.singular.clone(),
        Some(entry) => entry.plural.clone(),
        None => {
            debug!(unit = %unit, "Unknown unit passed through");
            unit.to_string()
        }
    }
}

/// Translate a `"<quantity> <unit>"` measure
pub fn translate_measure(lexicon: &Lexicon, measure: &str) -> String {
    let trimmed = measure.trim();
    let (quantity_text, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((quantity, rest)) => (quantity, rest.trim_start()),
        None => (trimmed, ""),
    };

    let Some(mut quantity) = parse_quantity(quantity_text) else {
        debug!(measure = %measure, "Measure has no numeric quantity, left unchanged");
        return measure.to_string();
    };

    let mut unit = rest;
    if quantity.fract() == 0.0 {
        let (next, after) = match rest.split_once(char::is_whitespace) {
            Some((next, after)) => (next, after.trim_start()),
            None => (rest, ""),
        };
        if let Some(fraction) = parse_fraction_part(next) {
            quantity += fraction;
            unit = after;
        }
    }

    let translated_unit = translate_unit(lexicon, unit, quantity);
    format!("{} {}", format_quantity(quantity), translated_unit)
        .trim()
        .to_string()
}

/// Join separately supplied quantity and unit into a measure string
pub fn join_measure(quantity: Option<f64>, unit: Option<&str>) -> String {
    let quantity = quantity.map(format_quantity).unwrap_or_default();
    format!("{} {}", quantity, unit.unwrap_or("").trim())
        .trim()
        .to_string()
}
