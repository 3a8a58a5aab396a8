//! # Ingredient Translation Tests
//!
//! End-to-end tests of ingredient name translation against the built-in lexicon.

use recipe_translator::composer::capitalize_first;
use recipe_translator::translator::{IngredientTranslator, MatchOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> IngredientTranslator {
        IngredientTranslator::default()
    }

    #[test]
    fn test_every_base_key_yields_its_head_noun() {
        let translator = translator();
        for entry in translator.lexicon().base().iter() {
            let translated = translator.translate_ingredient(&entry.source);
            assert!(
                translated.starts_with(&capitalize_first(&entry.target)),
                "'{}' translated to '{}', expected head '{}'",
                entry.source,
                translated,
                entry.target
            );
        }
    }

    #[test]
    fn test_longest_match_precedence() {
        let translator = translator();
        assert_eq!(translator.translate_ingredient("cherry tomatoes"), "Pomodorini");
        assert_eq!(translator.translate_ingredient("tomatoes"), "Pomodori");
        assert_eq!(
            translator.translate_ingredient("large red bell pepper"),
            "Peperone rosso, grande"
        );
        assert_eq!(
            translator.translate_ingredient("extra virgin olive oil"),
            "Olio extravergine d'oliva"
        );
    }

    #[test]
    fn test_plural_agreement() {
        let translator = translator();
        assert_eq!(
            translator.translate_ingredient("black beans, drained"),
            "Fagioli neri, scolati"
        );
        assert_eq!(
            translator.translate_ingredient("chickpeas, drained and rinsed"),
            "Ceci, scolati, sciacquati"
        );
        assert_eq!(
            translator.translate_ingredient("Tomatoes, peeled and diced"),
            "Pomodori, pelati tagliati a dadini"
        );
        assert_eq!(
            translator.translate_ingredient("spinach, roughly chopped"),
            "Spinaci tritati grossolanamente"
        );
        assert_eq!(translator.translate_ingredient("mushrooms, sliced"), "Funghi affettati");
    }

    #[test]
    fn test_feminine_agreement() {
        let translator = translator();
        assert_eq!(translator.translate_ingredient("carrots, peeled"), "Carote, pelate");
        assert_eq!(translator.translate_ingredient("eggs, beaten"), "Uova sbattute");
        assert_eq!(
            translator.translate_ingredient("red onion, thinly sliced"),
            "Cipolla rossa affettata sottilmente"
        );
        assert_eq!(
            translator.translate_ingredient("freshly grated mozzarella"),
            "Mozzarella grattugiata fresca"
        );
        // Masculine heads are unaffected
        assert_eq!(translator.translate_ingredient("egg, beaten"), "Uovo sbattuto");
    }

    #[test]
    fn test_explicit_plural_forms() {
        let translator = translator();
        assert_eq!(
            translator.translate_ingredient("organic black beans"),
            "Fagioli neri, biologici"
        );
        assert_eq!(translator.translate_ingredient("canned chickpeas"), "Ceci, in scatola");
        assert_eq!(
            translator.translate_ingredient("fresh basil leaves"),
            "Foglie di basilico, fresche"
        );
    }

    #[test]
    fn test_singular_descriptors_unchanged() {
        let translator = translator();
        assert_eq!(translator.translate_ingredient("dried oregano"), "Origano, secco");
        assert_eq!(translator.translate_ingredient("fresh basil"), "Basilico, fresco");
        assert_eq!(
            translator.translate_ingredient("ground black pepper"),
            "Pepe nero, macinato"
        );
        assert_eq!(
            translator.translate_ingredient("freshly grated parmesan cheese"),
            "Parmigiano grattugiato fresco"
        );
    }

    #[test]
    fn test_fixed_phrases_bypass_composition() {
        let translator = translator();
        assert_eq!(
            translator.translate_ingredient("salt and pepper to taste"),
            "Sale e pepe q.b."
        );
        assert_eq!(
            translator.translate_ingredient("packed brown sugar"),
            "Zucchero di canna"
        );
        assert_eq!(
            translator.translate_ingredient("tomato paste"),
            "Concentrato di pomodoro"
        );
        assert_eq!(
            translator.translate_ingredient("All-Purpose Flour, sifted"),
            "Farina 00"
        );
    }

    #[test]
    fn test_normalization_before_matching() {
        let translator = translator();
        assert_eq!(
            translator.translate_ingredient("The Cherry Tomatoes (halved)"),
            "Pomodorini"
        );
        assert_eq!(translator.translate_ingredient("  an EGG. "), "Uovo");
        assert_eq!(
            translator.translate_ingredient("black beans (15 oz can), rinsed"),
            "Fagioli neri, sciacquati"
        );
    }

    #[test]
    fn test_unknown_ingredient_passthrough() {
        let translator = translator();
        assert_eq!(translator.translate_ingredient("xyzfood"), "Xyzfood");
        assert_eq!(
            translator.translate_ingredient("vegan chorizo crumbles"),
            "Vegan chorizo crumbles"
        );
    }

    #[test]
    fn test_empty_input() {
        let translator = translator();
        assert_eq!(translator.translate_ingredient(""), "");
        assert_eq!(translator.translate_ingredient("   "), "");
        assert_eq!(translator.translate_ingredient("(optional)"), "");
    }

    #[test]
    fn test_retranslation_does_not_crash() {
        let translator = translator();
        for input in ["black beans, drained", "olive oil", "xyzfood", "cherry tomatoes"] {
            let once = translator.translate_ingredient(input);
            let twice = translator.translate_ingredient(&once);
            assert!(!twice.is_empty());
        }
    }

    #[test]
    fn test_diagnostics_flag_partial_matches() {
        let translator = translator();

        let full = translator.translate_ingredient_detailed("black beans, drained");
        assert_eq!(full.outcome, MatchOutcome::Composed);
        assert!(full.is_full_match());

        // Modifiers are dropped without counting as untranslated
        let modifiers = translator.translate_ingredient_detailed("butter, divided");
        assert_eq!(modifiers.name, "Burro");
        assert!(modifiers.is_full_match());

        let partial = translator.translate_ingredient_detailed("can black beans, rinsed");
        assert_eq!(partial.name, "Fagioli neri can, sciacquati");
        assert_eq!(partial.untranslated, vec!["can"]);
        assert!(!partial.is_full_match());

        // A fixed phrase inside a longer input does not hide the words around it
        let fixed = translator.translate_ingredient_detailed("All-Purpose Flour, sifted");
        assert_eq!(fixed.name, "Farina 00");
        assert_eq!(fixed.outcome, MatchOutcome::Fixed);
        assert_eq!(fixed.untranslated, vec!["sifted"]);
        assert!(!fixed.is_full_match());

        let fixed = translator.translate_ingredient_detailed("salt and pepper to taste");
        assert!(fixed.is_full_match());
    }

    #[test]
    fn test_unknown_words_are_kept() {
        let translator = translator();
        assert_eq!(translator.translate_ingredient("smoked garlic"), "Aglio smoked");
        assert_eq!(
            translator.translate_ingredient("vegan chorizo, sliced"),
            "Vegan chorizo affettato"
        );
        assert_eq!(
            translator.translate_ingredient("cherry peppers, sliced"),
            "Cherry peppers affettato"
        );
        assert_eq!(
            translator.translate_ingredient("baby spinach, chopped"),
            "Spinaci baby tritati"
        );
    }

    #[test]
    fn test_translate_record_echoes_originals() {
        let translator = translator();
        let result = translator.translate("Black beans, drained", "2 cups");
        assert_eq!(result.name, "Fagioli neri, scolati");
        assert_eq!(result.measure, "2 tazze");
        assert_eq!(result.original_name, "Black beans, drained");
        assert_eq!(result.original_measure, "2 cups");

        let result = translator.translate("xyzfood", "a pinch");
        assert_eq!(result.name, "Xyzfood");
        assert_eq!(result.measure, "a pinch");
    }
}
