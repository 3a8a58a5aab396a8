//! # Concurrency Tests
//!
//! Concurrent translations over one shared translator must produce exactly
//! what the same calls produce sequentially.

use recipe_translator::translator::{IngredientTranslator, TranslationResult};
use std::sync::Arc;

const INPUTS: &[(&str, &str)] = &[
    ("black beans, drained", "1 can"),
    ("cherry tomatoes, halved", "2 cups"),
    ("large red bell pepper, diced", "1"),
    ("extra virgin olive oil", "2 tbsp"),
    ("garlic cloves, minced", "3"),
    ("fresh basil leaves", "a handful"),
    ("xyzfood", "1 smidgen"),
    ("chickpeas, drained and rinsed", "1 1/2 cups"),
    ("spinach", "200 g"),
    ("", ""),
];

fn sequential(translator: &IngredientTranslator) -> Vec<TranslationResult> {
    INPUTS
        .iter()
        .map(|(name, measure)| translator.translate(name, measure))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_tasks_match_sequential() {
        let translator = Arc::new(IngredientTranslator::default());
        let expected = sequential(&translator);

        let task_count = 16;
        let mut handles = vec![];

        for task_id in 0..task_count {
            let translator = Arc::clone(&translator);
            let handle = tokio::spawn(async move {
                // Each task walks the inputs from a different offset
                (0..INPUTS.len())
                    .map(|i| {
                        let index = (i + task_id) % INPUTS.len();
                        let (name, measure) = INPUTS[index];
                        (index, translator.translate(name, measure))
                    })
                    .collect::<Vec<_>>()
            });
            handles.push(handle);
        }

        for handle in handles {
            for (index, result) in handle.await.unwrap() {
                assert_eq!(result, expected[index]);
            }
        }
    }

    #[test]
    fn test_threads_share_one_lexicon() {
        let translator = Arc::new(IngredientTranslator::default());
        let expected = sequential(&translator);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let translator = Arc::clone(&translator);
                std::thread::spawn(move || sequential(&translator))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
