//! Property tests for the matching pipeline.

use balm_core::config::MatchConfig;
use balm_core::models::KeywordEntry;
use balm_match::lexical::{dice_similarity, match_lexical};
use balm_match::text::{stem, tokenize};
use balm_match::vector::match_vector;
use balm_match::{KeywordIndex, Resolver};
use proptest::prelude::*;

fn sample_keywords() -> Vec<KeywordEntry> {
    vec![
        KeywordEntry::new("anxious", "Anxiety", 0.9),
        KeywordEntry::new("panic attack", "Anxiety", 0.95),
        KeywordEntry::new("depressed", "Depression", 0.9),
        KeywordEntry::new("stressed out", "Stress", 0.85),
        KeywordEntry::new("want to end it all", "Suicidal Thoughts", 1.0),
    ]
}

proptest! {
    #[test]
    fn vector_score_is_in_unit_range_and_never_nan(input in ".{0,120}") {
        let index = KeywordIndex::new(&sample_keywords());
        let result = match_vector(&input, &index, 0.3).unwrap();
        let score = result.score.value();
        prop_assert!(!score.is_nan());
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn lexical_score_is_in_unit_range_and_never_nan(input in ".{0,120}") {
        let result = match_lexical(&input, &sample_keywords(), 0.3);
        let score = result.score.value();
        prop_assert!(!score.is_nan());
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn dice_is_symmetric_and_bounded(a in ".{0,60}", b in ".{0,60}") {
        let ab = dice_similarity(&a, &b);
        let ba = dice_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn resolver_equals_lexical_when_vector_is_inconclusive(input in ".{0,120}") {
        let keywords = sample_keywords();
        let index = KeywordIndex::new(&keywords);
        let config = MatchConfig::default();

        let vector_result = match_vector(&input, &index, config.threshold).unwrap();
        prop_assume!(vector_result.score.is_zero());

        let resolver = Resolver::new(index, config.clone());
        let resolved = resolver.resolve(&input).unwrap();
        let lexical = match_lexical(&input, &keywords, config.threshold);
        prop_assert_eq!(resolved, lexical);
    }

    #[test]
    fn resolve_is_idempotent(input in ".{0,120}") {
        let resolver = Resolver::new(KeywordIndex::new(&sample_keywords()), MatchConfig::default());
        let first = resolver.resolve(&input).unwrap();
        let second = resolver.resolve(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tokenize_never_yields_empty_tokens(input in ".{0,120}") {
        for token in tokenize(&input) {
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn stem_never_lengthens_a_word(word in "[a-z]{0,20}") {
        // Only the "ies" → "y" and "y" → "i" rules rewrite; neither adds
        // more than it removes.
        prop_assert!(stem(&word).chars().count() <= word.chars().count());
    }
}
