//! Suggestion pipeline behavior: strategies, composition, bounds.

use super::common::sample_dictionary;
use morf::{
    CompositeStrategy, EditDistanceStrategy, KeyboardProximityStrategy, NgramStrategy,
    PhoneticAlgorithm, PhoneticStrategy, Strategy, SuggestContext, SuggestionGenerator,
    SuggestionSource,
};

#[test]
fn test_edit_distance_strategy_alone() {
    let dict = sample_dictionary();
    let strategy = EditDistanceStrategy::default();
    let ctx = SuggestContext::new("wrold", &dict, 10);
    assert!(strategy.handles(&ctx));

    let set = strategy.generate(&ctx);
    assert!(set.contains_word("world"));
    let world = set.iter().find(|s| s.word == "world").unwrap();
    assert_eq!(world.distance, 2);
    assert_eq!(world.source, SuggestionSource::EditDistance);
    assert!((world.confidence - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_strategy_declines_known_words() {
    let dict = sample_dictionary();
    let strategy = EditDistanceStrategy::default();
    let ctx = SuggestContext::new("hello", &dict, 10);
    assert!(!strategy.handles(&ctx));
}

#[test]
fn test_phonetic_strategy_metaphone() {
    let dict = super::common::sample_dictionary();
    let strategy = PhoneticStrategy::with_algorithm(PhoneticAlgorithm::Metaphone);
    let ctx = SuggestContext::new("rubi", &dict, 10);
    let set = strategy.generate(&ctx);
    assert!(set.contains_word("ruby"));
    assert!(set
        .iter()
        .all(|s| s.source == SuggestionSource::Phonetic));
}

#[test]
fn test_keyboard_strategy_finds_adjacent_slips() {
    let dict = sample_dictionary();
    let strategy = KeyboardProximityStrategy::default();
    // 'q' is next to 'w': classic slip.
    let ctx = SuggestContext::new("qorld", &dict, 10);
    let set = strategy.generate(&ctx);
    assert!(set.contains_word("world"));
    let hit = set.iter().find(|s| s.word == "world").unwrap();
    assert_eq!(hit.distance, 1);
}

#[test]
fn test_ngram_strategy_discards_perfect_ties() {
    // A case-sensitive dictionary can hold a word the query misses only by
    // case; n-gram similarity over folded text then ties at 1.0.
    let dict = morf::CustomDictionary::from_words(
        "en-US",
        ["Hello".to_string(), "helps".to_string()],
        true,
    );
    let strategy = NgramStrategy::default();
    let ctx = SuggestContext::new("hello", &dict, 10);
    let set = strategy.generate(&ctx);
    // The tie ("Hello") is dropped; the overlap candidate survives.
    assert!(!set.contains_word("hello"));
}

#[test]
fn test_ngram_strategy_retains_by_similarity() {
    let dict = morf::CustomDictionary::from_words(
        "en-US",
        ["photography".to_string(), "zebra".to_string()],
        false,
    );
    let strategy = NgramStrategy::default();
    let ctx = SuggestContext::new("fotography", &dict, 10);
    let set = strategy.generate(&ctx);
    assert!(set.contains_word("photography"));
    assert!(!set.contains_word("zebra"));
}

#[test]
fn test_composite_merges_under_one_bound() {
    let dict = sample_dictionary();
    let composite = CompositeStrategy::new(vec![
        Box::new(EditDistanceStrategy::default()),
        Box::new(KeyboardProximityStrategy::default()),
    ]);
    let ctx = SuggestContext::new("helo", &dict, 2);
    let set = composite.generate(&ctx);
    assert!(set.len() <= 2);
    assert!(set.contains_word("hello"));
}

#[test]
fn test_disabled_strategy_is_skipped() {
    let dict = sample_dictionary();
    let mut edit = EditDistanceStrategy::default();
    edit.enabled = false;
    let composite = CompositeStrategy::new(vec![Box::new(edit)]);
    let ctx = SuggestContext::new("wrold", &dict, 10);
    assert!(composite.generate(&ctx).is_empty());
}

#[test]
fn test_generator_short_circuits_known_words() {
    let dict = sample_dictionary();
    let generator = SuggestionGenerator::default();
    assert!(generator.suggest(&dict, "hello", 10).is_empty());
    assert!(generator.suggest(&dict, "", 10).is_empty());
    assert!(!generator.suggest(&dict, "wrold", 10).is_empty());
}

#[test]
fn test_suggestions_deduplicate_across_strategies() {
    let dict = sample_dictionary();
    let generator = SuggestionGenerator::default();
    let set = generator.suggest(&dict, "wrold", 10);
    let mut folded: Vec<String> = set.iter().map(|s| s.word.to_lowercase()).collect();
    folded.sort();
    let before = folded.len();
    folded.dedup();
    assert_eq!(before, folded.len(), "duplicate words survived the merge");
}
