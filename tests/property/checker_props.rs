//! Whole-document invariants: error ordering, token counting, and the
//! insert/contains round trip.

use morf::{tokenize, CustomDictionary, Dictionary, Spellchecker};
use proptest::prelude::*;

fn arb_text() -> impl Strategy<Value = String> {
    // Letters, apostrophes, digits, punctuation, whitespace.
    "[a-zA-Z' .,;:!?0-9\\n-]{0,80}"
}

fn arb_vocab() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,8}", 1..15)
}

proptest! {
    #[test]
    fn prop_errors_sorted_strictly_by_position(vocab in arb_vocab(), text in arb_text()) {
        let dict = CustomDictionary::from_words("en-US", vocab, false);
        let checker = Spellchecker::new(Box::new(dict)).with_max_suggestions(3);
        let doc = checker.check(&text);

        for pair in doc.errors.windows(2) {
            let (a, b) = (pair[0].position, pair[1].position);
            prop_assert!(a.is_some() && b.is_some());
            prop_assert!(a < b, "positions not strictly increasing: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn prop_word_count_matches_tokenizer(vocab in arb_vocab(), text in arb_text()) {
        let dict = CustomDictionary::from_words("en-US", vocab, false);
        let checker = Spellchecker::new(Box::new(dict)).with_max_suggestions(0);
        let doc = checker.check(&text);
        prop_assert_eq!(doc.word_count, tokenize(&text).count());
    }

    #[test]
    fn prop_every_dictionary_word_checks_correct(vocab in arb_vocab()) {
        let dict = CustomDictionary::from_words("en-US", vocab.clone(), false);
        let checker = Spellchecker::new(Box::new(dict));

        for word in &vocab {
            prop_assert!(checker.dictionary().contains(word));
            let result = checker.check_word(word);
            prop_assert!(result.correct);
            prop_assert!(result.suggestions.is_empty());
        }
    }

    #[test]
    fn prop_errors_never_exceed_word_count(vocab in arb_vocab(), text in arb_text()) {
        let dict = CustomDictionary::from_words("en-US", vocab, false);
        let checker = Spellchecker::new(Box::new(dict)).with_max_suggestions(0);
        let doc = checker.check(&text);
        prop_assert!(doc.errors.len() <= doc.word_count);
        prop_assert_eq!(doc.success(), doc.errors.is_empty());
    }
}
