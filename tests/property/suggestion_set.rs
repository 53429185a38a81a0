//! SuggestionSet invariants: bounded, sorted, deduplicated — after any
//! sequence of mutations.

use morf::suggest::ranking::{combined_score, RankingWeights};
use morf::{Suggestion, SuggestionSet, SuggestionSource};
use proptest::prelude::*;

fn arb_suggestion() -> impl Strategy<Value = Suggestion> {
    (
        "[a-zA-Z]{1,8}",
        0usize..8,
        0.0f64..=1.0,
        prop_oneof![
            Just(SuggestionSource::EditDistance),
            Just(SuggestionSource::Phonetic),
            Just(SuggestionSource::KeyboardProximity),
            Just(SuggestionSource::Ngram),
        ],
    )
        .prop_map(|(word, distance, confidence, source)| {
            Suggestion::new(word, distance, confidence, source)
        })
}

fn assert_invariants(set: &SuggestionSet) {
    let weights = RankingWeights::default();

    // Bounded.
    assert!(set.len() <= set.max_size());

    // Sorted by the ranking key.
    let items: Vec<&Suggestion> = set.iter().collect();
    for pair in items.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let score_a = combined_score(a, weights);
        let score_b = combined_score(b, weights);
        assert!(
            score_a > score_b
                || (score_a == score_b && a.distance < b.distance)
                || (score_a == score_b
                    && a.distance == b.distance
                    && a.folded_word() <= b.folded_word()),
            "ranking violated between {:?} and {:?}",
            a.word,
            b.word
        );
    }

    // Deduplicated by folded word.
    let mut seen = std::collections::HashSet::new();
    for s in set.iter() {
        assert!(seen.insert(s.folded_word()), "duplicate {:?}", s.word);
    }
}

proptest! {
    #[test]
    fn prop_insert_preserves_invariants(
        suggestions in proptest::collection::vec(arb_suggestion(), 0..40),
        max_size in 1usize..12,
    ) {
        let mut set = SuggestionSet::new(max_size);
        for s in suggestions {
            set.insert(s);
            assert_invariants(&set);
        }
    }

    #[test]
    fn prop_merge_equals_union_construction(
        left in proptest::collection::vec(arb_suggestion(), 0..20),
        right in proptest::collection::vec(arb_suggestion(), 0..20),
        max_size in 1usize..10,
    ) {
        let mut a = SuggestionSet::new(max_size);
        a.extend(left.clone());
        let mut b = SuggestionSet::new(max_size);
        b.extend(right.clone());

        let mut merged = a.clone();
        merged.merge(b);
        assert_invariants(&merged);

        // Merging bounded sets must agree with building one set from the
        // same surviving elements.
        let mut union = SuggestionSet::new(max_size);
        union.extend(a.into_vec().into_iter().chain({
            let mut b2 = SuggestionSet::new(max_size);
            b2.extend(right);
            b2.into_vec()
        }));
        prop_assert_eq!(merged.words(), union.words());
    }

    #[test]
    fn prop_merged_set_covers_both_sides_up_to_bound(
        left in proptest::collection::vec(arb_suggestion(), 0..10),
        right in proptest::collection::vec(arb_suggestion(), 0..10),
    ) {
        // With a bound wide enough for everything, no word may vanish.
        let max_size = 64;
        let mut a = SuggestionSet::new(max_size);
        a.extend(left.clone());
        let mut b = SuggestionSet::new(max_size);
        b.extend(right.clone());
        let mut merged = a.clone();
        merged.merge(b);

        for s in left.iter().chain(right.iter()) {
            prop_assert!(merged.contains_word(&s.word));
        }
    }
}
