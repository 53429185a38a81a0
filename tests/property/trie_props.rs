//! Trie membership and enumeration invariants.

use std::collections::HashSet;

use morf::Trie;
use proptest::prelude::*;

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{0,10}", 0..30)
}

proptest! {
    #[test]
    fn prop_contains_iff_inserted(words in arb_words(), probes in arb_words()) {
        let mut trie = Trie::new();
        for w in &words {
            trie.insert(w);
        }
        let inserted: HashSet<&String> = words.iter().collect();

        for w in &words {
            prop_assert!(trie.contains(w));
        }
        for p in &probes {
            prop_assert_eq!(trie.contains(p), inserted.contains(p));
        }
        prop_assert_eq!(trie.len(), inserted.len());
    }

    #[test]
    fn prop_iter_yields_exactly_the_inserted_set(words in arb_words()) {
        let mut trie = Trie::new();
        for w in &words {
            trie.insert(w);
        }
        let from_iter: HashSet<String> = trie.iter().map(|(w, _)| w).collect();
        let inserted: HashSet<String> = words.iter().cloned().collect();
        prop_assert_eq!(from_iter, inserted);
    }

    #[test]
    fn prop_words_with_prefix_agree_with_filter(words in arb_words(), prefix in "[a-z]{0,3}") {
        let mut trie = Trie::new();
        for w in &words {
            trie.insert(w);
        }
        let mut expected: Vec<String> = trie
            .iter()
            .map(|(w, _)| w)
            .filter(|w| w.starts_with(&prefix))
            .collect();
        let mut actual = trie.words_with_prefix(&prefix);
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_remove_undoes_insert(words in arb_words()) {
        let mut trie = Trie::new();
        for w in &words {
            trie.insert(w);
        }
        let unique: HashSet<String> = words.iter().cloned().collect();
        for w in &unique {
            prop_assert!(trie.remove(w));
            prop_assert!(!trie.contains(w));
        }
        prop_assert!(trie.is_empty());
    }

    #[test]
    fn prop_union_and_intersect_follow_set_semantics(a in arb_words(), b in arb_words()) {
        let mut ta = Trie::new();
        for w in &a { ta.insert(w); }
        let mut tb = Trie::new();
        for w in &b { tb.insert(w); }

        let sa: HashSet<String> = a.iter().cloned().collect();
        let sb: HashSet<String> = b.iter().cloned().collect();

        let union = ta.union(&tb);
        let expected_union: HashSet<String> = sa.union(&sb).cloned().collect();
        prop_assert_eq!(union.len(), expected_union.len());
        for w in &expected_union {
            prop_assert!(union.contains(w));
        }

        let intersect = ta.intersect(&tb);
        let expected_intersect: HashSet<String> = sa.intersection(&sb).cloned().collect();
        prop_assert_eq!(intersect.len(), expected_intersect.len());
        for w in &expected_intersect {
            prop_assert!(intersect.contains(w));
        }
    }
}
