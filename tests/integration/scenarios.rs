//! End-to-end checking scenarios over small, fully pinned inputs.

use super::common::{sample_checker, write_hunspell_pair};
use morf::{tokenize_all, HunspellDictionary, Spellchecker};

#[test]
fn test_misspelling_is_reported_with_position_and_suggestion() {
    let checker = sample_checker();
    let doc = checker.check("Hello wrold");

    assert!(!doc.success());
    assert_eq!(doc.word_count, 2);
    assert_eq!(doc.errors.len(), 1);

    let error = &doc.errors[0];
    assert_eq!(error.word, "wrold");
    assert_eq!(error.position, Some(6));
    assert!(!error.correct);
    assert!(error.suggestions.contains_word("world"));
}

#[test]
fn test_clean_text_succeeds() {
    let checker = sample_checker();
    let doc = checker.check("hello");
    assert!(doc.success());
    assert!(doc.errors.is_empty());
    assert_eq!(doc.word_count, 1);
}

#[test]
fn test_tokenizer_keeps_apostrophes() {
    let tokens: Vec<(&str, usize)> = tokenize_all("don't stop.")
        .into_iter()
        .map(|t| (t.text, t.position))
        .collect();
    assert_eq!(tokens, vec![("don't", 0), ("stop", 6)]);
}

#[test]
fn test_affix_expansion_end_to_end() {
    let (_dir, dic_path) = write_hunspell_pair();
    let dict = HunspellDictionary::from_dic_path("en-US", &dic_path).unwrap();
    let checker = Spellchecker::new(Box::new(dict));

    assert!(checker.is_correct("run"));
    assert!(checker.is_correct("running"));
    assert!(checker.is_correct("rerunning"));
    assert!(!checker.is_correct("runs"));
}

#[test]
fn test_sound_alikes_suggest_each_other() {
    // Robert and Rupert share the Soundex code R163.
    let checker = super::common::checker_over(&["robert", "rupert", "randall"]);
    let suggestions = checker.suggest("ruperd");
    assert!(suggestions.contains_word("rupert"));
}

#[test]
fn test_pipeline_ranking_order() {
    let checker = super::common::checker_over(&["hello", "help", "held", "heap", "world"]);
    let set = checker.suggest("helo");

    let words = set.words();
    assert_eq!(words.first().map(String::as_str), Some("hello"));
    for expected in ["help", "held", "heap"] {
        assert!(words.iter().any(|w| w == expected), "missing {expected}");
    }
    assert!(!words.iter().any(|w| w == "world"));

    // Distance-1 candidate outranks the distance-2 pack.
    let first = set.first().unwrap();
    assert_eq!(first.distance, 1);
}

#[test]
fn test_correct_word_yields_no_suggestions() {
    let checker = sample_checker();
    assert!(checker.suggest("hello").is_empty());
    assert!(checker.suggest("").is_empty());
}
