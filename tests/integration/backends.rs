//! Backend behavior through the common dictionary contract.

use std::io::Cursor;
use std::str::FromStr;

use super::common::{write_hunspell_pair, write_word_list, wordlist_from};
use morf::{
    load_dictionary, CustomDictionary, Dictionary, DictionaryConfig, DictionaryKind,
    HunspellDictionary, SpellError, TrieDictionary,
};

#[test]
fn test_wordlist_ingestion_policy() {
    let dict = wordlist_from("# header comment\n\n  hello \nworld\n# trailing\n");
    assert_eq!(dict.len(), 2);
    assert!(dict.contains("hello"));
    assert_eq!(dict.words(), vec!["hello", "world"]);
}

#[test]
fn test_wordlist_round_trip_from_disk() {
    let (_dir, path) = write_word_list(&["alpha", "beta", "gamma"]);
    let config = DictionaryConfig::new(DictionaryKind::WordList, "en-US").with_path(&path);
    let dict = load_dictionary(&config).unwrap();
    for word in dict.words() {
        assert!(dict.contains(&word), "{word} failed its own round trip");
    }
    assert_eq!(dict.len(), 3);
}

#[test]
fn test_trie_backend_through_factory() {
    let (_dir, path) = write_word_list(&["alpha", "alpine", "beta"]);
    let config = DictionaryConfig::new(DictionaryKind::Trie, "en-US").with_path(&path);
    let dict = load_dictionary(&config).unwrap();
    assert_eq!(dict.kind(), DictionaryKind::Trie);
    assert!(dict.contains("alpine"));
    assert_eq!(dict.words_with_prefix("alp"), vec!["alpha", "alpine"]);
}

#[test]
fn test_hunspell_requires_companion_aff() {
    let (dir, _path) = write_word_list(&["ignored"]);
    // A .dic with no .aff next to it.
    let lonely = dir.path().join("lonely.dic");
    std::fs::write(&lonely, "1\nword\n").unwrap();
    let err = HunspellDictionary::from_dic_path("en-US", &lonely).unwrap_err();
    match err {
        SpellError::NotFound { path } => assert!(path.ends_with("lonely.aff")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_hunspell_through_factory() {
    let (_dir, dic_path) = write_hunspell_pair();
    let config = DictionaryConfig::new(DictionaryKind::Hunspell, "en-US").with_path(&dic_path);
    let dict = load_dictionary(&config).unwrap();
    assert!(dict.contains("walkning"));
    assert!(!dict.contains("rewalkning"));
    assert_eq!(dict.len(), 2);
}

#[test]
fn test_custom_backend_mutation() {
    let mut dict = CustomDictionary::empty("en-US", false);
    assert!(dict.add("session", &[]));
    assert!(dict.contains("Session"));
    assert!(!dict.add("SESSION", &[]));
    assert!(dict.remove("session"));
    assert!(dict.is_empty());
}

#[test]
fn test_case_sensitive_backend() {
    let dict =
        TrieDictionary::from_reader("de-DE", Cursor::new("Berlin\nstadt\n"), true).unwrap();
    assert!(dict.contains("Berlin"));
    assert!(!dict.contains("berlin"));
    assert!(dict.contains("stadt"));
}

#[test]
fn test_unknown_backend_kind_is_configuration_error() {
    let err = DictionaryKind::from_str("postgres").unwrap_err();
    assert_eq!(
        err.to_string(),
        "configuration error: unknown dictionary backend \"postgres\""
    );
}

#[test]
fn test_factory_missing_path_is_configuration_error() {
    let config = DictionaryConfig::new(DictionaryKind::Hunspell, "en-US");
    let err = load_dictionary(&config).unwrap_err();
    assert!(err.to_string().contains("requires a path"));
}

#[test]
fn test_backend_suggest_orders_by_distance() {
    let dict = wordlist_from("hello\nhelp\nworld\n");
    let suggestions = dict.suggest("helo", 5);
    assert_eq!(suggestions.first().map(String::as_str), Some("hello"));
    assert!(suggestions.contains(&"help".to_string()));
    assert!(!suggestions.contains(&"world".to_string()));
}
