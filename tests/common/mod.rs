//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use morf::{CustomDictionary, Spellchecker, WordListDictionary};
use tempfile::TempDir;

pub const SAMPLE_WORDS: [&str; 5] = ["hello", "world", "ruby", "test", "code"];

/// In-memory dictionary over the five sample words, case-insensitive.
pub fn sample_dictionary() -> CustomDictionary {
    CustomDictionary::from_words(
        "en-US",
        SAMPLE_WORDS.into_iter().map(String::from),
        false,
    )
}

/// Spellchecker over the sample dictionary.
pub fn sample_checker() -> Spellchecker {
    Spellchecker::new(Box::new(sample_dictionary()))
}

/// Spellchecker over an arbitrary word set.
pub fn checker_over(words: &[&str]) -> Spellchecker {
    let dict = CustomDictionary::from_words(
        "en-US",
        words.iter().map(|w| w.to_string()),
        false,
    );
    Spellchecker::new(Box::new(dict))
}

/// Write a word-list file into a fresh temp dir, one word per line.
pub fn write_word_list(words: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("words.txt");
    let mut file = std::fs::File::create(&path).expect("create word list");
    for word in words {
        writeln!(file, "{word}").expect("write word");
    }
    (dir, path)
}

/// Write a Hunspell `.dic`/`.aff` pair and return the `.dic` path.
///
/// The fixture language: `run` takes `re-` (PFX A) and `-ning` (SFX B),
/// both cross-product; `walk` only takes the suffix.
pub fn write_hunspell_pair() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let aff_path = dir.path().join("en_US.aff");
    let dic_path = dir.path().join("en_US.dic");
    std::fs::write(
        &aff_path,
        "SET UTF-8\n\nPFX A Y 1\nPFX A 0 re .\n\nSFX B Y 1\nSFX B 0 ning .\n",
    )
    .expect("write aff");
    std::fs::write(&dic_path, "2\nrun/AB\nwalk/B\n").expect("write dic");
    (dir, dic_path)
}

/// Load a word-list dictionary from text, the way the CLI would.
pub fn wordlist_from(text: &str) -> WordListDictionary {
    WordListDictionary::from_reader("en-US", std::io::Cursor::new(text), false)
        .expect("parse word list")
}
