// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary backends and the query contract they share.
//!
//! A dictionary answers one question well — is this token a word? — and a
//! few supporting ones: enumeration, prefix queries, pattern queries, and a
//! first-cut `suggest` used when the full pipeline is not in play. Four
//! backends implement the contract:
//!
//! | Backend                  | Source                    | Store                      |
//! |--------------------------|---------------------------|----------------------------|
//! | [`WordListDictionary`]   | one word per line         | hash set + insertion order |
//! | [`CustomDictionary`]     | caller-supplied words     | hash set + insertion order |
//! | [`HunspellDictionary`]   | `.dic` + `.aff`           | stems + affix tables       |
//! | [`TrieDictionary`]       | one word per line         | prefix trie                |
//!
//! Case policy is per-dictionary: case-insensitive backends fold words at
//! insertion time and fold queries before comparison; case-sensitive ones
//! store verbatim. Backends are chosen through [`DictionaryKind`] and
//! [`load_dictionary`] — an explicit factory, not a process-wide registry.

pub mod custom;
pub mod hunspell;
pub mod trie_backend;
pub mod wordlist;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::affix::Flag;
use crate::error::{Result, SpellError};
use crate::suggest::edit_distance::levenshtein_bounded;
use crate::utils::{fold_case, wildcard_match};

pub use custom::CustomDictionary;
pub use hunspell::HunspellDictionary;
pub use trie_backend::TrieDictionary;
pub use wordlist::WordListDictionary;

/// Edit radius for the fallback ranker in [`Dictionary::suggest`].
pub(crate) const DEFAULT_SUGGEST_DISTANCE: usize = 2;

/// The query contract every backend exposes.
pub trait Dictionary: fmt::Debug {
    /// BCP-47-ish language code, e.g. `"en-US"`.
    fn language_code(&self) -> &str;

    fn locale(&self) -> Option<&str> {
        None
    }

    /// Immutable descriptive metadata (source file, rule counts, ...).
    fn metadata(&self) -> &BTreeMap<String, String>;

    fn kind(&self) -> DictionaryKind;

    fn case_sensitive(&self) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact membership under this backend's case policy.
    fn contains(&self, word: &str) -> bool;

    /// Complete enumeration, in the backend's stable order.
    fn words(&self) -> Vec<String>;

    fn words_with_prefix(&self, prefix: &str) -> Vec<String>;

    /// Words matching a shell-style wildcard pattern.
    fn words_matching(&self, pattern: &str) -> Vec<String> {
        self.words()
            .into_iter()
            .filter(|w| wildcard_match(pattern, w))
            .collect()
    }

    /// Candidate corrections in backend order of preference. Backends may
    /// pre-filter candidates; final ranking belongs to the suggestion
    /// pipeline.
    fn suggest(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        rank_by_edit_distance(self.words(), word, max_suggestions)
    }

    /// Insert a word. Returns `true` when newly added.
    fn add(&mut self, word: &str, flags: &[Flag]) -> bool;

    /// Remove a word. Returns `true` when it was present.
    fn remove(&mut self, word: &str) -> bool;
}

/// Rank a vocabulary by edit distance from `query`, closest first, folded
/// word as the tiebreak. The default `suggest` for backends without a
/// smarter pre-filter.
pub(crate) fn rank_by_edit_distance(
    words: impl IntoIterator<Item = String>,
    query: &str,
    max_suggestions: usize,
) -> Vec<String> {
    let query = fold_case(query);
    let mut scored: Vec<(usize, String)> = words
        .into_iter()
        .filter_map(|w| {
            levenshtein_bounded(&query, &fold_case(&w), DEFAULT_SUGGEST_DISTANCE)
                .filter(|&d| d > 0)
                .map(|d| (d, w))
        })
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| fold_case(&a.1).cmp(&fold_case(&b.1))));
    scored.truncate(max_suggestions);
    scored.into_iter().map(|(_, w)| w).collect()
}

/// Hash set plus insertion-ordered vector, shared by the word-list and
/// custom backends. The vector preserves enumeration order; the set makes
/// membership O(1).
#[derive(Debug, Clone, Default)]
pub(crate) struct WordStore {
    set: HashSet<String>,
    order: Vec<String>,
    case_sensitive: bool,
}

impl WordStore {
    pub fn new(case_sensitive: bool) -> WordStore {
        WordStore {
            set: HashSet::new(),
            order: Vec::new(),
            case_sensitive,
        }
    }

    pub fn normalize(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            fold_case(word)
        }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = self.normalize(word);
        if self.set.insert(normalized.clone()) {
            self.order.push(normalized);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, word: &str) -> bool {
        let normalized = self.normalize(word);
        if self.set.remove(&normalized) {
            self.order.retain(|w| w != &normalized);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(&self.normalize(word))
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn words(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.order.iter()
    }
}

/// The backend variants the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictionaryKind {
    #[default]
    WordList,
    Custom,
    Hunspell,
    Trie,
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DictionaryKind::WordList => "wordlist",
            DictionaryKind::Custom => "custom",
            DictionaryKind::Hunspell => "hunspell",
            DictionaryKind::Trie => "trie",
        };
        f.write_str(name)
    }
}

impl FromStr for DictionaryKind {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<DictionaryKind> {
        match s {
            "wordlist" => Ok(DictionaryKind::WordList),
            "custom" => Ok(DictionaryKind::Custom),
            "hunspell" => Ok(DictionaryKind::Hunspell),
            "trie" => Ok(DictionaryKind::Trie),
            other => Err(SpellError::Configuration(format!(
                "unknown dictionary backend {other:?}"
            ))),
        }
    }
}

/// Everything needed to build one dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub kind: DictionaryKind,
    pub language: String,
    pub locale: Option<String>,
    /// Source file for file-backed kinds; for Hunspell this is the `.dic`
    /// (the `.aff` is found next to it).
    pub path: Option<PathBuf>,
    pub case_sensitive: bool,
    /// Seed words for the custom backend.
    pub words: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            kind: DictionaryKind::WordList,
            language: "en-US".to_string(),
            locale: None,
            path: None,
            case_sensitive: false,
            words: Vec::new(),
        }
    }
}

impl DictionaryConfig {
    pub fn new(kind: DictionaryKind, language: impl Into<String>) -> DictionaryConfig {
        DictionaryConfig {
            kind,
            language: language.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> DictionaryConfig {
        self.path = Some(path.into());
        self
    }

    fn require_path(&self) -> Result<&PathBuf> {
        self.path.as_ref().ok_or_else(|| {
            SpellError::Configuration(format!("{} backend requires a path", self.kind))
        })
    }
}

/// Build a dictionary from its configuration.
pub fn load_dictionary(config: &DictionaryConfig) -> Result<Box<dyn Dictionary>> {
    match config.kind {
        DictionaryKind::WordList => {
            let path = config.require_path()?;
            Ok(Box::new(WordListDictionary::from_path(
                &config.language,
                path,
                config.case_sensitive,
            )?))
        }
        DictionaryKind::Trie => {
            let path = config.require_path()?;
            Ok(Box::new(TrieDictionary::from_path(
                &config.language,
                path,
                config.case_sensitive,
            )?))
        }
        DictionaryKind::Hunspell => {
            let dic = config.require_path()?;
            Ok(Box::new(HunspellDictionary::from_dic_path(
                &config.language,
                dic,
            )?))
        }
        DictionaryKind::Custom => {
            if config.words.is_empty() {
                return Err(SpellError::Configuration(
                    "custom backend requires a word list".to_string(),
                ));
            }
            Ok(Box::new(CustomDictionary::from_words(
                &config.language,
                config.words.iter().cloned(),
                config.case_sensitive,
            )))
        }
    }
}

/// Read word-list lines from a reader: trim surrounding whitespace, skip
/// blanks and `#` comments.
pub(crate) fn read_word_lines(reader: impl std::io::BufRead) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        words.push(trimmed.to_string());
    }
    Ok(words)
}
