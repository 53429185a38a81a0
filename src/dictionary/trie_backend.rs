// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trie-backed dictionary: the same word-list ingestion as the flat
//! backend, stored in a prefix tree so prefix queries and completion-style
//! suggestions come cheap.
//!
//! The trie is frozen once loading finishes. After that point `add` and
//! `remove` refuse to touch it (returning `false`) rather than mutate a
//! structure the rest of the system treats as read-only.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::affix::Flag;
use crate::error::{Result, SpellError};
use crate::trie::Trie;
use crate::utils::fold_case;

use super::{rank_by_edit_distance, read_word_lines, Dictionary, DictionaryKind};

#[derive(Debug)]
pub struct TrieDictionary {
    language: String,
    locale: Option<String>,
    metadata: BTreeMap<String, String>,
    case_sensitive: bool,
    trie: Trie,
}

impl TrieDictionary {
    pub fn from_path(
        language: &str,
        path: impl AsRef<Path>,
        case_sensitive: bool,
    ) -> Result<TrieDictionary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellError::from_io(e, path))?;
        let mut dict = Self::from_reader(language, BufReader::new(file), case_sensitive)?;
        dict.metadata
            .insert("source".to_string(), path.display().to_string());
        Ok(dict)
    }

    pub fn from_reader(
        language: &str,
        reader: impl std::io::BufRead,
        case_sensitive: bool,
    ) -> Result<TrieDictionary> {
        let mut trie = Trie::new();
        for word in read_word_lines(reader)? {
            let word = if case_sensitive {
                word
            } else {
                fold_case(&word)
            };
            trie.insert(&word);
        }
        trie.freeze();
        log::debug!("trie dictionary {}: {} word(s)", language, trie.len());
        Ok(TrieDictionary {
            language: language.to_string(),
            locale: None,
            metadata: BTreeMap::new(),
            case_sensitive,
            trie,
        })
    }

    fn normalize(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            fold_case(word)
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl Dictionary for TrieDictionary {
    fn language_code(&self) -> &str {
        &self.language
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    fn kind(&self) -> DictionaryKind {
        DictionaryKind::Trie
    }

    fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn len(&self) -> usize {
        self.trie.len()
    }

    fn contains(&self, word: &str) -> bool {
        self.trie.contains(&self.normalize(word))
    }

    fn words(&self) -> Vec<String> {
        self.trie.iter().map(|(w, _)| w).collect()
    }

    fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.trie.words_with_prefix(&self.normalize(prefix))
    }

    /// Completion-first suggestions: walk the trie for shared-prefix
    /// candidates, then spend any remaining budget on the edit-distance
    /// ranker over the full vocabulary.
    fn suggest(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        let normalized = self.normalize(word);
        let mut out = self.trie.suggestions(&normalized, max_suggestions);
        for candidate in rank_by_edit_distance(self.words(), &normalized, max_suggestions) {
            if out.len() >= max_suggestions {
                break;
            }
            if !out.contains(&candidate) {
                out.push(candidate);
            }
        }
        out
    }

    /// Rejected once the trie is frozen (which loading always does).
    fn add(&mut self, word: &str, _flags: &[Flag]) -> bool {
        if self.trie.is_frozen() {
            log::warn!("ignoring add {:?}: trie dictionary is frozen", word);
            return false;
        }
        let normalized = self.normalize(word);
        if self.trie.contains(&normalized) {
            return false;
        }
        self.trie.insert(&normalized);
        true
    }

    fn remove(&mut self, word: &str) -> bool {
        if self.trie.is_frozen() {
            log::warn!("ignoring remove {:?}: trie dictionary is frozen", word);
            return false;
        }
        self.trie.remove(&self.normalize(word))
    }
}
