// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory backend seeded from caller-supplied words.
//!
//! Same store as the word-list backend, but built from an iterator instead
//! of a stream and intended to stay mutable: personal word lists, session
//! additions, test fixtures.

use std::collections::BTreeMap;

use crate::affix::Flag;

use super::{Dictionary, DictionaryKind, WordStore};

#[derive(Debug, Clone)]
pub struct CustomDictionary {
    language: String,
    locale: Option<String>,
    metadata: BTreeMap<String, String>,
    store: WordStore,
}

impl CustomDictionary {
    pub fn from_words(
        language: &str,
        words: impl IntoIterator<Item = String>,
        case_sensitive: bool,
    ) -> CustomDictionary {
        let mut store = WordStore::new(case_sensitive);
        for word in words {
            let trimmed = word.trim();
            if !trimmed.is_empty() {
                store.insert(trimmed);
            }
        }
        CustomDictionary {
            language: language.to_string(),
            locale: None,
            metadata: BTreeMap::new(),
            store,
        }
    }

    /// Empty, to be filled through [`Dictionary::add`].
    pub fn empty(language: &str, case_sensitive: bool) -> CustomDictionary {
        CustomDictionary::from_words(language, std::iter::empty(), case_sensitive)
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> CustomDictionary {
        self.locale = Some(locale.into());
        self
    }
}

impl Dictionary for CustomDictionary {
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
        DictionaryKind::Custom
    }

    fn case_sensitive(&self) -> bool {
        self.store.case_sensitive()
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn contains(&self, word: &str) -> bool {
        self.store.contains(word)
    }

    fn words(&self) -> Vec<String> {
        self.store.words()
    }

    fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = self.store.normalize(prefix);
        self.store
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect()
    }

    fn add(&mut self, word: &str, _flags: &[Flag]) -> bool {
        self.store.insert(word)
    }

    fn remove(&mut self, word: &str) -> bool {
        self.store.remove(word)
    }
}
