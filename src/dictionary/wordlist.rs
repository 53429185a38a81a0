// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flat word-list backend: one word per line, `#` comments, blanks ignored.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::affix::Flag;
use crate::error::{Result, SpellError};

use super::{read_word_lines, Dictionary, DictionaryKind, WordStore};

/// Dictionary over a plain text word list. No flags, no affixes.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    locale: Option<String>,
    metadata: BTreeMap<String, String>,
    store: WordStore,
}

impl WordListDictionary {
    /// Load from a file, attaching the source path to the metadata.
    pub fn from_path(
        language: &str,
        path: impl AsRef<Path>,
        case_sensitive: bool,
    ) -> Result<WordListDictionary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellError::from_io(e, path))?;
        let mut dict = Self::from_reader(language, BufReader::new(file), case_sensitive)?;
        dict.metadata
            .insert("source".to_string(), path.display().to_string());
        Ok(dict)
    }

    /// Load from any already-opened byte stream.
    pub fn from_reader(
        language: &str,
        reader: impl std::io::BufRead,
        case_sensitive: bool,
    ) -> Result<WordListDictionary> {
        let words = read_word_lines(reader)?;
        let mut store = WordStore::new(case_sensitive);
        for word in &words {
            store.insert(word);
        }
        log::debug!("loaded {} word(s) for {}", store.len(), language);
        Ok(WordListDictionary {
            language: language.to_string(),
            locale: None,
            metadata: BTreeMap::new(),
            store,
        })
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> WordListDictionary {
        self.locale = Some(locale.into());
        self
    }
}

impl Dictionary for WordListDictionary {
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
        DictionaryKind::WordList
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
