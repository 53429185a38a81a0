// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types queries produce and consume.
//!
//! All of these are plain data: built once, compared by value, returned to
//! the caller and forgotten. Nothing here holds interior mutability or
//! shares state with the dictionary that produced it.
//!
//! # Invariants
//!
//! - **Word**: non-empty text; equality and hashing look at the text only —
//!   flags and morphological data are informational.
//! - **WordResult**: `correct` implies an empty suggestion set.
//! - **DocumentResult**: `success` iff `errors` is empty; errors are ordered
//!   by byte position.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use serde::Serialize;

use crate::affix::Flag;
use crate::suggest::SuggestionSet;

/// A dictionary word plus whatever the source file knew about it.
#[derive(Debug, Clone, Serialize)]
pub struct Word {
    text: String,
    flags: Vec<Flag>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    morph: BTreeMap<String, String>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Word {
        let text = text.into();
        debug_assert!(!text.is_empty(), "Word text must be non-empty");
        Word {
            text,
            flags: Vec::new(),
            morph: BTreeMap::new(),
        }
    }

    pub fn with_flags(mut self, flags: Vec<Flag>) -> Word {
        self.flags = flags;
        self
    }

    pub fn with_morph(mut self, morph: BTreeMap<String, String>) -> Word {
        self.morph = morph;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Opaque morphological fields (`st:`, `ph:`, ...) from the source line.
    pub fn morph(&self) -> &BTreeMap<String, String> {
        &self.morph
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

/// Outcome of checking a single token.
#[derive(Debug, Clone, Serialize)]
pub struct WordResult {
    pub word: String,
    pub correct: bool,
    pub suggestions: SuggestionSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl WordResult {
    pub fn correct(word: impl Into<String>) -> WordResult {
        WordResult {
            word: word.into(),
            correct: true,
            suggestions: SuggestionSet::new(0),
            position: None,
        }
    }

    pub fn incorrect(word: impl Into<String>, suggestions: SuggestionSet) -> WordResult {
        WordResult {
            word: word.into(),
            correct: false,
            suggestions,
            position: None,
        }
    }

    pub fn at_position(mut self, position: usize) -> WordResult {
        self.position = Some(position);
        self
    }
}

/// Outcome of checking a whole text or file.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Misspelled tokens, in byte-position order.
    pub errors: Vec<WordResult>,
    /// Total tokens seen, correct or not.
    pub word_count: usize,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl DocumentResult {
    pub fn new(errors: Vec<WordResult>, word_count: usize) -> DocumentResult {
        DocumentResult {
            file: None,
            errors,
            word_count,
            metadata: BTreeMap::new(),
        }
    }

    pub fn for_file(mut self, file: impl Into<PathBuf>) -> DocumentResult {
        self.file = Some(file.into());
        self
    }

    /// No spelling errors found.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}
