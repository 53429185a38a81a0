// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The spellchecker: owns a dictionary and a suggestion generator, turns
//! text into results.
//!
//! Query paths are total: an empty word is simply incorrect-with-no-
//! suggestions, a tokenless text is a successful document. Errors only
//! arise at the I/O boundary (`check_file`, `check_directory`), where a
//! missing target surfaces as a not-found error naming the path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dictionary::Dictionary;
use crate::error::{Result, SpellError};
use crate::suggest::{SuggestionGenerator, SuggestionSet};
use crate::tokenizer::tokenize;
use crate::types::{DocumentResult, WordResult};
use crate::utils::wildcard_match;

/// Default bound on suggestions per misspelling.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

pub struct Spellchecker {
    dictionary: Box<dyn Dictionary>,
    generator: SuggestionGenerator,
    max_suggestions: usize,
}

impl Spellchecker {
    pub fn new(dictionary: Box<dyn Dictionary>) -> Spellchecker {
        Spellchecker {
            dictionary,
            generator: SuggestionGenerator::default(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Swap in a custom pipeline.
    pub fn with_generator(mut self, generator: SuggestionGenerator) -> Spellchecker {
        self.generator = generator;
        self
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Spellchecker {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn dictionary(&self) -> &dyn Dictionary {
        self.dictionary.as_ref()
    }

    /// Is this a word of the configured language? Empty input is not.
    pub fn is_correct(&self, word: &str) -> bool {
        !word.is_empty() && self.dictionary.contains(word)
    }

    /// Ranked corrections for a word; empty input yields the empty set.
    pub fn suggest(&self, word: &str) -> SuggestionSet {
        self.suggest_n(word, self.max_suggestions)
    }

    pub fn suggest_n(&self, word: &str, max: usize) -> SuggestionSet {
        self.generator.suggest(self.dictionary.as_ref(), word, max)
    }

    pub fn check_word(&self, word: &str) -> WordResult {
        if self.is_correct(word) {
            WordResult::correct(word)
        } else {
            WordResult::incorrect(word, self.suggest(word))
        }
    }

    /// Check a whole text: tokenize, check each token, keep the misses.
    ///
    /// Errors come back in byte-position order because the tokenizer walks
    /// the text left to right.
    pub fn check(&self, text: &str) -> DocumentResult {
        let mut errors = Vec::new();
        let mut word_count = 0;
        for token in tokenize(text) {
            word_count += 1;
            if !self.is_correct(token.text) {
                errors.push(
                    WordResult::incorrect(token.text, self.suggest(token.text))
                        .at_position(token.position),
                );
            }
        }
        DocumentResult::new(errors, word_count)
    }

    /// Read a file and check its contents.
    pub fn check_file(&self, path: impl AsRef<Path>) -> Result<DocumentResult> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SpellError::from_io(e, path))?;
        Ok(self.check(&text).for_file(path))
    }

    /// Check every file under `dir` whose name matches the wildcard
    /// `pattern`, depth first, in sorted path order.
    pub fn check_directory(
        &self,
        dir: impl AsRef<Path>,
        pattern: &str,
    ) -> Result<Vec<DocumentResult>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(SpellError::NotFound {
                path: dir.to_path_buf(),
            });
        }
        let mut files = Vec::new();
        collect_files(dir, pattern, &mut files)?;
        files.sort();
        files.iter().map(|path| self.check_file(path)).collect()
    }
}

fn collect_files(dir: &Path, pattern: &str, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| SpellError::from_io(e, dir))? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, pattern, out)?;
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if wildcard_match(pattern, name) {
                out.push(path);
            }
        }
    }
    Ok(())
}
