// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Morphological spellchecking with affix dictionaries and ranked
//! suggestions.
//!
//! This crate decides whether a token is a word of a configured language
//! and, when it is not, produces a ranked, deduplicated list of plausible
//! corrections.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ tokenizer.rs │────▶│  checker.rs   │────▶│  types.rs    │
//! │ (word, pos)  │     │ (Spellchecker)│     │ (results)    │
//! └──────────────┘     └───────┬───────┘     └──────────────┘
//!                              │
//!               ┌──────────────┼──────────────┐
//!               ▼                             ▼
//!       ┌──────────────┐             ┌────────────────┐
//!       │ dictionary/  │             │    suggest/    │
//!       │ four backends│◀────────────│ four strategies│
//!       └──────┬───────┘             └────────────────┘
//!              │
//!        ┌─────┴─────┐
//!        ▼           ▼
//!   ┌─────────┐ ┌──────────┐
//!   │ trie.rs │ │ affix.rs │
//!   └─────────┘ └──────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use morf::{DictionaryConfig, DictionaryKind, load_dictionary, Spellchecker};
//!
//! let config = DictionaryConfig::new(DictionaryKind::WordList, "en-US")
//!     .with_path("words.txt");
//! let checker = Spellchecker::new(load_dictionary(&config)?);
//!
//! let doc = checker.check("Hello wrold");
//! for error in &doc.errors {
//!     println!("{} at byte {:?}: {:?}", error.word, error.position,
//!              error.suggestions.words());
//! }
//! # Ok::<(), morf::SpellError>(())
//! ```
//!
//! A `Spellchecker` owns its dictionary for its whole lifetime; loaded
//! dictionaries are logically immutable while being queried. Callers that
//! want parallelism build one checker per thread.

// Module declarations
pub mod affix;
pub mod checker;
pub mod dictionary;
pub mod error;
pub mod suggest;
pub mod tokenizer;
pub mod trie;
pub mod types;
mod utils;

// Re-exports for the public API
pub use affix::{AffixKind, AffixRule, Condition, Flag, FlagMode};
pub use checker::{Spellchecker, DEFAULT_MAX_SUGGESTIONS};
pub use dictionary::{
    load_dictionary, CustomDictionary, Dictionary, DictionaryConfig, DictionaryKind,
    HunspellDictionary, TrieDictionary, WordListDictionary,
};
pub use error::{Result, SpellError};
pub use suggest::{
    CompositeStrategy, EditDistanceStrategy, KeyboardProximityStrategy, NgramStrategy,
    PhoneticAlgorithm, PhoneticStrategy, Strategy, SuggestContext, Suggestion,
    SuggestionGenerator, SuggestionSet, SuggestionSource,
};
pub use tokenizer::{tokenize, tokenize_all, Token};
pub use trie::Trie;
pub use types::{DocumentResult, Word, WordResult};
pub use utils::fold_case;
