// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The suggestion pipeline: strategies, the bounded result set, and the
//! composite that fans a query out and merges what comes back.
//!
//! Four concrete strategies produce candidates from different angles:
//!
//! | Strategy                            | Finds                               |
//! |-------------------------------------|-------------------------------------|
//! | [`EditDistanceStrategy`]            | words within a few keystroke edits  |
//! | [`PhoneticStrategy`]                | words that sound alike              |
//! | [`KeyboardProximityStrategy`]       | fat-finger neighbours               |
//! | [`NgramStrategy`]                   | words sharing character runs        |
//!
//! Every strategy returns a [`SuggestionSet`]; the composite merges them
//! under one bound. The set re-establishes its full invariant (sorted by the
//! [`ranking`] key, deduplicated by case-folded word, truncated to
//! `max_size`) on every mutation, so the ordering contract never depends on
//! which strategy ran first.

pub mod edit_distance;
pub mod keyboard;
pub mod ngram;
pub mod phonetic;
pub mod ranking;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::utils::fold_case;
use ranking::RankingWeights;

pub use edit_distance::EditDistanceStrategy;
pub use keyboard::KeyboardProximityStrategy;
pub use ngram::NgramStrategy;
pub use phonetic::{PhoneticAlgorithm, PhoneticStrategy};

/// Which strategy produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    EditDistance,
    Phonetic,
    KeyboardProximity,
    Ngram,
}

impl SuggestionSource {
    pub fn tag(self) -> &'static str {
        match self {
            SuggestionSource::EditDistance => "edit_distance",
            SuggestionSource::Phonetic => "phonetic",
            SuggestionSource::KeyboardProximity => "keyboard_proximity",
            SuggestionSource::Ngram => "ngram",
        }
    }
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One candidate correction.
///
/// Two suggestions are equal when their case-folded words are equal; the
/// distance, confidence, and source are informational.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
    pub confidence: f64,
    pub source: SuggestionSource,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Suggestion {
    pub fn new(
        word: impl Into<String>,
        distance: usize,
        confidence: f64,
        source: SuggestionSource,
    ) -> Suggestion {
        Suggestion {
            word: word.into(),
            distance,
            confidence: confidence.clamp(0.0, 1.0),
            source,
            metadata: BTreeMap::new(),
        }
    }

    /// The deduplication key.
    pub fn folded_word(&self) -> String {
        fold_case(&self.word)
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.folded_word() == other.folded_word()
    }
}

impl Eq for Suggestion {}

/// Bounded, ranked, deduplicated collection of suggestions.
///
/// Every mutation re-establishes the full invariant eagerly: items sorted by
/// the ranking key, at most one entry per case-folded word, and no more than
/// `max_size` entries. Enumeration is therefore always safe to trust.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionSet {
    items: Vec<Suggestion>,
    max_size: usize,
    #[serde(skip)]
    weights: RankingWeights,
}

impl SuggestionSet {
    pub fn new(max_size: usize) -> SuggestionSet {
        SuggestionSet {
            items: Vec::new(),
            max_size,
            weights: RankingWeights::default(),
        }
    }

    pub fn with_weights(max_size: usize, weights: RankingWeights) -> SuggestionSet {
        SuggestionSet {
            items: Vec::new(),
            max_size,
            weights,
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert one suggestion and restore the set invariant.
    pub fn insert(&mut self, suggestion: Suggestion) {
        self.items.push(suggestion);
        self.restore();
    }

    /// Absorb every suggestion of `other`, bounded by `self.max_size`.
    pub fn merge(&mut self, other: SuggestionSet) {
        self.items.extend(other.items);
        self.restore();
    }

    /// Bulk insert from an iterator.
    pub fn extend(&mut self, suggestions: impl IntoIterator<Item = Suggestion>) {
        self.items.extend(suggestions);
        self.restore();
    }

    /// Best-ranked suggestion, if any.
    pub fn first(&self) -> Option<&Suggestion> {
        self.items.first()
    }

    /// Is a word (case-folded) present?
    pub fn contains_word(&self, word: &str) -> bool {
        let folded = fold_case(word);
        self.items.iter().any(|s| s.folded_word() == folded)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Suggestion] {
        &self.items
    }

    /// The suggestion words in rank order.
    pub fn words(&self) -> Vec<String> {
        self.items.iter().map(|s| s.word.clone()).collect()
    }

    pub fn into_vec(self) -> Vec<Suggestion> {
        self.items
    }

    /// Sort by the ranking key, keep the first occurrence of each folded
    /// word, truncate to the bound.
    fn restore(&mut self) {
        let weights = self.weights;
        self.items.sort_by(|a, b| ranking::compare(a, b, weights));
        let mut seen = std::collections::HashSet::new();
        self.items.retain(|s| seen.insert(s.folded_word()));
        self.items.truncate(self.max_size);
    }
}

impl<'a> IntoIterator for &'a SuggestionSet {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for SuggestionSet {
    type Item = Suggestion;
    type IntoIter = std::vec::IntoIter<Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Everything a strategy needs to answer one query.
pub struct SuggestContext<'a> {
    /// The query word in its original case.
    pub word: &'a str,
    pub dictionary: &'a dyn Dictionary,
    pub max_results: usize,
    /// Free-form options a caller can thread through to strategies.
    pub options: BTreeMap<String, String>,
}

impl<'a> SuggestContext<'a> {
    pub fn new(word: &'a str, dictionary: &'a dyn Dictionary, max_results: usize) -> Self {
        SuggestContext {
            word,
            dictionary,
            max_results,
            options: BTreeMap::new(),
        }
    }
}

/// A way of producing correction candidates.
///
/// Strategies declare a source tag, an enable switch, and a priority (lower
/// runs earlier in the composite). `handles` is the cheap applicability
/// check; `generate` does the work.
pub trait Strategy {
    fn source(&self) -> SuggestionSource;

    fn is_enabled(&self) -> bool {
        true
    }

    /// Composite execution order; lower runs earlier.
    fn priority(&self) -> u8 {
        50
    }

    fn handles(&self, ctx: &SuggestContext<'_>) -> bool;

    fn generate(&self, ctx: &SuggestContext<'_>) -> SuggestionSet;
}

/// Fan-out over an ordered list of strategies.
///
/// `generate` consults every enabled strategy whose `handles` returns true
/// and merges all output into a single bounded set. The merged ordering is
/// fully determined by the ranking key, never by strategy order.
#[derive(Default)]
pub struct CompositeStrategy {
    strategies: Vec<Box<dyn Strategy>>,
}

impl CompositeStrategy {
    pub fn new(mut strategies: Vec<Box<dyn Strategy>>) -> CompositeStrategy {
        strategies.sort_by_key(|s| s.priority());
        CompositeStrategy { strategies }
    }

    pub fn push(&mut self, strategy: Box<dyn Strategy>) {
        self.strategies.push(strategy);
        self.strategies.sort_by_key(|s| s.priority());
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn generate(&self, ctx: &SuggestContext<'_>) -> SuggestionSet {
        let mut merged = SuggestionSet::new(ctx.max_results);
        for strategy in &self.strategies {
            if !strategy.is_enabled() || !strategy.handles(ctx) {
                continue;
            }
            let produced = strategy.generate(ctx);
            log::debug!(
                "strategy {} produced {} candidate(s) for {:?}",
                strategy.source(),
                produced.len(),
                ctx.word
            );
            merged.merge(produced);
        }
        merged
    }
}

/// Facade routing a query through the default (or a custom) pipeline.
///
/// Words already present in the dictionary short-circuit to an empty set
/// without invoking any strategy.
pub struct SuggestionGenerator {
    composite: CompositeStrategy,
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        SuggestionGenerator {
            composite: CompositeStrategy::new(vec![
                Box::new(EditDistanceStrategy::default()),
                Box::new(PhoneticStrategy::default()),
                Box::new(KeyboardProximityStrategy::default()),
                // The pipeline default casts a slightly wider n-gram net
                // than the standalone strategy default.
                Box::new(NgramStrategy::with_min_similarity(0.2)),
            ]),
        }
    }
}

impl SuggestionGenerator {
    /// Build a generator over an explicit strategy list.
    pub fn with_strategies(strategies: Vec<Box<dyn Strategy>>) -> SuggestionGenerator {
        SuggestionGenerator {
            composite: CompositeStrategy::new(strategies),
        }
    }

    pub fn suggest(
        &self,
        dictionary: &dyn Dictionary,
        word: &str,
        max_results: usize,
    ) -> SuggestionSet {
        if word.is_empty() || dictionary.contains(word) {
            return SuggestionSet::new(max_results);
        }
        let ctx = SuggestContext::new(word, dictionary, max_results);
        self.composite.generate(&ctx)
    }
}
