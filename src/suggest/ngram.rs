// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character n-gram similarity suggestions.
//!
//! Words sharing many short character runs with the query are plausible
//! corrections even when the edit distance is large. Similarity is weighted
//! Jaccard over n-gram multisets: shared grams (with multiplicity) divided
//! by total grams (with multiplicity). Candidates that tie with the query
//! outright are discarded rather than suggested back.

use std::collections::HashMap;

use super::{SuggestContext, Suggestion, SuggestionSet, SuggestionSource, Strategy};
use crate::utils::fold_case;

/// N-gram multiset of a word. Words shorter than `n` contribute themselves
/// as a single gram so they still participate in similarity.
pub fn ngrams(word: &str, n: usize) -> HashMap<String, usize> {
    let chars: Vec<char> = word.chars().collect();
    let mut grams = HashMap::new();
    if chars.len() < n {
        if !chars.is_empty() {
            *grams.entry(word.to_string()).or_insert(0) += 1;
        }
        return grams;
    }
    for window in chars.windows(n) {
        *grams.entry(window.iter().collect::<String>()).or_insert(0) += 1;
    }
    grams
}

/// Weighted Jaccard similarity over two n-gram multisets.
pub fn similarity(a: &HashMap<String, usize>, b: &HashMap<String, usize>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let mut intersection = 0usize;
    let mut union = 0usize;
    for (gram, &count_a) in a {
        let count_b = b.get(gram).copied().unwrap_or(0);
        intersection += count_a.min(count_b);
        union += count_a.max(count_b);
    }
    for (gram, &count_b) in b {
        if !a.contains_key(gram) {
            union += count_b;
        }
    }
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Candidates whose n-gram profile overlaps the query's.
pub struct NgramStrategy {
    pub n: usize,
    pub min_similarity: f64,
    pub enabled: bool,
    pub priority: u8,
}

impl Default for NgramStrategy {
    fn default() -> Self {
        NgramStrategy {
            n: 3,
            min_similarity: 0.3,
            enabled: true,
            priority: 40,
        }
    }
}

impl NgramStrategy {
    pub fn with_min_similarity(min_similarity: f64) -> Self {
        NgramStrategy {
            min_similarity,
            ..Default::default()
        }
    }
}

impl Strategy for NgramStrategy {
    fn source(&self) -> SuggestionSource {
        SuggestionSource::Ngram
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn handles(&self, ctx: &SuggestContext<'_>) -> bool {
        !ctx.dictionary.contains(ctx.word)
    }

    fn generate(&self, ctx: &SuggestContext<'_>) -> SuggestionSet {
        let query_grams = ngrams(&fold_case(ctx.word), self.n);
        let mut set = SuggestionSet::new(ctx.max_results);
        for candidate in ctx.dictionary.words() {
            let candidate_grams = ngrams(&fold_case(&candidate), self.n);
            let sim = similarity(&query_grams, &candidate_grams);
            if sim < self.min_similarity {
                continue;
            }
            // Scale dissimilarity onto the shared distance axis. Zero means
            // the candidate ties the query; those never help, drop them.
            let distance = ((1.0 - sim) * 10.0).floor() as usize;
            if distance == 0 {
                continue;
            }
            set.insert(Suggestion::new(candidate, distance, sim, self.source()));
        }
        set
    }
}
