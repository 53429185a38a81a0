// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the
//! O(nm) DP. Over a real vocabulary that catches most non-matches before
//! allocating anything.

use super::{SuggestContext, Suggestion, SuggestionSet, SuggestionSource, Strategy};
use crate::utils::fold_case;

/// Levenshtein distance between two strings, in character edits.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }
    dp[b_len]
}

/// Levenshtein distance if it does not exceed `max`, else `None`.
///
/// Two early-exit paths, both sound:
/// 1. If the length difference exceeds `max`, bail before the DP.
/// 2. If the minimum of a DP row exceeds `max`, no later row can recover.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if (a_len as isize - b_len as isize).unsigned_abs() > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // Early-exit: if the minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    (dp[b_len] <= max).then_some(dp[b_len])
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}

/// Candidate corrections within a small edit radius of the query.
///
/// Scans the vocabulary (case-folded on both sides), keeps words with
/// `0 < d <= max_distance`, and scores them `confidence = 1 / (1 + d)`.
pub struct EditDistanceStrategy {
    pub max_distance: usize,
    pub enabled: bool,
    pub priority: u8,
}

impl Default for EditDistanceStrategy {
    fn default() -> Self {
        EditDistanceStrategy {
            max_distance: 2,
            enabled: true,
            priority: 10,
        }
    }
}

impl EditDistanceStrategy {
    pub fn with_max_distance(max_distance: usize) -> Self {
        EditDistanceStrategy {
            max_distance,
            ..Default::default()
        }
    }
}

impl Strategy for EditDistanceStrategy {
    fn source(&self) -> SuggestionSource {
        SuggestionSource::EditDistance
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
        let query = fold_case(ctx.word);
        let mut set = SuggestionSet::new(ctx.max_results);
        for candidate in ctx.dictionary.words() {
            let folded = fold_case(&candidate);
            if let Some(d) = levenshtein_bounded(&query, &folded, self.max_distance) {
                if d > 0 {
                    let confidence = 1.0 / (1.0 + d as f64);
                    set.insert(Suggestion::new(candidate, d, confidence, self.source()));
                }
            }
        }
        set
    }
}
