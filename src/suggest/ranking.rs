// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion ranking: how candidate corrections get ordered.
//!
//! The ranking key is total and deterministic, independent of which strategy
//! produced a candidate or in what order strategies ran:
//!
//! 1. Combined score, descending: `dw·(1 − min(d, 5)/5) + cw·confidence`
//!    with default weights `dw = 0.3`, `cw = 0.7`.
//! 2. Edit distance, ascending.
//! 3. Case-folded word, ascending by code unit.
//!
//! Distances at or beyond 5 contribute nothing to the score; past that point
//! only confidence separates candidates.

use std::cmp::Ordering;

use serde::Serialize;

use super::Suggestion;
use crate::utils::fold_case;

pub const DEFAULT_DISTANCE_WEIGHT: f64 = 0.3;
pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 0.7;

/// Distances are clamped here before entering the score.
pub const DISTANCE_CEILING: usize = 5;

/// Relative weight of distance vs. confidence in the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankingWeights {
    pub distance: f64,
    pub confidence: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        RankingWeights {
            distance: DEFAULT_DISTANCE_WEIGHT,
            confidence: DEFAULT_CONFIDENCE_WEIGHT,
        }
    }
}

/// The primary sort key.
pub fn combined_score(suggestion: &Suggestion, weights: RankingWeights) -> f64 {
    let clamped = suggestion.distance.min(DISTANCE_CEILING) as f64;
    weights.distance * (1.0 - clamped / DISTANCE_CEILING as f64)
        + weights.confidence * suggestion.confidence
}

/// Compare two suggestions for ranking.
///
/// `Ordering::Less` means `a` ranks ahead of `b`. Score buckets dominate;
/// distance and the folded word only break ties, so the full order is total
/// even when scores collide exactly.
pub fn compare(a: &Suggestion, b: &Suggestion, weights: RankingWeights) -> Ordering {
    // Primary: combined score (descending - higher score wins)
    match combined_score(b, weights).partial_cmp(&combined_score(a, weights)) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => {
            // Secondary: distance (ascending - closer wins)
            match a.distance.cmp(&b.distance) {
                Ordering::Equal => {
                    // Final tie-breaker: folded word for absolute determinism
                    fold_case(&a.word).cmp(&fold_case(&b.word))
                }
                ord => ord,
            }
        }
    }
}
