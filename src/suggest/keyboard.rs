// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fat-finger suggestions from US QWERTY key adjacency.
//!
//! A slip of the finger lands on a neighbouring key, drops a character, or
//! doubles one. This strategy generates those variants (substitution,
//! deletion, insertion of a neighbour of an adjacent key) out to a small
//! edit radius and keeps the ones the dictionary recognises.

use std::collections::HashSet;

use super::{SuggestContext, Suggestion, SuggestionSet, SuggestionSource, Strategy};
use crate::utils::fold_case;

/// US QWERTY adjacency. Each key maps to the keys physically around it.
const QWERTY_NEIGHBORS: &[(char, &str)] = &[
    ('q', "wsa"),
    ('w', "qeasd"),
    ('e', "wrsdf"),
    ('r', "etdfg"),
    ('t', "ryfgh"),
    ('y', "tughj"),
    ('u', "yihjk"),
    ('i', "uojkl"),
    ('o', "ipkl"),
    ('p', "ol;"),
    ('a', "qwszx"),
    ('s', "awedzx"),
    ('d', "serfxc"),
    ('f', "drtgcv"),
    ('g', "ftyhvb"),
    ('h', "gyujbn"),
    ('j', "huiknm"),
    ('k', "jiolm"),
    ('l', "kop;"),
    ('z', "asx"),
    ('x', "zsdc"),
    ('c', "xdfv"),
    ('v', "cfgb"),
    ('b', "vghn"),
    ('n', "bhjm"),
    ('m', "njk"),
    (';', "lp'"),
    ('\'', ";"),
];

/// Keys adjacent to `c`, or the empty string for keys off the map.
pub fn neighbors(c: char) -> &'static str {
    QWERTY_NEIGHBORS
        .iter()
        .find(|(key, _)| *key == c)
        .map_or("", |(_, adjacent)| adjacent)
}

/// All single-slip variants of `word`: neighbour substitutions, deletions,
/// and insertions of a key adjacent to either surrounding character.
fn slip_variants(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = HashSet::new();

    for (i, &c) in chars.iter().enumerate() {
        // Substitution: the finger hit a neighbouring key instead.
        for n in neighbors(c).chars() {
            let mut v: Vec<char> = chars.clone();
            v[i] = n;
            out.insert(v.into_iter().collect());
        }
        // Deletion: the key never registered.
        let mut v = chars.clone();
        v.remove(i);
        out.insert(v.into_iter().collect());
    }

    // Insertion: an extra key caught on the way to an adjacent one.
    for i in 0..=chars.len() {
        let mut inserted = HashSet::new();
        if i > 0 {
            inserted.extend(neighbors(chars[i - 1]).chars());
        }
        if i < chars.len() {
            inserted.extend(neighbors(chars[i]).chars());
        }
        for n in inserted {
            let mut v = chars.clone();
            v.insert(i, n);
            out.insert(v.into_iter().collect());
        }
    }

    out
}

/// Dictionary words reachable within a few keyboard slips of the query.
pub struct KeyboardProximityStrategy {
    pub max_distance: usize,
    pub enabled: bool,
    pub priority: u8,
}

impl Default for KeyboardProximityStrategy {
    fn default() -> Self {
        KeyboardProximityStrategy {
            max_distance: 2,
            enabled: true,
            priority: 30,
        }
    }
}

impl KeyboardProximityStrategy {
    pub fn with_max_distance(max_distance: usize) -> Self {
        KeyboardProximityStrategy {
            max_distance,
            ..Default::default()
        }
    }
}

impl Strategy for KeyboardProximityStrategy {
    fn source(&self) -> SuggestionSource {
        SuggestionSource::KeyboardProximity
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
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(query.clone());
        let mut frontier: Vec<String> = vec![query.clone()];

        for distance in 1..=self.max_distance {
            let mut next = Vec::new();
            for word in &frontier {
                for variant in slip_variants(word) {
                    if !seen.insert(variant.clone()) {
                        continue;
                    }
                    if ctx.dictionary.contains(&variant) {
                        let confidence = 1.0 / (1.0 + distance as f64);
                        set.insert(Suggestion::new(
                            variant.clone(),
                            distance,
                            confidence,
                            self.source(),
                        ));
                    }
                    next.push(variant);
                }
            }
            frontier = next;
        }
        set
    }
}
