// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sound-alike suggestions via Soundex or Metaphone codes.
//!
//! Both encoders reduce a word to a short canonical code; words sharing the
//! query's code are candidates, then a Levenshtein filter (distance <= 2)
//! keeps the list from drifting too far from the typed letters. "Robert"
//! and "Rupert" both code to `R163`, so each suggests the other.

use super::{SuggestContext, Suggestion, SuggestionSet, SuggestionSource, Strategy};
use super::edit_distance::levenshtein_bounded;
use crate::utils::fold_case;

/// Soundex digit for a letter. Vowels, H, and W are silent (`0`).
fn soundex_digit(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0',
    }
}

/// Four-character Soundex code, or `None` for input without letters.
///
/// Retain the first letter, encode the rest, collapse consecutive runs of
/// the same digit (the first letter's own digit participates, so "Pfister"
/// loses its F), drop the silents, pad with zeros to length four.
pub fn soundex(word: &str) -> Option<String> {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let first = *letters.first()?;

    let mut digits = String::new();
    let mut prev = soundex_digit(first);
    for &c in &letters[1..] {
        let d = soundex_digit(c);
        if d != prev && d != '0' {
            digits.push(d);
        }
        prev = d;
    }
    digits.truncate(3);
    while digits.len() < 3 {
        digits.push('0');
    }
    Some(format!("{first}{digits}"))
}

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

fn is_vowel(c: Option<char>) -> bool {
    c.is_some_and(|c| VOWELS.contains(&c))
}

/// Metaphone code, truncated to four characters.
///
/// Vowels survive only in initial position; consonants encode by their
/// pronunciation context: CH/SH -> X, soft C/G -> S/J, TH -> the theta
/// digit `0`, PH/V -> F, silent GH/GN/KN-style clusters drop out.
pub fn metaphone(word: &str) -> String {
    let w: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let n = w.len();
    let mut out = String::new();
    let mut i = 0;

    while i < n && out.len() < 4 {
        let c = w[i];

        // Doubled letters collapse to one, except C (as in "accept").
        if i > 0 && c == w[i - 1] && c != 'C' {
            i += 1;
            continue;
        }

        let prev = if i > 0 { Some(w[i - 1]) } else { None };
        let next = w.get(i + 1).copied();
        let next2 = w.get(i + 2).copied();

        match c {
            'A' | 'E' | 'I' | 'O' | 'U' => {
                if i == 0 {
                    out.push(c);
                }
            }
            'B' => {
                // Terminal MB: the B is silent ("thumb").
                if !(i == n - 1 && prev == Some('M')) {
                    out.push('B');
                }
            }
            'C' => {
                if next == Some('H') {
                    out.push('X');
                    i += 2;
                    continue;
                }
                if next == Some('I') && next2 == Some('A') {
                    out.push('X');
                } else if matches!(next, Some('I' | 'E' | 'Y')) {
                    out.push('S');
                } else {
                    out.push('K');
                }
            }
            'D' => {
                if next == Some('G') && matches!(next2, Some('I' | 'E' | 'Y')) {
                    out.push('J');
                    i += 2;
                    continue;
                }
                out.push('T');
            }
            'F' => out.push('F'),
            'G' => {
                if next == Some('N') {
                    // GN: silent ("gnome", "sign").
                } else if next == Some('H') {
                    if is_vowel(next2) {
                        out.push('K');
                        i += 2;
                        continue;
                    }
                    // GH before a consonant or at the end: silent ("night").
                } else if matches!(next, Some('I' | 'E' | 'Y')) {
                    out.push('J');
                } else {
                    out.push('K');
                }
            }
            'H' => {
                if i == 0 {
                    out.push('H');
                }
            }
            'J' => out.push('J'),
            'K' => {
                if prev != Some('C') {
                    out.push('K');
                }
            }
            'L' => out.push('L'),
            'M' => out.push('M'),
            'N' => out.push('N'),
            'P' => {
                if next == Some('H') {
                    out.push('F');
                    i += 2;
                    continue;
                }
                out.push('P');
            }
            'Q' => out.push('K'),
            'R' => out.push('R'),
            'S' => {
                if next == Some('H') {
                    out.push('X');
                    i += 2;
                    continue;
                }
                if next == Some('I') && matches!(next2, Some('O' | 'A')) {
                    out.push('X');
                } else {
                    out.push('S');
                }
            }
            'T' => {
                if next == Some('I') && matches!(next2, Some('O' | 'A')) {
                    out.push('X');
                } else if next == Some('H') {
                    out.push('0');
                    i += 2;
                    continue;
                } else {
                    out.push('T');
                }
            }
            'V' => out.push('F'),
            'W' | 'Y' => {
                if i == 0 {
                    out.push(c);
                }
            }
            'X' => out.push_str("KS"),
            'Z' => out.push('S'),
            _ => {}
        }
        i += 1;
    }

    out.truncate(4);
    out
}

/// Which phonetic encoder to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneticAlgorithm {
    #[default]
    Soundex,
    Metaphone,
}

/// Candidates that share the query's phonetic code.
pub struct PhoneticStrategy {
    pub algorithm: PhoneticAlgorithm,
    pub enabled: bool,
    pub priority: u8,
}

impl Default for PhoneticStrategy {
    fn default() -> Self {
        PhoneticStrategy {
            algorithm: PhoneticAlgorithm::Soundex,
            enabled: true,
            priority: 20,
        }
    }
}

impl PhoneticStrategy {
    pub fn with_algorithm(algorithm: PhoneticAlgorithm) -> Self {
        PhoneticStrategy {
            algorithm,
            ..Default::default()
        }
    }

    fn encode(&self, word: &str) -> Option<String> {
        match self.algorithm {
            PhoneticAlgorithm::Soundex => soundex(word),
            PhoneticAlgorithm::Metaphone => {
                let code = metaphone(word);
                (!code.is_empty()).then_some(code)
            }
        }
    }
}

impl Strategy for PhoneticStrategy {
    fn source(&self) -> SuggestionSource {
        SuggestionSource::Phonetic
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
        let mut set = SuggestionSet::new(ctx.max_results);
        let Some(query_code) = self.encode(ctx.word) else {
            return set;
        };
        let query = fold_case(ctx.word);
        for candidate in ctx.dictionary.words() {
            if self.encode(&candidate).as_deref() != Some(query_code.as_str()) {
                continue;
            }
            // Same code but wildly different letters is noise; keep the
            // candidates a couple of edits away at most.
            if let Some(d) = levenshtein_bounded(&query, &fold_case(&candidate), 2) {
                if d > 0 {
                    // A shared pronunciation is strong evidence the candidate
                    // was the intended word, so confidence starts high and
                    // decays gently with distance.
                    let confidence = 1.0 - 0.2 * d as f64;
                    set.insert(Suggestion::new(candidate, d, confidence, self.source()));
                }
            }
        }
        set
    }
}
