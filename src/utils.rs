//! Utility functions for string processing.

/// Fold a word for case-insensitive storage and comparison.
///
/// ASCII-only lowercasing: dictionaries declare their own case policy and the
/// tokenizer only emits ASCII letters and apostrophes, so full Unicode case
/// mapping is not needed here.
pub fn fold_case(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Match a word against a shell-style wildcard pattern.
///
/// `*` matches any run of characters (including none), `?` matches exactly
/// one character, everything else matches literally. Used for
/// `words_matching` queries and directory filters.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = text.chars().collect();
    match_from(&pat, &txt)
}

fn match_from(pat: &[char], txt: &[char]) -> bool {
    match pat.split_first() {
        None => txt.is_empty(),
        Some(('*', rest)) => (0..=txt.len()).any(|skip| match_from(rest, &txt[skip..])),
        Some(('?', rest)) => match txt.split_first() {
            Some((_, t_rest)) => match_from(rest, t_rest),
            None => false,
        },
        Some((c, rest)) => match txt.split_first() {
            Some((t, t_rest)) if t == c => match_from(rest, t_rest),
            _ => false,
        },
    }
}
