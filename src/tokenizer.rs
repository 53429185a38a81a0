// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text tokenization into `(word, byte position)` pairs.
//!
//! A token character is an ASCII letter or an ASCII apostrophe; everything
//! else — digits, whitespace, punctuation, non-ASCII — delimits. Positions
//! are byte indices of the token's first character, so they can be handed
//! straight back to the caller for highlighting. Case is preserved: folding
//! is the dictionary's business, not the tokenizer's.

/// One token and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte index of the first character in the source text.
    pub position: usize,
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}

/// Lazy tokenizer over a borrowed text.
pub struct Tokens<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.text.as_bytes();
        // Skip delimiters. Token characters are all single-byte ASCII, so
        // byte scanning is safe here; multi-byte characters never start a
        // token.
        while self.cursor < bytes.len() && !is_token_char(bytes[self.cursor] as char) {
            self.cursor += 1;
        }
        if self.cursor >= bytes.len() {
            return None;
        }
        let start = self.cursor;
        while self.cursor < bytes.len() && is_token_char(bytes[self.cursor] as char) {
            self.cursor += 1;
        }
        Some(Token {
            text: &self.text[start..self.cursor],
            position: start,
        })
    }
}

/// Tokenize `text` lazily. Never fails; empty or all-delimiter input just
/// yields nothing.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, cursor: 0 }
}

/// Eager variant for callers that want the whole list.
pub fn tokenize_all(text: &str) -> Vec<Token<'_>> {
    tokenize(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(&str, usize)> {
        tokenize(text).map(|t| (t.text, t.position)).collect()
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(pairs("hello world"), vec![("hello", 0), ("world", 6)]);
    }

    #[test]
    fn test_apostrophes_stay_inside_tokens() {
        assert_eq!(pairs("don't stop."), vec![("don't", 0), ("stop", 6)]);
    }

    #[test]
    fn test_digits_and_punctuation_delimit() {
        assert_eq!(pairs("a1b,c"), vec![("a", 0), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn test_positions_are_byte_indices() {
        // The é is two bytes; "word" starts at byte 6.
        assert_eq!(pairs("caf\u{e9} word"), vec![("caf", 0), ("word", 6)]);
    }

    #[test]
    fn test_empty_and_delimiter_only_input() {
        assert!(pairs("").is_empty());
        assert!(pairs("123 ... \n\t").is_empty());
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(pairs("Hello WORLD"), vec![("Hello", 0), ("WORLD", 6)]);
    }
}
