// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display helpers for the morf CLI.
//!
//! Plain ANSI styling with the usual escape hatches: `NO_COLOR` wins, and
//! piped output stays uncolored thanks to TTY detection.

use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

static USE_COLOR: OnceLock<bool> = OnceLock::new();

/// Color only when stdout is a terminal and `NO_COLOR` is unset.
pub fn use_color() -> bool {
    *USE_COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// Wrap `text` in a style, or pass it through when color is off.
pub fn styled(text: &str, style: &str) -> String {
    if use_color() {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// `word (suggestion, suggestion, ...)` line for one spelling error.
pub fn error_line(word: &str, position: Option<usize>, suggestions: &[String]) -> String {
    let location = match position {
        Some(byte) => format!("{} ", styled(&format!("@{byte}"), DIM)),
        None => String::new(),
    };
    let word = styled(word, RED);
    if suggestions.is_empty() {
        format!("  {location}{word} {}", styled("(no suggestions)", DIM))
    } else {
        format!("  {location}{word} → {}", suggestions.join(", "))
    }
}

/// Section heading for a checked file.
pub fn file_heading(name: &str) -> String {
    styled(&format!("── {name}"), BOLD)
}

/// One-line verdict for a document.
pub fn summary(errors: usize, words: usize) -> String {
    if errors == 0 {
        styled(&format!("✓ {words} word(s), no errors"), GREEN)
    } else {
        styled(&format!("✗ {errors} error(s) in {words} word(s)"), YELLOW)
    }
}
