// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Affix rules: how a stem grows a prefix or suffix.
//!
//! A rule is the tuple `(kind, flag, strip, add, condition, cross_product)`.
//! Applying a suffix rule to `run` with `strip=""`, `add="ning"` yields
//! `running`; undoing it peels `ning` back off and restores the strip. The
//! condition is a tiny anchored pattern language (literals, `.`, `[abc]`,
//! `[^abc]`) deciding which stems the rule may touch.
//!
//! # Invariants
//!
//! - `flag` is non-empty (it identifies the rule group in the dictionary).
//! - `condition` is non-empty; `.` means unconstrained.
//! - `undo` is the formal inverse of `apply`: whenever `apply(w)` produces a
//!   surface form `s`, `undo(s)` returns `w` again. `undo` verifies the
//!   condition against the reconstructed stem to keep that round trip exact.

use std::fmt;

use serde::Serialize;

/// How flag strings in a dictionary are encoded.
///
/// Declared once in the `.aff` header with `FLAG char|long|num`; every flag
/// in that dictionary uses the same encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagMode {
    /// One ASCII character per flag (the default).
    #[default]
    Char,
    /// Two ASCII characters per flag.
    Long,
    /// Comma-separated decimal integers.
    Num,
}

impl FlagMode {
    /// Parse the value of a `FLAG` directive.
    pub fn parse(value: &str) -> Option<FlagMode> {
        match value {
            "char" => Some(FlagMode::Char),
            "long" => Some(FlagMode::Long),
            "num" => Some(FlagMode::Num),
            _ => None,
        }
    }
}

/// Opaque flag identifier attached to dictionary words and affix rules.
///
/// Internally a small integer: `char` flags are the character's code point,
/// `long` flags pack both characters into 16 bits, `num` flags are the
/// number itself. Equality and hashing are what matter; the original
/// spelling can be recovered with [`Flag::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(transparent)]
pub struct Flag(pub u32);

impl Flag {
    /// Decode a whole flag string (the part after `/` on a `.dic` line, or
    /// the flag column of an affix line) under the given mode.
    pub fn parse_flagstring(s: &str, mode: FlagMode) -> Result<Vec<Flag>, String> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Vec::new());
        }
        match mode {
            FlagMode::Char => Ok(s.chars().map(|c| Flag(c as u32)).collect()),
            FlagMode::Long => {
                let chars: Vec<char> = s.chars().collect();
                if chars.len() % 2 != 0 {
                    return Err(format!("odd-length long flag string {s:?}"));
                }
                Ok(chars
                    .chunks(2)
                    .map(|pair| Flag(((pair[0] as u32) << 8) | pair[1] as u32))
                    .collect())
            }
            FlagMode::Num => s
                .split(',')
                .map(|part| {
                    part.trim()
                        .parse::<u32>()
                        .map(Flag)
                        .map_err(|_| format!("invalid numeric flag {part:?}"))
                })
                .collect(),
        }
    }

    /// Decode a single flag (the flag column of a `PFX`/`SFX` line).
    pub fn parse_single(s: &str, mode: FlagMode) -> Result<Flag, String> {
        let flags = Flag::parse_flagstring(s, mode)?;
        match flags.as_slice() {
            [flag] => Ok(*flag),
            [] => Err("empty flag".to_string()),
            _ => Err(format!("expected one flag, got {:?}", s)),
        }
    }

    /// Render the flag back in its declared encoding.
    pub fn format(self, mode: FlagMode) -> String {
        match mode {
            FlagMode::Char => char::from_u32(self.0)
                .map(String::from)
                .unwrap_or_else(|| self.0.to_string()),
            FlagMode::Long => {
                let hi = char::from_u32(self.0 >> 8);
                let lo = char::from_u32(self.0 & 0xff);
                match (hi, lo) {
                    (Some(a), Some(b)) => format!("{a}{b}"),
                    _ => self.0.to_string(),
                }
            }
            FlagMode::Num => self.0.to_string(),
        }
    }
}

/// Whether a rule attaches at the front or the back of the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

impl fmt::Display for AffixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffixKind::Prefix => write!(f, "PFX"),
            AffixKind::Suffix => write!(f, "SFX"),
        }
    }
}

/// One element of a compiled condition pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CondAtom {
    /// `.` matches any single character.
    Any,
    /// A literal character.
    Literal(char),
    /// `[abc]` or `[^abc]`.
    Class { chars: Vec<char>, negated: bool },
}

impl CondAtom {
    fn matches(&self, c: char) -> bool {
        match self {
            CondAtom::Any => true,
            CondAtom::Literal(l) => *l == c,
            CondAtom::Class { chars, negated } => chars.contains(&c) != *negated,
        }
    }
}

/// Compiled affix condition.
///
/// For a prefix rule the pattern is anchored at the start of the word, for a
/// suffix rule at the end. The raw pattern text is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pattern: String,
    atoms: Vec<CondAtom>,
}

impl Condition {
    /// Compile a Hunspell condition pattern.
    ///
    /// Fails on an empty pattern or an unterminated character class; the
    /// caller turns that into a dictionary-load error with a line number.
    pub fn parse(pattern: &str) -> Result<Condition, String> {
        if pattern.is_empty() {
            return Err("empty condition pattern".to_string());
        }
        let mut atoms = Vec::new();
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '.' => atoms.push(CondAtom::Any),
                '[' => {
                    let negated = chars.peek() == Some(&'^');
                    if negated {
                        chars.next();
                    }
                    let mut class = Vec::new();
                    let mut closed = false;
                    for m in chars.by_ref() {
                        if m == ']' {
                            closed = true;
                            break;
                        }
                        class.push(m);
                    }
                    if !closed {
                        return Err(format!("unterminated character class in {pattern:?}"));
                    }
                    atoms.push(CondAtom::Class {
                        chars: class,
                        negated,
                    });
                }
                other => atoms.push(CondAtom::Literal(other)),
            }
        }
        Ok(Condition {
            pattern: pattern.to_string(),
            atoms,
        })
    }

    /// The raw pattern text as it appeared in the affix file.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of characters the pattern consumes.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Match anchored at the start of `word`.
    pub fn matches_prefix(&self, word: &str) -> bool {
        let head: Vec<char> = word.chars().take(self.atoms.len()).collect();
        head.len() == self.atoms.len()
            && self.atoms.iter().zip(head).all(|(a, c)| a.matches(c))
    }

    /// Match anchored at the end of `word`.
    pub fn matches_suffix(&self, word: &str) -> bool {
        let total = word.chars().count();
        if total < self.atoms.len() {
            return false;
        }
        let tail = word.chars().skip(total - self.atoms.len());
        self.atoms.iter().zip(tail).all(|(a, c)| a.matches(c))
    }
}

/// One `PFX`/`SFX` entry from an affix file.
#[derive(Debug, Clone, PartialEq)]
pub struct AffixRule {
    pub kind: AffixKind,
    pub flag: Flag,
    pub strip: String,
    pub add: String,
    pub condition: Condition,
    pub cross_product: bool,
}

impl AffixRule {
    pub fn new(
        kind: AffixKind,
        flag: Flag,
        strip: impl Into<String>,
        add: impl Into<String>,
        condition: Condition,
        cross_product: bool,
    ) -> AffixRule {
        AffixRule {
            kind,
            flag,
            strip: strip.into(),
            add: add.into(),
            condition,
            cross_product,
        }
    }

    /// Does the condition admit this stem?
    pub fn applies_to(&self, word: &str) -> bool {
        match self.kind {
            AffixKind::Prefix => self.condition.matches_prefix(word),
            AffixKind::Suffix => self.condition.matches_suffix(word),
        }
    }

    /// Produce the surface form, or `None` when the rule does not apply or
    /// the strip string is absent from the relevant end.
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.applies_to(word) {
            return None;
        }
        match self.kind {
            AffixKind::Prefix => word
                .strip_prefix(self.strip.as_str())
                .map(|rest| format!("{}{}", self.add, rest)),
            AffixKind::Suffix => word
                .strip_suffix(self.strip.as_str())
                .map(|base| format!("{}{}", base, self.add)),
        }
    }

    /// Invert [`AffixRule::apply`]: strip the added material from the
    /// surface form and restore the strip string. Returns `None` when the
    /// added material is not present, or when the reconstructed stem would
    /// not satisfy the condition (in which case `apply` could never have
    /// produced this surface form).
    pub fn undo(&self, surface: &str) -> Option<String> {
        let stem = match self.kind {
            AffixKind::Prefix => surface
                .strip_prefix(self.add.as_str())
                .map(|rest| format!("{}{}", self.strip, rest))?,
            AffixKind::Suffix => surface
                .strip_suffix(self.add.as_str())
                .map(|base| format!("{}{}", base, self.strip))?,
        };
        if self.applies_to(&stem) {
            Some(stem)
        } else {
            None
        }
    }
}
