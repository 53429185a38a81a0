// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hunspell-style backend: a `.dic` word list whose entries carry flags,
//! plus a `.aff` file defining what those flags let the words do.
//!
//! `contains` first tries the stem hash directly, then works backwards:
//! every suffix and prefix rule is un-applied to the query, and a hit counts
//! when the reconstructed stem is stored carrying the rule's flag. When a
//! rule is marked cross-product the complementary kind is un-applied on top,
//! so `rerunning` resolves through `re-` + `run` + `-ning` with a single
//! stored stem.
//!
//! Parsing is line-oriented and never panics: malformed input surfaces as a
//! parse error naming the file and line.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::affix::{AffixKind, AffixRule, Condition, Flag, FlagMode};
use crate::error::{Result, SpellError};
use crate::types::Word;
use crate::utils::fold_case;

use super::{Dictionary, DictionaryKind};

/// Parsed `.aff` contents.
///
/// Only `FLAG`, `PFX`, and `SFX` influence checking; the rest of the
/// recognised keywords are captured for callers that want to inspect them.
#[derive(Debug, Clone, Default)]
pub struct AffixFile {
    pub flag_mode: FlagMode,
    pub encoding: Option<String>,
    /// `TRY` characters, in suggestion-priority order.
    pub try_chars: Option<String>,
    /// `REP` replacement pairs.
    pub replacements: Vec<(String, String)>,
    /// `MAP` related-character groups.
    pub map_groups: Vec<String>,
    pub compound_rules: Vec<String>,
    pub compound_word_min: Option<u32>,
    pub compound_flag: Option<String>,
    pub prefixes: HashMap<Flag, Vec<AffixRule>>,
    pub suffixes: HashMap<Flag, Vec<AffixRule>>,
}

impl AffixFile {
    pub fn rule_count(&self) -> usize {
        self.prefixes.values().map(Vec::len).sum::<usize>()
            + self.suffixes.values().map(Vec::len).sum::<usize>()
    }

    /// Parse `.aff` text. `path` is only used to label errors.
    pub fn parse(text: &str, path: &Path) -> Result<AffixFile> {
        let mut aff = AffixFile::default();
        // Open affix section: kind, flag, cross_product, body lines left.
        let mut section: Option<(AffixKind, String, bool, usize)> = None;

        for (idx, raw) in text.lines().enumerate() {
            let lineno = idx + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();

            if let Some((kind, flag_text, cross, remaining)) = section.take() {
                let rule = parse_rule_body(&tokens, kind, &flag_text, cross, &aff, path, lineno)?;
                aff.rules_mut(kind)
                    .entry(rule.flag)
                    .or_default()
                    .push(rule);
                if remaining > 1 {
                    section = Some((kind, flag_text, cross, remaining - 1));
                }
                continue;
            }

            match tokens[0] {
                "SET" => aff.encoding = tokens.get(1).map(|s| s.to_string()),
                "TRY" => aff.try_chars = tokens.get(1).map(|s| s.to_string()),
                "FLAG" => {
                    let value = tokens.get(1).copied().unwrap_or("");
                    aff.flag_mode = FlagMode::parse(value).ok_or_else(|| {
                        SpellError::parse(path, lineno, format!("unknown flag mode {value:?}"))
                    })?;
                }
                "PFX" | "SFX" => {
                    let kind = if tokens[0] == "PFX" {
                        AffixKind::Prefix
                    } else {
                        AffixKind::Suffix
                    };
                    let (flag_text, cross, count) =
                        parse_section_header(&tokens, path, lineno)?;
                    if count > 0 {
                        section = Some((kind, flag_text, cross, count));
                    }
                }
                "REP" => {
                    // Count header (`REP 5`) or a pair line (`REP ph f`).
                    if let (Some(from), Some(to)) = (tokens.get(1), tokens.get(2)) {
                        aff.replacements.push((from.to_string(), to.to_string()));
                    }
                }
                "MAP" => {
                    if let Some(group) = tokens.get(1) {
                        if group.parse::<usize>().is_err() {
                            aff.map_groups.push(group.to_string());
                        }
                    }
                }
                "COMPOUNDRULE" => {
                    if let Some(rule) = tokens.get(1) {
                        if rule.parse::<usize>().is_err() {
                            aff.compound_rules.push(rule.to_string());
                        }
                    }
                }
                "COMPOUNDWORDMIN" => {
                    aff.compound_word_min = tokens.get(1).and_then(|t| t.parse().ok());
                }
                "COMPOUNDFLAG" => {
                    aff.compound_flag = tokens.get(1).map(|s| s.to_string());
                }
                other => {
                    log::debug!("ignoring affix keyword {other:?} at {}:{lineno}", path.display());
                }
            }
        }

        if let Some((kind, flag, _, remaining)) = section {
            return Err(SpellError::parse(
                path,
                text.lines().count(),
                format!("{kind} {flag} section ended {remaining} rule(s) early"),
            ));
        }
        Ok(aff)
    }

    fn rules_mut(&mut self, kind: AffixKind) -> &mut HashMap<Flag, Vec<AffixRule>> {
        match kind {
            AffixKind::Prefix => &mut self.prefixes,
            AffixKind::Suffix => &mut self.suffixes,
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(
    tokens: &[&str],
    path: &Path,
    lineno: usize,
) -> Result<(String, bool, usize)> {
    let (flag, cross, count) = match tokens {
        [_, flag, cross, count, ..] => (flag, cross, count),
        _ => {
            return Err(SpellError::parse(
                path,
                lineno,
                format!("malformed affix header {:?}", tokens.join(" ")),
            ))
        }
    };
    let cross = match *cross {
        "Y" => true,
        "N" => false,
        other => {
            return Err(SpellError::parse(
                path,
                lineno,
                format!("cross-product must be Y or N, got {other:?}"),
            ))
        }
    };
    let count: usize = count.parse().map_err(|_| {
        SpellError::parse(path, lineno, format!("invalid rule count {count:?}"))
    })?;
    Ok((flag.to_string(), cross, count))
}

fn parse_rule_body(
    tokens: &[&str],
    kind: AffixKind,
    flag_text: &str,
    cross: bool,
    aff: &AffixFile,
    path: &Path,
    lineno: usize,
) -> Result<AffixRule> {
    let keyword = match kind {
        AffixKind::Prefix => "PFX",
        AffixKind::Suffix => "SFX",
    };
    if tokens.first() != Some(&keyword) || tokens.get(1) != Some(&flag_text) {
        return Err(SpellError::parse(
            path,
            lineno,
            format!("expected {keyword} {flag_text} rule body, got {:?}", tokens.join(" ")),
        ));
    }
    let strip = *tokens.get(2).ok_or_else(|| {
        SpellError::parse(path, lineno, "affix rule body is missing its strip column")
    })?;
    let add = *tokens.get(3).ok_or_else(|| {
        SpellError::parse(path, lineno, "affix rule body is missing its add column")
    })?;
    // Trailing columns beyond the condition are morphological fields; skip.
    let condition_text = tokens.get(4).copied().unwrap_or(".");

    let flag = Flag::parse_single(flag_text, aff.flag_mode)
        .map_err(|reason| SpellError::parse(path, lineno, reason))?;
    let strip = if strip == "0" { "" } else { strip };
    // The add column may carry continuation flags after a slash; checking
    // does not consume them.
    let add = match add.split_once('/') {
        Some((bare, _)) => bare,
        None => add,
    };
    let add = if add == "0" { "" } else { add };
    let condition = Condition::parse(condition_text)
        .map_err(|reason| SpellError::parse(path, lineno, reason))?;

    Ok(AffixRule::new(kind, flag, strip, add, condition, cross))
}

/// One stored stem.
#[derive(Debug, Clone, Default)]
struct Entry {
    flags: Vec<Flag>,
    morph: BTreeMap<String, String>,
}

/// Dictionary backed by a `.dic`/`.aff` pair.
#[derive(Debug)]
pub struct HunspellDictionary {
    language: String,
    locale: Option<String>,
    metadata: BTreeMap<String, String>,
    entries: HashMap<String, Entry>,
    order: Vec<String>,
    affix: AffixFile,
}

impl HunspellDictionary {
    /// Load from a `.dic` path, expecting the `.aff` right next to it.
    pub fn from_dic_path(language: &str, dic_path: impl AsRef<Path>) -> Result<HunspellDictionary> {
        let dic_path = dic_path.as_ref();
        let aff_path = dic_path.with_extension("aff");
        if !aff_path.exists() {
            return Err(SpellError::NotFound { path: aff_path });
        }
        let aff_text =
            fs::read_to_string(&aff_path).map_err(|e| SpellError::from_io(e, &aff_path))?;
        let dic_text =
            fs::read_to_string(dic_path).map_err(|e| SpellError::from_io(e, dic_path))?;
        let mut dict =
            Self::from_strings(language, &aff_text, &aff_path, &dic_text, dic_path)?;
        dict.metadata
            .insert("source".to_string(), dic_path.display().to_string());
        Ok(dict)
    }

    /// Build from already-read `.aff` and `.dic` text. The paths label
    /// parse errors only.
    pub fn from_strings(
        language: &str,
        aff_text: &str,
        aff_path: &Path,
        dic_text: &str,
        dic_path: &Path,
    ) -> Result<HunspellDictionary> {
        let affix = AffixFile::parse(aff_text, aff_path)?;
        let mut dict = HunspellDictionary {
            language: language.to_string(),
            locale: None,
            metadata: BTreeMap::new(),
            entries: HashMap::new(),
            order: Vec::new(),
            affix,
        };
        dict.load_dic(dic_text, dic_path)?;
        dict.metadata.insert(
            "affix_rules".to_string(),
            dict.affix.rule_count().to_string(),
        );
        if let Some(encoding) = &dict.affix.encoding {
            dict.metadata.insert("encoding".to_string(), encoding.clone());
        }
        log::debug!(
            "hunspell {}: {} stem(s), {} affix rule(s)",
            language,
            dict.entries.len(),
            dict.affix.rule_count()
        );
        Ok(dict)
    }

    fn load_dic(&mut self, text: &str, path: &Path) -> Result<()> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let Some((first_no, first)) = lines.next() else {
            return Err(SpellError::parse(path, 1, "empty dictionary file"));
        };
        match first.parse::<usize>() {
            Ok(hint) => self.entries.reserve(hint),
            Err(_) => {
                // The count hint is advisory anyway; treat the line as a word.
                log::warn!("{}:{} has no word-count hint", path.display(), first_no);
                self.insert_line(first, path, first_no)?;
            }
        }
        for (lineno, line) in lines {
            self.insert_line(line, path, lineno)?;
        }
        Ok(())
    }

    fn insert_line(&mut self, line: &str, path: &Path, lineno: usize) -> Result<()> {
        let mut fields = line.split_whitespace();
        let head = fields.next().unwrap_or("");
        let (word, flags) = match head.split_once('/') {
            Some((word, flagstring)) => {
                let flags = Flag::parse_flagstring(flagstring, self.affix.flag_mode)
                    .map_err(|reason| SpellError::parse(path, lineno, reason))?;
                (word, flags)
            }
            None => (head, Vec::new()),
        };
        if word.is_empty() {
            return Err(SpellError::parse(path, lineno, "empty word entry"));
        }
        let mut morph = BTreeMap::new();
        for field in fields {
            if let Some((key, value)) = field.split_once(':') {
                morph.insert(key.to_string(), value.to_string());
            }
        }

        let folded = fold_case(word);
        if !self.entries.contains_key(&folded) {
            self.order.push(folded.clone());
        }
        let entry = self.entries.entry(folded).or_default();
        for flag in flags {
            if !entry.flags.contains(&flag) {
                entry.flags.push(flag);
            }
        }
        entry.morph.extend(morph);
        Ok(())
    }

    /// The parsed affix configuration.
    pub fn affix(&self) -> &AffixFile {
        &self.affix
    }

    /// The stored entry for a stem, if present.
    pub fn entry(&self, word: &str) -> Option<Word> {
        let folded = fold_case(word);
        self.entries.get(&folded).map(|e| {
            Word::new(folded.clone())
                .with_flags(e.flags.clone())
                .with_morph(e.morph.clone())
        })
    }

    fn stem_has_flag(&self, stem: &str, flag: Flag) -> bool {
        self.entries
            .get(stem)
            .is_some_and(|e| e.flags.contains(&flag))
    }

    fn stem_has_flags(&self, stem: &str, a: Flag, b: Flag) -> bool {
        self.entries
            .get(stem)
            .is_some_and(|e| e.flags.contains(&a) && e.flags.contains(&b))
    }

    /// Reverse-expand the query against the affix tables.
    ///
    /// Single-affix first (suffixes, then prefixes), then two-affix
    /// compositions where both rules allow the cross product.
    fn check_affixed(&self, word: &str) -> bool {
        for rules in self.affix.suffixes.values() {
            for suffix in rules {
                let Some(stem) = suffix.undo(word) else {
                    continue;
                };
                if self.stem_has_flag(&stem, suffix.flag) {
                    return true;
                }
                if suffix.cross_product && self.check_cross(&stem, suffix, &self.affix.prefixes) {
                    return true;
                }
            }
        }
        for rules in self.affix.prefixes.values() {
            for prefix in rules {
                let Some(stem) = prefix.undo(word) else {
                    continue;
                };
                if self.stem_has_flag(&stem, prefix.flag) {
                    return true;
                }
                if prefix.cross_product && self.check_cross(&stem, prefix, &self.affix.suffixes) {
                    return true;
                }
            }
        }
        false
    }

    fn check_cross(
        &self,
        stem: &str,
        outer: &AffixRule,
        complement: &HashMap<Flag, Vec<AffixRule>>,
    ) -> bool {
        for rules in complement.values() {
            for inner in rules {
                if !inner.cross_product {
                    continue;
                }
                if let Some(base) = inner.undo(stem) {
                    if self.stem_has_flags(&base, outer.flag, inner.flag) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl Dictionary for HunspellDictionary {
    fn language_code(&self) -> &str {
        &self.language
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    fn kind(&self) -> DictionaryKind {
        DictionaryKind::Hunspell
    }

    fn case_sensitive(&self) -> bool {
        false
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, word: &str) -> bool {
        let folded = fold_case(word);
        self.entries.contains_key(&folded) || self.check_affixed(&folded)
    }

    fn words(&self) -> Vec<String> {
        self.order.clone()
    }

    fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = fold_case(prefix);
        self.order
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect()
    }

    fn add(&mut self, word: &str, flags: &[Flag]) -> bool {
        let folded = fold_case(word);
        if self.entries.contains_key(&folded) {
            return false;
        }
        self.order.push(folded.clone());
        self.entries.insert(
            folded,
            Entry {
                flags: flags.to_vec(),
                morph: BTreeMap::new(),
            },
        );
        true
    }

    fn remove(&mut self, word: &str) -> bool {
        let folded = fold_case(word);
        if self.entries.remove(&folded).is_some() {
            self.order.retain(|w| w != &folded);
            true
        } else {
            false
        }
    }
}
