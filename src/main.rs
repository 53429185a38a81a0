// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! morf CLI: check text against a dictionary, inspect dictionaries.
//!
//! ```bash
//! # Check a file against a word list
//! morf check notes.txt --dict en_US.txt
//!
//! # Check a directory of text files against a Hunspell dictionary
//! morf check ./docs --dict en_US.dic --pattern '*.md'
//!
//! # Check a literal string
//! morf check "Hello wrold" --dict en_US.txt --text
//! ```

use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;

use morf::{
    load_dictionary, Dictionary, DictionaryConfig, DictionaryKind, DocumentResult, SpellError,
    Spellchecker,
};

mod cli;
use cli::display::{error_line, file_heading, styled, summary, CYAN, DIM};
use cli::{Cli, Commands, DictAction};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Check {
            target,
            dict,
            backend,
            language,
            suggestions,
            pattern,
            text,
            case_sensitive,
            exit_code,
        } => run_check(
            &target,
            &dict,
            backend.as_deref(),
            &language,
            suggestions,
            &pattern,
            text,
            case_sensitive,
        )
        .map(|errors_found| {
            if errors_found && exit_code {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }),
        Commands::Dict { action } => match action {
            DictAction::List { dir } => run_dict_list(&dir).map(|()| ExitCode::SUCCESS),
            DictAction::Info {
                path,
                backend,
                language,
            } => run_dict_info(&path, backend.as_deref(), &language).map(|()| ExitCode::SUCCESS),
        },
        Commands::Version => {
            println!("morf {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

/// Pick a backend from an explicit name or the dictionary extension.
fn resolve_backend(explicit: Option<&str>, dict: &Path) -> Result<DictionaryKind, SpellError> {
    if let Some(name) = explicit {
        return DictionaryKind::from_str(name);
    }
    Ok(match dict.extension().and_then(|e| e.to_str()) {
        Some("dic") => DictionaryKind::Hunspell,
        Some("trie") => DictionaryKind::Trie,
        _ => DictionaryKind::WordList,
    })
}

fn build_checker(
    dict: &Path,
    backend: Option<&str>,
    language: &str,
    suggestions: usize,
    case_sensitive: bool,
) -> anyhow::Result<Spellchecker> {
    let mut config = DictionaryConfig::new(resolve_backend(backend, dict)?, language);
    config.path = Some(dict.to_path_buf());
    config.case_sensitive = case_sensitive;
    Ok(Spellchecker::new(load_dictionary(&config)?).with_max_suggestions(suggestions))
}

#[allow(clippy::too_many_arguments)]
fn run_check(
    target: &str,
    dict: &Path,
    backend: Option<&str>,
    language: &str,
    suggestions: usize,
    pattern: &str,
    literal_text: bool,
    case_sensitive: bool,
) -> anyhow::Result<bool> {
    let checker = build_checker(dict, backend, language, suggestions, case_sensitive)?;

    let documents: Vec<DocumentResult> = if literal_text {
        vec![checker.check(target)]
    } else {
        let path = Path::new(target);
        if path.is_dir() {
            checker.check_directory(path, pattern)?
        } else {
            vec![checker.check_file(path)?]
        }
    };

    let mut errors_found = false;
    for doc in &documents {
        if let Some(file) = &doc.file {
            println!("{}", file_heading(&file.display().to_string()));
        }
        for error in &doc.errors {
            errors_found = true;
            println!(
                "{}",
                error_line(&error.word, error.position, &error.suggestions.words())
            );
        }
        println!("{}", summary(doc.errors.len(), doc.word_count));
    }
    Ok(errors_found)
}

fn run_dict_list(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        return Err(SpellError::NotFound {
            path: dir.to_path_buf(),
        }
        .into());
    }
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| SpellError::from_io(e, dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();

    for path in entries {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let name = path.display();
        match ext {
            "dic" => {
                let aff = path.with_extension("aff");
                if aff.exists() {
                    println!("{} {}", styled("hunspell", CYAN), name);
                } else {
                    println!("{} {} {}", styled("hunspell", CYAN), name, styled("(missing .aff)", DIM));
                }
            }
            "txt" | "trie" => println!("{} {}", styled("wordlist", CYAN), name),
            _ => {}
        }
    }
    Ok(())
}

fn run_dict_info(path: &Path, backend: Option<&str>, language: &str) -> anyhow::Result<()> {
    let checker = build_checker(path, backend, language, 0, false)?;
    let dict = checker.dictionary();
    println!("language: {}", dict.language_code());
    println!("backend:  {}", dict.kind());
    println!("words:    {}", dict.len());
    println!("folding:  {}", if dict.case_sensitive() { "case-sensitive" } else { "case-insensitive" });
    for (key, value) in dict.metadata() {
        println!("{key}: {value}");
    }
    Ok(())
}
