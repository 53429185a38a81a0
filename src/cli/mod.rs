// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the morf command-line interface.
//!
//! Three subcommands: `check` to spellcheck a file, directory, or literal
//! text; `dict` to list and inspect dictionary files; and `version`. Exit
//! codes follow the checking contract: 0 clean, 1 when `--exit-code` is set
//! and spelling errors were found, 2 for load/configuration failures.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "morf",
    about = "Morphological spellchecker with affix dictionaries",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a file, a directory, or (with --text) a literal string
    Check {
        /// Path to check, or the text itself with --text
        target: String,

        /// Dictionary file (.txt word list or Hunspell .dic)
        #[arg(short, long)]
        dict: PathBuf,

        /// Backend to use; inferred from the dictionary extension when omitted
        #[arg(short, long)]
        backend: Option<String>,

        /// Language code recorded on the dictionary
        #[arg(short, long, default_value = "en-US")]
        language: String,

        /// Maximum suggestions per misspelling
        #[arg(short, long, default_value = "5")]
        suggestions: usize,

        /// File pattern when target is a directory
        #[arg(short, long, default_value = "*.txt")]
        pattern: String,

        /// Treat target as literal text instead of a path
        #[arg(long)]
        text: bool,

        /// Match case exactly instead of folding
        #[arg(long)]
        case_sensitive: bool,

        /// Exit 1 when spelling errors are found
        #[arg(long)]
        exit_code: bool,
    },

    /// Inspect dictionaries
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },

    /// Print the version
    Version,
}

#[derive(Subcommand)]
pub enum DictAction {
    /// List usable dictionary files in a directory
    List {
        /// Directory to scan
        dir: PathBuf,
    },

    /// Load a dictionary and print its stats
    Info {
        /// Dictionary file (.txt word list or Hunspell .dic)
        path: PathBuf,

        /// Backend to use; inferred from the extension when omitted
        #[arg(short, long)]
        backend: Option<String>,

        /// Language code recorded on the dictionary
        #[arg(short, long, default_value = "en-US")]
        language: String,
    },
}
