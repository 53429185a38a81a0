// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for dictionary loading and checking.
//!
//! Load-time failures carry the offending path (and line, for parse errors)
//! so a caller can point at the exact spot in a `.aff`/`.dic` file. Query-time
//! paths never produce errors: an empty or unknown word is a negative answer,
//! not a failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SpellError>;

/// Everything that can go wrong while loading dictionaries or checking files.
#[derive(Debug, Error)]
pub enum SpellError {
    /// A dictionary file, a companion file (`.aff` next to `.dic`), or a
    /// check target does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// A `.aff` or `.dic` file failed to parse: bad section header,
    /// malformed rule body, unparseable condition pattern, or a flag string
    /// that does not match the declared flag mode.
    #[error("parse error at {path}:{line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A required parameter is missing or invalid (unknown backend kind,
    /// backend demanding a path that was not given, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Unexpected runtime failure while checking.
    #[error("spellcheck failed: {0}")]
    Check(String),

    /// I/O failure that is not a missing file.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SpellError {
    /// Map an I/O error to the error taxonomy: missing files become
    /// [`SpellError::NotFound`] with the path attached, everything else
    /// stays an I/O error.
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            SpellError::NotFound { path: path.into() }
        } else {
            SpellError::Io(err)
        }
    }

    /// Construct a parse error for `path:line`.
    pub fn parse(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        SpellError::Parse {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}
