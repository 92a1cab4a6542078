//! Errors produced while reading, parsing or reordering a document.
//!
//! None of these are recoverable within a document: the first error aborts it
//! and no partial output is produced.

use std::io;

use thiserror::Error;

use crate::tokenizer::{Position, Token, TokenKind};

/// Result alias used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while rewriting a document.
#[derive(Debug, Error)]
pub enum Error {
    /// The input stream could not be read, or was not valid UTF-8.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The parser needed a specific token and found something else, or ran
    /// out of input inside an unterminated construct.
    #[error("{}: expected {expected} ({expected_kind}) but found {} {:?}", .found.position, .found.kind, .found.text)]
    Syntax {
        /// What the parser was looking for, in words.
        expected: &'static str,
        /// The token kind the parser required.
        expected_kind: TokenKind,
        /// The token that was there instead.
        found: Token,
    },

    /// An order pattern is not a valid regular expression.
    #[error("invalid order pattern {pattern:?}: {source}")]
    Pattern {
        /// The pattern as the user wrote it.
        pattern: String,
        /// Why the regex engine rejected it.
        source: regex::Error,
    },
}

impl Error {
    /// Where in the source the error was found, for syntax errors.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Syntax { found, .. } => Some(found.position),
            Self::Io(_) | Self::Pattern { .. } => None,
        }
    }
}
