//! Error types for gson parsing.
//!
//! Every scanner reports failure as a [`ParseError`]: the [`ErrorKind`] that was
//! detected plus the byte offset where the cursor stood at that moment.

use thiserror::Error;

/// What went wrong while scanning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value or token was expected but the cursor reached the end of the buffer.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// The lookahead byte does not start any value.
    #[error("unrecognized token '{found}'")]
    UnrecognizedToken { found: char },

    /// A fixed literal (`null`, `true`, `false`) did not match exactly.
    #[error("expected '{expected}', found '{found}'")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },

    /// An opening `"` has no closing `"` before the end of the buffer.
    #[error("unterminated string")]
    UnterminatedString,

    /// A malformed numeric literal, or one that does not fit its target type.
    #[error("invalid number '{literal}': {reason}")]
    InvalidNumberFormat { literal: String, reason: String },

    #[error("expected ',' or ']', found '{found}'")]
    ExpectedCommaOrCloseBracket { found: char },

    #[error("unterminated array")]
    UnterminatedArray,

    /// An object key position did not start with `"`.
    #[error("expected string key, found '{found}'")]
    ExpectedStringKey { found: char },

    #[error("expected ':', found '{found}'")]
    ExpectedColon { found: char },

    #[error("expected ',' or '}}', found '{found}'")]
    ExpectedCommaOrCloseBrace { found: char },

    #[error("unterminated object")]
    UnterminatedObject,

    /// Non-whitespace bytes follow the root value.
    #[error("trailing input starting with '{found}'")]
    TrailingInput { found: char },

    /// Containers are nested deeper than [`ParseOptions::max_depth`](crate::ParseOptions).
    #[error("nesting deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

/// A parse failure and the byte offset at which it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Convenience alias used throughout gson-core.
pub type Result<T> = std::result::Result<T, ParseError>;
