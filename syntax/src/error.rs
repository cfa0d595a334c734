//! Syntax error types.
//!
//! All syntax errors are structural (`MalformedPattern` in spirit): the
//! pattern text itself is wrong and the caller must correct it. Offsets are
//! character offsets into the pattern string.

use thiserror::Error;

/// Errors that can occur while parsing a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The pattern string is empty.
    #[error("empty pattern")]
    Empty,

    /// An opening parenthesis is never closed.
    #[error("unbalanced '(' at offset {offset}")]
    UnbalancedParen { offset: usize },

    /// A closing parenthesis has no matching open.
    #[error("unmatched ')' at offset {offset}")]
    UnmatchedClose { offset: usize },

    /// The pattern ends in a lone escape character.
    #[error("dangling escape at end of pattern")]
    DanglingEscape,

    /// A group `()` encloses no pattern.
    #[error("empty group at offset {offset}")]
    EmptyGroup { offset: usize },

    /// An alternation branch is empty, e.g. `a|` or `|a`.
    #[error("empty alternation branch at offset {offset}")]
    EmptyAlternation { offset: usize },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
