//! Errors produced while tokenizing or parsing a single formula string.
//!
//! These are deliberately independent of any file/line context — a caller
//! embedding a formula in a larger document (see [`crate::io`]) attaches that
//! context itself when it wraps a [`FormulaError`] into a [`crate::error::TableauError`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("unexpected character '{found}' at position {pos}")]
    UnexpectedChar { pos: usize, found: char },

    #[error("expected '>' after '-' at position {pos}")]
    ExpectedArrow { pos: usize },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("expected an operator ('|', '&', or '->') at position {pos}, found {found}")]
    ExpectedOperator { pos: usize, found: String },

    #[error("expected ')' at position {pos}, found {found}")]
    ExpectedCloseParen { pos: usize, found: String },

    #[error("unexpected token {found} at position {pos}")]
    UnexpectedToken { pos: usize, found: String },

    #[error("trailing input after formula, starting at position {pos}: {found}")]
    TrailingInput { pos: usize, found: String },

    #[error("empty formula")]
    Empty,
}
