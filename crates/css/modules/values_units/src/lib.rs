//! CSS Values and Units — scanner primitives and the typed value grammar.
//! Spec: <https://www.w3.org/TR/css-values-3/>
//!
//! The scanner here is shared by every grammar layer in the engine: the
//! value grammar in this crate, the selector grammar in `css_selectors`,
//! and the rule grammar in `css_syntax` all drive the same [`Cursor`].
//! The standalone number parsers are also used by the presentation
//! attribute layer, so numeric literals behave identically whether they
//! come from a stylesheet or an inline attribute.

#![forbid(unsafe_code)]

use core::fmt;

pub mod color;
pub mod lexer;
pub mod number;
pub mod values;

// Re-exports for ergonomic access from other crates.
pub use color::{Color, hex_color, named_color, rgb_component};
pub use lexer::Cursor;
pub use number::{Number, Unit, parse_dash_pattern, parse_number, parse_number_list};
pub use values::{CssElement, at_term_start, value_term};

/// Parse error for every grammar layer built on [`Cursor`].
///
/// `offset` is the byte offset of the offending input position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset where the parse failed.
    pub offset: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// The closed set of ways a parse can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input at this position did not match the expected grammar.
    UnexpectedToken,
    /// The input ended before the grammar was satisfied.
    UnexpectedEnd,
    /// A `\` escape did not denote a Unicode scalar value.
    InvalidEscape,
    /// A double-quoted string was never closed.
    UnterminatedString,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::UnexpectedEnd => "unexpected end of input",
            ParseErrorKind::InvalidEscape => "invalid escape sequence",
            ParseErrorKind::UnterminatedString => "unterminated string",
        };
        write!(formatter, "{what} at byte {}", self.offset)
    }
}

impl core::error::Error for ParseError {}
