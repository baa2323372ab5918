//! Token types for raw scanners and the relay stream.

mod kind;
mod source;

pub use kind::TokenKind;
pub use source::RawTokenSource;

use std::fmt;

/// A token with its source text and position.
///
/// `line_no` is 1-based; `char_no` is the 0-based column of the first
/// character, as the scanner reports it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line_no: u32,
    pub char_no: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, line_no: u32, char_no: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line_no,
            char_no,
        }
    }

    /// Create a token at line 1, column 0 for tests and generated code.
    pub fn dummy(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, 1, 0)
    }

    /// Whether this token is a newline (significant or ignored).
    #[inline]
    pub fn is_newline(&self) -> bool {
        self.kind.is_newline()
    }

    /// Whether this token is horizontal whitespace.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}:{}",
            self.kind, self.text, self.line_no, self.char_no
        )
    }
}
