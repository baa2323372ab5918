//! Stream error types.
//!
//! End-of-stream is not an error: pulls report it as `Ok(None)`. The only
//! recoverable failures are malformed compound tokens whose closing
//! delimiter never arrives. Once one is returned the stream holds partial
//! state and must be [`reset`](crate::TokenStream::reset) before reuse.

use relay_ir::Token;

/// A malformed-input condition found while fusing a compound token.
///
/// Positions are those of the opening token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StreamError {
    /// A string literal's closing delimiter never appeared.
    #[error("unterminated string literal starting at {line_no}:{char_no}")]
    UnterminatedString { line_no: u32, char_no: u32 },

    /// An embedded documentation block had no `=end` line.
    #[error("unterminated embedded document starting at {line_no}:{char_no}")]
    UnterminatedEmbDoc { line_no: u32, char_no: u32 },
}

impl StreamError {
    pub(crate) fn unterminated_string(begin: &Token) -> Self {
        StreamError::UnterminatedString {
            line_no: begin.line_no,
            char_no: begin.char_no,
        }
    }

    pub(crate) fn unterminated_emb_doc(begin: &Token) -> Self {
        StreamError::UnterminatedEmbDoc {
            line_no: begin.line_no,
            char_no: begin.char_no,
        }
    }

    /// Line and column of the opening token.
    pub fn position(&self) -> (u32, u32) {
        match *self {
            StreamError::UnterminatedString { line_no, char_no }
            | StreamError::UnterminatedEmbDoc { line_no, char_no } => (line_no, char_no),
        }
    }
}
