//! Pre-materialized raw token sequence.

use std::ops::Index;

use super::Token;

/// The complete output of a raw scanner, materialized before streaming starts.
///
/// Read-only once handed to the stream: the stream only indexes into it.
/// Fused kinds never appear here; debug builds assert this on insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTokenSource {
    tokens: Vec<Token>,
}

impl RawTokenSource {
    /// Create an empty source.
    #[inline]
    pub fn new() -> Self {
        RawTokenSource { tokens: Vec::new() }
    }

    /// Append a raw token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        debug_assert!(
            !token.kind.is_fused(),
            "fused kind {:?} cannot come from a raw scanner",
            token.kind
        );
        self.tokens.push(token);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for RawTokenSource {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl From<Vec<Token>> for RawTokenSource {
    fn from(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.iter().all(|t| !t.kind.is_fused()),
            "fused kinds cannot come from a raw scanner"
        );
        RawTokenSource { tokens }
    }
}

impl FromIterator<Token> for RawTokenSource {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut source = RawTokenSource::new();
        for token in iter {
            source.push(token);
        }
        source
    }
}

impl<'a> IntoIterator for &'a RawTokenSource {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
