//! Small set of token kinds.

use smallvec::SmallVec;

use relay_ir::TokenKind;

/// Stop set for [`TokenStream::read_until`](crate::TokenStream::read_until).
///
/// Stop sets are a handful of kinds, so membership is a linear scan over an
/// inline buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindSet {
    kinds: SmallVec<[TokenKind; 4]>,
}

impl KindSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `kind`; duplicates are ignored.
    pub fn insert(&mut self, kind: TokenKind) {
        if !self.contains(kind) {
            self.kinds.push(kind);
        }
    }

    #[must_use]
    pub fn with(mut self, kind: TokenKind) -> Self {
        self.insert(kind);
        self
    }

    #[inline]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<TokenKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut set = KindSet::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl From<TokenKind> for KindSet {
    fn from(kind: TokenKind) -> Self {
        KindSet::new().with(kind)
    }
}

impl From<&[TokenKind]> for KindSet {
    fn from(kinds: &[TokenKind]) -> Self {
        kinds.iter().copied().collect()
    }
}

impl<const N: usize> From<[TokenKind; N]> for KindSet {
    fn from(kinds: [TokenKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicates_collapse() {
        let set = KindSet::from([TokenKind::Newline, TokenKind::Newline, TokenKind::Operator]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(TokenKind::Newline));
        assert!(set.contains(TokenKind::Operator));
        assert!(!set.contains(TokenKind::Identifier));
    }

    #[test]
    fn other_kinds_compare_by_name() {
        let set = KindSet::from(TokenKind::Other("on_rparen"));
        assert!(set.contains(TokenKind::Other("on_rparen")));
        assert!(!set.contains(TokenKind::Other("on_lparen")));
    }

    #[test]
    fn spills_past_inline_capacity() {
        let kinds = [
            TokenKind::Newline,
            TokenKind::IgnoredNewline,
            TokenKind::Comment,
            TokenKind::Operator,
            TokenKind::Keyword,
            TokenKind::Other("on_semicolon"),
        ];
        let set: KindSet = kinds.as_slice().into();
        assert_eq!(set.iter().collect::<Vec<_>>(), kinds.to_vec());
    }

    #[test]
    fn empty_set_matches_nothing() {
        let set = KindSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(TokenKind::Newline));
    }
}
