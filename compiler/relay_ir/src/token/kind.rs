//! Token kind tags.

use std::fmt;

/// The kind tag of a token.
///
/// Raw kinds come straight from the scanner. The three fused kinds
/// (`Symbol`, `String`, `EmbDoc`) are only ever synthesized by the stream
/// layer and never appear in a [`RawTokenSource`](crate::RawTokenSource).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Words ===
    /// Identifier (`foo`).
    Identifier,
    /// Reserved word (`def`, `class`).
    Keyword,
    /// Constant name (`Foo`).
    Constant,
    /// Operator (`+`, `<=>`, `[]`).
    Operator,

    // === Literals ===
    Integer,
    Float,

    // === Trivia ===
    /// Significant newline.
    Newline,
    /// Newline the scanner marked as insignificant (inside an expression).
    IgnoredNewline,
    /// Horizontal whitespace.
    Whitespace,
    /// Line comment.
    Comment,

    // === Symbol pieces ===
    /// `:` or `:"` opening a symbol literal.
    SymbolBegin,
    /// Fused symbol (`:foo`).
    Symbol,

    // === String pieces ===
    /// Opening delimiter of a string literal.
    StringBegin,
    /// Content fragment inside a string literal.
    StringFragment,
    /// Closing delimiter of a string literal.
    StringEnd,
    /// Fused string literal, delimiters included.
    String,

    // === Embedded documentation ===
    /// `=begin` line.
    EmbDocBegin,
    /// One line of embedded documentation.
    EmbDocFragment,
    /// `=end` line.
    EmbDocEnd,
    /// Fused embedded documentation block (inner lines only).
    EmbDoc,

    // === Control ===
    /// End-of-program marker (`__END__`). Never observed by consumers.
    EndOfProgram,

    /// Any other raw kind, tagged with the scanner's own kind name.
    Other(&'static str),
}

impl TokenKind {
    /// Whether this is a newline kind (significant or ignored).
    #[inline]
    pub fn is_newline(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::IgnoredNewline)
    }

    /// Whether this is horizontal whitespace.
    #[inline]
    pub fn is_whitespace(self) -> bool {
        self == TokenKind::Whitespace
    }

    /// Whether this kind is synthesized by fusion and must not come from a scanner.
    #[inline]
    pub fn is_fused(self) -> bool {
        matches!(
            self,
            TokenKind::Symbol | TokenKind::String | TokenKind::EmbDoc
        )
    }


    /// Human-readable name for diagnostics and trace output.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Constant => "constant",
            TokenKind::Operator => "operator",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Newline => "newline",
            TokenKind::IgnoredNewline => "ignored newline",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::SymbolBegin => "symbol begin",
            TokenKind::Symbol => "symbol",
            TokenKind::StringBegin => "string begin",
            TokenKind::StringFragment => "string fragment",
            TokenKind::StringEnd => "string end",
            TokenKind::String => "string",
            TokenKind::EmbDocBegin => "embedded doc begin",
            TokenKind::EmbDocFragment => "embedded doc fragment",
            TokenKind::EmbDocEnd => "embedded doc end",
            TokenKind::EmbDoc => "embedded doc",
            TokenKind::EndOfProgram => "end of program",
            TokenKind::Other(name) => name,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
