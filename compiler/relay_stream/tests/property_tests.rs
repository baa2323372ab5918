//! Property-based tests for the token stream.
//!
//! Random well-formed raw streams are built from pieces whose logical token
//! and source text are known up front, then driven with random scripts of
//! pulls, peeks, push-backs and flushes. Checked after every step:
//! 1. Inverse law: the consumed tokens are always a prefix of the logical
//!    sequence, whatever was pushed back and re-pulled on the way.
//! 2. Listener mirroring: a registered recorder equals the consumed tokens.
//! 3. Read-text conservation: every source character is reported exactly
//!    once across flushes.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use relay_stream::{Token, TokenKind, TokenRecorder, TokenStream};

// -- Raw stream generation --

#[derive(Clone, Debug)]
enum Piece {
    Word(String),
    Space,
    Newline,
    Operator,
    Symbol(String),
    QuotedSymbol(String),
    Str(Vec<String>),
    /// A string interpolating a quoted symbol: `"#{:"name"}"`.
    InterpolatedSymbol(String),
    Doc(Vec<String>),
    /// A symbol-begin with nothing fusable after it.
    BareColon,
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        3 => "[a-z]{1,6}".prop_map(Piece::Word),
        2 => Just(Piece::Space),
        1 => Just(Piece::Newline),
        1 => Just(Piece::Operator),
        1 => "[a-z]{1,6}".prop_map(Piece::Symbol),
        1 => "[a-z ]{0,6}".prop_map(Piece::QuotedSymbol),
        1 => prop::collection::vec("[a-z ]{1,4}", 0..4).prop_map(Piece::Str),
        1 => "[a-z ]{0,6}".prop_map(Piece::InterpolatedSymbol),
        1 => prop::collection::vec("[a-z ]{0,8}", 0..3).prop_map(Piece::Doc),
        1 => Just(Piece::BareColon),
    ]
}

/// A raw stream with the logical tokens it must produce and the source
/// text each one covers.
struct Fixture {
    raw: Vec<Token>,
    logical: Vec<Token>,
    fragments: Vec<String>,
}

impl Fixture {
    fn build(pieces: &[Piece]) -> Self {
        let mut fixture = Fixture {
            raw: Vec::new(),
            logical: Vec::new(),
            fragments: Vec::new(),
        };
        for piece in pieces {
            let first_raw = fixture.raw.len();
            let token = fixture.lay(piece);
            let fragment: String = fixture.raw[first_raw..]
                .iter()
                .map(|t| t.text.as_str())
                .collect();
            fixture.logical.push(token);
            fixture.fragments.push(fragment);
        }
        fixture
    }

    /// Append the raw tokens for `piece` and return its logical token.
    fn lay(&mut self, piece: &Piece) -> Token {
        match piece {
            Piece::Word(word) => self.push(TokenKind::Identifier, word),
            Piece::Space => self.push(TokenKind::Whitespace, " "),
            Piece::Newline => self.push(TokenKind::Newline, "\n"),
            Piece::Operator => self.push(TokenKind::Operator, "+"),
            Piece::Symbol(name) => {
                let begin = self.push(TokenKind::SymbolBegin, ":");
                self.push(TokenKind::Identifier, name);
                fused(TokenKind::Symbol, format!(":{name}"), &begin)
            }
            Piece::QuotedSymbol(name) => {
                let begin = self.push(TokenKind::SymbolBegin, ":\"");
                self.push(TokenKind::StringFragment, name);
                self.push(TokenKind::StringEnd, "\"");
                fused(TokenKind::Symbol, format!(":{name}"), &begin)
            }
            Piece::Str(parts) => {
                let begin = self.push(TokenKind::StringBegin, "\"");
                for part in parts {
                    self.push(TokenKind::StringFragment, part);
                }
                self.push(TokenKind::StringEnd, "\"");
                fused(TokenKind::String, format!("\"{}\"", parts.concat()), &begin)
            }
            Piece::InterpolatedSymbol(name) => {
                let begin = self.push(TokenKind::StringBegin, "\"");
                self.push(TokenKind::Other("embexpr_beg"), "#{");
                self.push(TokenKind::SymbolBegin, ":\"");
                self.push(TokenKind::StringFragment, name);
                self.push(TokenKind::StringEnd, "\"");
                self.push(TokenKind::Other("embexpr_end"), "}");
                self.push(TokenKind::StringEnd, "\"");
                fused(TokenKind::String, format!("\"#{{:\"{name}\"}}\""), &begin)
            }
            Piece::Doc(lines) => {
                let begin = self.push(TokenKind::EmbDocBegin, "=begin\n");
                let mut text = String::new();
                for line in lines {
                    let line = format!("{line}\n");
                    self.push(TokenKind::EmbDocFragment, &line);
                    text.push_str(&line);
                }
                self.push(TokenKind::EmbDocEnd, "=end\n");
                fused(TokenKind::EmbDoc, text, &begin)
            }
            Piece::BareColon => {
                self.push(TokenKind::SymbolBegin, ":");
                self.push(TokenKind::Whitespace, " ")
            }
        }
    }

    fn push(&mut self, kind: TokenKind, text: &str) -> Token {
        let char_no = u32::try_from(self.raw.len()).unwrap();
        let token = Token::new(kind, text, 1, char_no);
        self.raw.push(token.clone());
        token
    }

    fn source(&self) -> String {
        self.fragments.concat()
    }
}

fn fused(kind: TokenKind, text: String, begin: &Token) -> Token {
    Token::new(kind, text, begin.line_no, begin.char_no)
}

// -- Scripts --

#[derive(Clone, Copy, Debug)]
enum Op {
    Pull,
    Peek,
    PushBack,
    Flush,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Pull),
        1 => Just(Op::Peek),
        3 => Just(Op::PushBack),
        1 => Just(Op::Flush),
    ]
}

proptest! {
    #[test]
    fn draining_yields_the_logical_sequence(
        pieces in prop::collection::vec(piece_strategy(), 0..24),
    ) {
        relay_stream::init_tracing();
        let fixture = Fixture::build(&pieces);
        let mut stream = TokenStream::new(fixture.raw.clone());
        let recorder = TokenRecorder::shared();
        stream.register_listener(recorder.clone());

        let mut pulled = Vec::new();
        while let Some(token) = stream.pull_next().unwrap() {
            pulled.push(token);
        }

        prop_assert_eq!(&pulled, &fixture.logical);
        prop_assert_eq!(stream.peek_read_text(), fixture.source());
        let recorded = recorder.borrow();
        prop_assert_eq!(recorded.tokens(), pulled.as_slice());
        prop_assert!(stream.is_exhausted());
    }

    #[test]
    fn scripts_preserve_order_text_and_listeners(
        pieces in prop::collection::vec(piece_strategy(), 0..16),
        script in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let fixture = Fixture::build(&pieces);
        let mut stream = TokenStream::new(fixture.raw.clone());
        let recorder = TokenRecorder::shared();
        stream.register_listener(recorder.clone());

        let mut flushed = String::new();
        let mut any_flush = false;
        for op in script {
            match op {
                Op::Pull => {
                    stream.pull_next().unwrap();
                }
                Op::Peek => {
                    let before = stream.consumed().len();
                    stream.peek().unwrap();
                    prop_assert_eq!(stream.consumed().len(), before);
                }
                Op::PushBack => {
                    if let Some(last) = stream.consumed().last().cloned() {
                        stream.push_back(last);
                    }
                }
                Op::Flush => {
                    flushed.push_str(&stream.flush_read_text());
                    any_flush = true;
                }
            }

            let n = stream.consumed().len();
            prop_assert_eq!(stream.consumed(), &fixture.logical[..n]);
            {
                let recorded = recorder.borrow();
                prop_assert_eq!(recorded.tokens(), stream.consumed());
            }
            if !any_flush {
                prop_assert_eq!(stream.peek_read_text(), fixture.fragments[..n].concat());
            }
        }

        while stream.pull_next().unwrap().is_some() {}
        prop_assert_eq!(stream.consumed(), fixture.logical.as_slice());
        flushed.push_str(&stream.flush_read_text());
        prop_assert_eq!(flushed, fixture.source());
    }
}
