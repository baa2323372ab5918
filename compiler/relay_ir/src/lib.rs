//! Token data model shared by raw scanners and the relay token stream.
//!
//! A scanner produces a [`RawTokenSource`] up front; the stream layer in
//! `relay_stream` consumes it and synthesizes the fused kinds
//! ([`TokenKind::Symbol`], [`TokenKind::String`], [`TokenKind::EmbDoc`]).

mod token;

pub use token::{RawTokenSource, Token, TokenKind};
