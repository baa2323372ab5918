//! Token-stream mediation between a raw scanner and a parser.
//!
//! [`TokenStream`] re-exposes a pre-materialized [`RawTokenSource`] through
//! a stateful pull interface: one-token lookahead, LIFO push-back, scanning
//! up to a stop set, verbatim reconstruction of consumed text, and live
//! notification of [`TokenListener`]s.
//!
//! Before the consumer sees anything, three raw patterns are folded into a
//! single logical token:
//!
//! ```text
//! SymbolBegin Identifier                     → Symbol   ":foo"
//! StringBegin StringFragment* StringEnd      → String   "\"abcd\""
//! EmbDocBegin EmbDocFragment* EmbDocEnd      → EmbDoc   (inner lines only)
//! ```
//!
//! Listeners only ever observe logical tokens, so a listener mirroring the
//! stream always agrees with what the parser has consumed.

mod buffer;
mod config;
mod error;
mod kind_set;
mod ledger;
mod listener;
mod stream;
mod trace;

pub use config::StreamConfig;
pub use error::StreamError;
pub use kind_set::KindSet;
pub use listener::{
    ListenerId, ListenerRegistry, SharedListener, TokenListener, TokenRecorder,
};
pub use stream::{ListenerScope, RunEnd, TokenRun, TokenStream};
pub use trace::init_tracing;

pub use relay_ir::{RawTokenSource, Token, TokenKind};
