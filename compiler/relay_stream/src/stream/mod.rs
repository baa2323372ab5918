//! The consumer-facing token stream.
//!
//! Every operation here is built on two primitives: [`TokenStream::pull_next`]
//! and [`TokenStream::push_back`]. A push-back must undo the most recent
//! pull that has not been undone yet; pulls and push-backs nest like a stack.

mod assemble;

use std::ops::{Deref, DerefMut};

use relay_ir::{RawTokenSource, Token, TokenKind};
use tracing::trace;

use crate::buffer::{Pulled, TokenBuffer};
use crate::config::StreamConfig;
use crate::error::StreamError;
use crate::kind_set::KindSet;
use crate::listener::{ListenerId, ListenerRegistry, SharedListener};

/// Where an emitted token came from, for trace output.
#[derive(Clone, Copy, Debug)]
enum Origin {
    Scanner,
    Pushback,
}

impl Origin {
    fn as_str(self) -> &'static str {
        match self {
            Origin::Scanner => "scanner",
            Origin::Pushback => "pushback",
        }
    }
}

/// Stateful pull interface over a raw token source.
///
/// Owns the buffer, the read-text ledger and the listener set; the methods
/// below are the only way to mutate them. Single-threaded: listeners are
/// notified inline, in registration order, before the call returns.
#[derive(Debug)]
pub struct TokenStream {
    buffer: TokenBuffer,
    listeners: ListenerRegistry,
    /// Logical tokens emitted and not retracted, oldest first.
    outstanding: Vec<Token>,
    config: StreamConfig,
}

impl TokenStream {
    pub fn new(source: impl Into<RawTokenSource>) -> Self {
        Self::with_config(source, StreamConfig::default())
    }

    pub fn with_config(source: impl Into<RawTokenSource>, config: StreamConfig) -> Self {
        TokenStream {
            buffer: TokenBuffer::new(source.into()),
            listeners: ListenerRegistry::new(),
            outstanding: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> StreamConfig {
        self.config
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pull / push-back
    // ─────────────────────────────────────────────────────────────────────

    /// Consume the next logical token.
    ///
    /// Returns `Ok(None)` at end of stream (including at an end-of-program
    /// marker). Compound tokens are fused before this returns; an
    /// unterminated string or embedded doc is an error.
    pub fn pull_next(&mut self) -> Result<Option<Token>, StreamError> {
        match self.buffer.pull_next() {
            None => Ok(None),
            Some(Pulled::Reinjected(token)) => Ok(Some(self.emit(token, Origin::Pushback))),
            Some(Pulled::Scanned(token)) => self.assemble(token),
        }
    }

    /// Return `token` to the front of the stream.
    ///
    /// The next pull yields `token` again and its text reappears in the
    /// read ledger. Listeners are told to retract their newest token.
    ///
    /// # Panics
    ///
    /// Panics if `token` is not the most recently pulled token still
    /// outstanding. Push-back is an undo, not an insert.
    pub fn push_back(&mut self, token: Token) {
        match self.outstanding.pop() {
            Some(last) if last == token => {}
            Some(last) => panic!(
                "push_back({token:?}) does not undo the most recent pull ({last:?})"
            ),
            None => panic!("push_back({token:?}) with no pulled token outstanding"),
        }
        if self.config.trace_enabled {
            trace!(
                kind = %token.kind,
                text = ?token.text,
                line = token.line_no,
                column = token.char_no,
                "push back token"
            );
        }
        self.buffer.push_back(token);
        self.listeners.notify_retract();
    }

    /// Look at the next logical token without consuming it.
    pub fn peek(&mut self) -> Result<Option<Token>, StreamError> {
        let token = self.pull_next()?;
        if let Some(token) = &token {
            self.push_back(token.clone());
        }
        Ok(token)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Scanning helpers
    // ─────────────────────────────────────────────────────────────────────

    /// Consume whitespace, and newlines too if `include_newlines`.
    ///
    /// Returns the skipped tokens in order. The first token that does not
    /// match is pushed back.
    pub fn skip_whitespace(&mut self, include_newlines: bool) -> Result<Vec<Token>, StreamError> {
        let mut skipped = Vec::new();
        while let Some(token) = self.pull_next()? {
            if token.is_whitespace() || (include_newlines && token.is_newline()) {
                skipped.push(token);
            } else {
                self.push_back(token);
                break;
            }
        }
        Ok(skipped)
    }

    /// Consume tokens up to the first one whose kind is in `stop`.
    ///
    /// The stop token is pushed back and left for the next pull. If the
    /// stream ends first, the run reports [`RunEnd::EndOfStream`].
    pub fn read_until(&mut self, stop: &KindSet) -> Result<TokenRun, StreamError> {
        let mut tokens = Vec::new();
        loop {
            let Some(token) = self.pull_next()? else {
                return Ok(TokenRun {
                    tokens,
                    end: RunEnd::EndOfStream,
                });
            };
            if stop.contains(token.kind) {
                let kind = token.kind;
                self.push_back(token);
                return Ok(TokenRun {
                    tokens,
                    end: RunEnd::Stopped(kind),
                });
            }
            tokens.push(token);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read text
    // ─────────────────────────────────────────────────────────────────────

    /// Source text consumed since the last flush, then start a new span.
    ///
    /// Push-back of tokens pulled before the flush still works; re-pulling
    /// them adds no text.
    pub fn flush_read_text(&mut self) -> String {
        self.buffer.ledger_mut().flush()
    }

    /// Source text consumed since the last flush.
    pub fn peek_read_text(&self) -> String {
        self.buffer.ledger().peek()
    }

    // ─────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────

    /// Rewind to the start of the source, dropping pending push-backs and
    /// read text. Registered listeners stay registered.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.outstanding.clear();
    }

    /// Logical tokens pulled and not pushed back since the last reset.
    pub fn consumed(&self) -> &[Token] {
        &self.outstanding
    }

    /// Number of pushed-back tokens waiting to be re-emitted.
    pub fn pending_pushbacks(&self) -> usize {
        self.buffer.pending()
    }

    /// Whether the next pull is certain to return `None`.
    pub fn is_exhausted(&self) -> bool {
        self.buffer.is_exhausted()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Listeners
    // ─────────────────────────────────────────────────────────────────────

    pub fn register_listener(&mut self, listener: SharedListener) -> ListenerId {
        self.listeners.register(listener)
    }

    /// Unregister a listener. Unknown ids are ignored.
    pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register `listener` for as long as the returned guard lives.
    ///
    /// The guard derefs to the stream; dropping it (normally, through `?`,
    /// or while unwinding) unregisters the listener.
    pub fn listen(&mut self, listener: SharedListener) -> ListenerScope<'_> {
        let id = self.register_listener(listener);
        ListenerScope { stream: self, id }
    }

    /// Run `f` with `listener` registered, unregistering it on every exit path.
    pub fn with_listener<R>(
        &mut self,
        listener: SharedListener,
        f: impl FnOnce(&mut TokenStream) -> R,
    ) -> R {
        let mut scope = self.listen(listener);
        f(&mut *scope)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Emission
    // ─────────────────────────────────────────────────────────────────────

    /// Hand a logical token to the consumer: record it and notify listeners.
    fn emit(&mut self, token: Token, origin: Origin) -> Token {
        if self.config.trace_enabled {
            trace!(
                origin = origin.as_str(),
                kind = %token.kind,
                text = ?token.text,
                line = token.line_no,
                column = token.char_no,
                "emit token"
            );
        }
        self.listeners.notify_emit(&token);
        self.outstanding.push(token.clone());
        token
    }

    /// Withdraw the newest emitted token from listeners without re-queueing it.
    fn retract_last(&mut self) {
        self.outstanding.pop();
        self.listeners.notify_retract();
    }
}

/// Tokens collected by [`TokenStream::read_until`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRun {
    pub tokens: Vec<Token>,
    pub end: RunEnd,
}

impl TokenRun {
    /// Whether the stream ran out before a stop kind was seen.
    pub fn hit_end(&self) -> bool {
        self.end == RunEnd::EndOfStream
    }
}

/// How a [`TokenRun`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunEnd {
    /// A token of this kind was met and pushed back.
    Stopped(TokenKind),
    /// No more tokens.
    EndOfStream,
}

/// Scoped listener registration. See [`TokenStream::listen`].
pub struct ListenerScope<'a> {
    stream: &'a mut TokenStream,
    id: ListenerId,
}

impl ListenerScope<'_> {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Deref for ListenerScope<'_> {
    type Target = TokenStream;

    fn deref(&self) -> &TokenStream {
        self.stream
    }
}

impl DerefMut for ListenerScope<'_> {
    fn deref_mut(&mut self) -> &mut TokenStream {
        self.stream
    }
}

impl Drop for ListenerScope<'_> {
    fn drop(&mut self) {
        self.stream.unregister_listener(self.id);
    }
}
