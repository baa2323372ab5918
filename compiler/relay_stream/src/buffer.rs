//! Pull/push-back buffer over a raw token source.
//!
//! Tokens come from one of two places: the re-injection queue (tokens the
//! consumer pushed back, already logical) or the raw source at
//! `scanner_point`. The re-injection queue always drains first, so pushing
//! back `t1` then `t0` re-emits `t0, t1`.

use std::collections::VecDeque;

use relay_ir::{RawTokenSource, Token, TokenKind};

use crate::ledger::ReadLedger;

/// Where a pulled token came from.
#[derive(Debug)]
pub(crate) enum Pulled {
    /// Fresh from the raw source; may still need fusing.
    Scanned(Token),
    /// Re-emitted after a push-back; already a logical token.
    Reinjected(Token),
}

#[derive(Debug)]
pub(crate) struct TokenBuffer {
    source: RawTokenSource,
    /// Index of the next raw token. Only moves forward.
    scanner_point: usize,
    /// Pushed-back tokens, front = next to re-emit.
    reinjected: VecDeque<Token>,
    ledger: ReadLedger,
}

impl TokenBuffer {
    pub(crate) fn new(source: RawTokenSource) -> Self {
        TokenBuffer {
            source,
            scanner_point: 0,
            reinjected: VecDeque::new(),
            ledger: ReadLedger::new(),
        }
    }

    /// Pull the next token, or `None` at end of stream.
    ///
    /// An end-of-program marker ends the stream: the cursor parks on it and
    /// its text is never recorded.
    pub(crate) fn pull_next(&mut self) -> Option<Pulled> {
        if let Some(token) = self.reinjected.pop_front() {
            self.ledger.restore();
            return Some(Pulled::Reinjected(token));
        }

        let token = self.source.get(self.scanner_point)?;
        if token.kind == TokenKind::EndOfProgram {
            return None;
        }
        let token = token.clone();
        self.scanner_point += 1;
        self.ledger.record(token.text.clone());
        Some(Pulled::Scanned(token))
    }

    /// Pull straight from the source for the inside of a compound token.
    ///
    /// Only valid while no push-back is pending, which holds during fusion.
    pub(crate) fn pull_raw(&mut self) -> Option<Token> {
        debug_assert!(
            self.reinjected.is_empty(),
            "raw pull with pending push-back"
        );
        match self.pull_next()? {
            Pulled::Scanned(token) | Pulled::Reinjected(token) => Some(token),
        }
    }

    /// Return `token` to the front of the stream, taking its text off the ledger.
    pub(crate) fn push_back(&mut self, token: Token) {
        self.reinjected.push_front(token);
        self.ledger.retract();
    }

    pub(crate) fn ledger(&self) -> &ReadLedger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut ReadLedger {
        &mut self.ledger
    }

    pub(crate) fn pending(&self) -> usize {
        self.reinjected.len()
    }

    /// Whether nothing is left: no push-back pending and the source is spent
    /// or parked on an end-of-program marker.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.reinjected.is_empty()
            && self
                .source
                .get(self.scanner_point)
                .map_or(true, |token| token.kind == TokenKind::EndOfProgram)
    }

    /// Wipe all queues and rewind the cursor to the start of the source.
    pub(crate) fn reset(&mut self) {
        self.scanner_point = 0;
        self.reinjected.clear();
        self.ledger.clear();
    }

    #[cfg(test)]
    pub(crate) fn scanner_point(&self) -> usize {
        self.scanner_point
    }
}
