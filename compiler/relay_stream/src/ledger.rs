//! Read-text ledger.
//!
//! Holds one source-text fragment per logical token emitted since the last
//! flush, plus a shadow queue of fragments taken out by push-back. The shadow
//! queue runs parallel to the buffer's re-injection queue: front = fragment
//! of the next token to be re-emitted.
//!
//! A push-back of a token emitted before the last flush finds no fragment to
//! take; the shadow slot records `None` so that the slots stay aligned and
//! re-emitting that token adds no text.

use std::collections::VecDeque;

#[derive(Debug, Default)]
pub(crate) struct ReadLedger {
    read: Vec<String>,
    shadow: VecDeque<Option<String>>,
}

impl ReadLedger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record the text of a freshly scanned raw token.
    #[inline]
    pub(crate) fn record(&mut self, text: String) {
        self.read.push(text);
    }

    /// Move the newest fragment to the front of the shadow queue.
    pub(crate) fn retract(&mut self) {
        let fragment = self.read.pop();
        self.shadow.push_front(fragment);
    }

    /// Move the front shadow slot back onto the ledger.
    pub(crate) fn restore(&mut self) {
        debug_assert!(
            !self.shadow.is_empty(),
            "re-injected token without a shadow slot"
        );
        if let Some(Some(fragment)) = self.shadow.pop_front() {
            self.read.push(fragment);
        }
    }

    /// Collapse the newest `count` fragments into one.
    ///
    /// Used when several raw tokens fold into a single logical token, so a
    /// later push-back of that token takes all of its text with it.
    pub(crate) fn merge_last(&mut self, count: usize) {
        if count < 2 {
            return;
        }
        let start = self.read.len().saturating_sub(count);
        let merged: String = self.read.drain(start..).collect();
        self.read.push(merged);
    }

    /// Drop the newest fragment.
    pub(crate) fn discard_last(&mut self) {
        self.read.pop();
    }

    /// Concatenate and clear the fragments. The shadow queue is untouched.
    pub(crate) fn flush(&mut self) -> String {
        let text = self.read.concat();
        self.read.clear();
        text
    }

    pub(crate) fn peek(&self) -> String {
        self.read.concat()
    }

    pub(crate) fn clear(&mut self) {
        self.read.clear();
        self.shadow.clear();
    }

    #[cfg(test)]
    pub(crate) fn fragments(&self) -> &[String] {
        &self.read
    }

    #[cfg(test)]
    pub(crate) fn shadow_len(&self) -> usize {
        self.shadow.len()
    }
}
