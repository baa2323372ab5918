//! Token listeners.
//!
//! A listener mirrors the logical token stream: it is told about every token
//! the stream emits and every push-back that retracts one. Notification is
//! synchronous and follows registration order.

use std::cell::RefCell;
use std::rc::Rc;

use relay_ir::Token;

/// Observer of the logical token stream.
pub trait TokenListener {
    /// A token was emitted to the consumer.
    fn on_token_emitted(&mut self, token: &Token);

    /// The most recently emitted token was retracted.
    fn on_token_retracted(&mut self);
}

/// Shared handle to a listener. The consumer keeps a clone to read the
/// listener's state once the stream is done with it.
pub type SharedListener = Rc<RefCell<dyn TokenListener>>;

/// Identity of a registered listener, used to unregister it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Ordered set of listeners.
#[derive(Default)]
pub struct ListenerRegistry {
    entries: Vec<(ListenerId, SharedListener)>,
    next_id: u32,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener at the end of the notification order.
    ///
    /// Registering the same handle twice yields two entries, each notified.
    pub fn register(&mut self, listener: SharedListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener. Unknown ids are ignored; returns whether one was removed.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify_emit(&self, token: &Token) {
        for (_, listener) in &self.entries {
            listener.borrow_mut().on_token_emitted(token);
        }
    }

    pub fn notify_retract(&self) {
        for (_, listener) in &self.entries {
            listener.borrow_mut().on_token_retracted();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id))
            .finish()
    }
}

/// Listener that keeps the tokens seen so far.
///
/// Emission appends, retraction drops the newest token, so `tokens()` is
/// always the sequence the consumer has read and not pushed back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRecorder {
    tokens: Vec<Token>,
}

impl TokenRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh recorder wrapped for registration.
    pub fn shared() -> Rc<RefCell<TokenRecorder>> {
        Rc::new(RefCell::new(TokenRecorder::new()))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Concatenated text of the recorded tokens.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Hand over the recorded tokens and start empty.
    pub fn take_tokens(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl TokenListener for TokenRecorder {
    fn on_token_emitted(&mut self, token: &Token) {
        self.tokens.push(token.clone());
    }

    fn on_token_retracted(&mut self) {
        self.tokens.pop();
    }
}
