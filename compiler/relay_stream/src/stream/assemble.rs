//! Compound-token fusion.
//!
//! Folds raw token runs into one logical token before the consumer or any
//! listener sees them:
//!
//! ```text
//! SymbolBegin (Identifier | Operator | StringEnd)  → Symbol ":" + text
//! SymbolBegin StringFragment StringEnd             → Symbol ":" + fragment
//! StringBegin ... StringEnd                        → String, all text
//! EmbDocBegin EmbDocFragment* EmbDocEnd            → EmbDoc, fragments only
//! ```
//!
//! The fused token takes the position of its opening token. In the read
//! ledger the raw fragments collapse into one fragment holding their full
//! source text, so pushing the fused token back takes all of it along.

use relay_ir::{Token, TokenKind};
use tracing::trace;

use super::{Origin, TokenStream};
use crate::error::StreamError;

impl TokenStream {
    /// Turn a freshly scanned raw token into the next logical token.
    pub(super) fn assemble(&mut self, token: Token) -> Result<Option<Token>, StreamError> {
        match token.kind {
            TokenKind::SymbolBegin => self.fuse_symbol(&token),
            TokenKind::StringBegin => {
                let string = self.fuse_string(&token)?;
                Ok(Some(self.emit(string, Origin::Scanner)))
            }
            TokenKind::EmbDocBegin => {
                let doc = self.fuse_emb_doc(&token)?;
                Ok(Some(self.emit(doc, Origin::Scanner)))
            }
            _ => Ok(Some(self.emit(token, Origin::Scanner))),
        }
    }

    /// Fold a symbol-begin with the token after it.
    ///
    /// The lookahead is a full logical pull, so listeners have already seen
    /// it by the time fusion is decided; they get a compensating retraction
    /// before the symbol is emitted. When the lookahead cannot be a symbol
    /// name it stands as the result and the begin marker is dropped.
    fn fuse_symbol(&mut self, begin: &Token) -> Result<Option<Token>, StreamError> {
        let Some(name) = self.pull_next()? else {
            self.buffer.ledger_mut().discard_last();
            return Ok(None);
        };

        let mut fragments = 2;
        match name.kind {
            TokenKind::Identifier | TokenKind::Operator | TokenKind::StringEnd => {}
            TokenKind::StringFragment => {
                // Quoted symbol: the next raw token is its closing quote.
                if self.buffer.pull_raw().is_some() {
                    fragments += 1;
                }
            }
            _ => {
                self.buffer.ledger_mut().merge_last(2);
                return Ok(Some(name));
            }
        }

        self.retract_last();
        self.buffer.ledger_mut().merge_last(fragments);
        let symbol = Token::new(
            TokenKind::Symbol,
            format!(":{}", name.text),
            begin.line_no,
            begin.char_no,
        );
        self.trace_fusion(&symbol, fragments);
        Ok(Some(self.emit(symbol, Origin::Scanner)))
    }

    /// Concatenate a string literal through its matching end, delimiters included.
    ///
    /// Interpolated strings can contain nested literals; a nested begin/end
    /// pair does not close the outer string. Neither does the name of a
    /// symbol inside an interpolation, including the closing quote of a
    /// quoted symbol.
    fn fuse_string(&mut self, begin: &Token) -> Result<Token, StreamError> {
        let mut text = begin.text.clone();
        let mut fragments = 1;
        let mut depth = 1usize;
        let mut after_symbol_begin = false;
        while depth > 0 {
            let part = self.pull_string_part(begin, &mut text, &mut fragments)?;
            if std::mem::take(&mut after_symbol_begin) {
                match part {
                    TokenKind::Identifier | TokenKind::Operator | TokenKind::StringEnd => continue,
                    TokenKind::StringFragment => {
                        self.pull_string_part(begin, &mut text, &mut fragments)?;
                        continue;
                    }
                    _ => {}
                }
            }
            match part {
                TokenKind::StringBegin => depth += 1,
                TokenKind::StringEnd => depth -= 1,
                TokenKind::SymbolBegin => after_symbol_begin = true,
                _ => {}
            }
        }

        self.buffer.ledger_mut().merge_last(fragments);
        let string = Token::new(TokenKind::String, text, begin.line_no, begin.char_no);
        self.trace_fusion(&string, fragments);
        Ok(string)
    }

    /// Pull the next raw piece of a string literal onto `text`, returning its kind.
    fn pull_string_part(
        &mut self,
        begin: &Token,
        text: &mut String,
        fragments: &mut usize,
    ) -> Result<TokenKind, StreamError> {
        let part = self
            .buffer
            .pull_raw()
            .ok_or_else(|| StreamError::unterminated_string(begin))?;
        text.push_str(&part.text);
        *fragments += 1;
        Ok(part.kind)
    }

    /// Concatenate the lines of an embedded doc, without its begin/end lines.
    fn fuse_emb_doc(&mut self, begin: &Token) -> Result<Token, StreamError> {
        let mut text = String::new();
        let mut fragments = 1;
        loop {
            let part = self
                .buffer
                .pull_raw()
                .ok_or_else(|| StreamError::unterminated_emb_doc(begin))?;
            fragments += 1;
            if part.kind == TokenKind::EmbDocEnd {
                break;
            }
            text.push_str(&part.text);
        }

        self.buffer.ledger_mut().merge_last(fragments);
        let doc = Token::new(TokenKind::EmbDoc, text, begin.line_no, begin.char_no);
        self.trace_fusion(&doc, fragments);
        Ok(doc)
    }

    fn trace_fusion(&self, token: &Token, fragments: usize) {
        if self.config.trace_enabled {
            trace!(
                kind = %token.kind,
                text = ?token.text,
                fragments,
                "fused compound token"
            );
        }
    }
}
