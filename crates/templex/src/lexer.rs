//! The grammar-agnostic scan engine.
//!
//! [`Lexer`] is a cursor over one immutable byte buffer with the primitives
//! a hand-written tokenizer needs: single-byte advance and peek, one-step
//! backtracking, greedy runs, multi-byte lookahead, token emission with
//! source positions, and a latched error record. The grammar itself lives
//! behind the [`State`] trait and is driven by [`Lexer::run`].
//!
//! Position tracking is lazy: `line`/`column` are only recomputed over the
//! consumed span when a token is emitted or skipped, never mid-span. The
//! cost of the newline scan is therefore paid once per token, not once per
//! byte.
//!
//! Backtracking is bounded by design: `step_back` undoes exactly the last
//! `next_byte`, and calling it without a pending read is a bug in the
//! grammar, not malformed input — it panics instead of latching an error.

use alloc::{borrow::Cow, string::String, vec::Vec};

use bstr::BStr;

use crate::{
    charset::ByteSet,
    error::LexError,
    token::{Token, TokenKind},
};

/// A byte-membership test: either a single byte or a [`ByteSet`].
pub trait ByteClass {
    /// Whether `byte` belongs to the class.
    fn contains(&self, byte: u8) -> bool;
}

impl ByteClass for u8 {
    #[inline]
    fn contains(&self, byte: u8) -> bool {
        *self == byte
    }
}

impl ByteClass for ByteSet {
    #[inline]
    fn contains(&self, byte: u8) -> bool {
        ByteSet::contains(self, byte)
    }
}

/// One grammar state: consumes bytes through the engine's primitives and
/// returns the next state, or `None` to stop the scan.
///
/// Grammars are closed enums dispatched through a single `match` in their
/// `step`, which keeps the state graph statically enumerable.
pub trait State<'src>: Sized {
    /// Runs this state against the engine and returns its successor.
    fn step(self, lx: &mut Lexer<'src>) -> Option<Self>;
}

/// The scan engine: a cursor over a byte buffer plus the tokens and the
/// error it has produced so far.
///
/// An instance is created once per input, consumed by exactly one
/// [`Lexer::run`], and then inspected through [`Lexer::tokens`] and
/// [`Lexer::error`].
#[derive(Debug)]
pub struct Lexer<'src> {
    input: &'src [u8],
    /// Index of the next unread byte.
    pos: usize,
    /// Index where the pending token's byte range begins.
    start: usize,
    line: usize,
    column: usize,
    /// Width of the most recent read: `Some(1)` after a real byte,
    /// `Some(0)` after reading EOF, `None` when no read is outstanding.
    last_read: Option<usize>,
    pub(crate) tokens: Vec<Token<'src>>,
    error: Option<LexError>,
}

impl<'src> Lexer<'src> {
    /// Creates an engine over `input`, encoded to bytes once up front.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Creates an engine over a raw byte buffer.
    #[must_use]
    pub fn from_bytes(input: &'src [u8]) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            line: 0,
            column: 0,
            last_read: None,
            tokens: Vec::new(),
            error: None,
        }
    }

    /// Drives the grammar from `initial` until a state returns `None` or an
    /// error is latched, then returns the engine for result inspection.
    #[must_use]
    pub fn run<S: State<'src>>(mut self, initial: S) -> Self {
        let mut state = Some(initial);
        while let Some(current) = state {
            if self.error.is_some() {
                break;
            }
            state = current.step(&mut self);
        }
        self
    }

    /// The tokens emitted so far, in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// The latched error, if the scan failed.
    #[must_use]
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Consumes the engine, returning the token list and the latched error.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token<'src>>, Option<LexError>) {
        (self.tokens, self.error)
    }

    /// Returns the next byte and advances, or `None` at end of input.
    pub fn next_byte(&mut self) -> Option<u8> {
        match self.input.get(self.pos) {
            Some(&byte) => {
                self.pos += 1;
                self.last_read = Some(1);
                Some(byte)
            }
            None => {
                self.last_read = Some(0);
                None
            }
        }
    }

    /// Undoes exactly the last [`Self::next_byte`].
    ///
    /// # Panics
    ///
    /// Panics if no read is outstanding — more than one `step_back` per
    /// read, or a `step_back` after `emit`/`skip`, is a grammar bug.
    pub fn step_back(&mut self) {
        let Some(width) = self.last_read.take() else {
            panic!("lexer: step_back must follow exactly one next_byte");
        };
        self.pos -= width;
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&mut self) -> Option<u8> {
        let byte = self.next_byte();
        self.step_back();
        byte
    }

    /// The most recently consumed byte, or `None` at the start of input.
    #[must_use]
    pub fn prev_byte(&self) -> Option<u8> {
        self.pos.checked_sub(1).and_then(|i| self.input.get(i)).copied()
    }

    /// Consumes one byte if it belongs to `class`; reports whether it did.
    pub fn accept_next(&mut self, class: impl ByteClass) -> bool {
        match self.next_byte() {
            Some(byte) if class.contains(byte) => true,
            _ => {
                self.step_back();
                false
            }
        }
    }

    /// Consumes one byte only if it does *not* belong to `class`.
    pub fn accept_next_unless(&mut self, class: impl ByteClass) -> bool {
        match self.next_byte() {
            Some(byte) if !class.contains(byte) => true,
            _ => {
                self.step_back();
                false
            }
        }
    }

    /// Greedily consumes bytes belonging to `class`, stopping at EOF or at
    /// the first non-member without consuming it. Reports whether at least
    /// one byte was consumed.
    pub fn accept_while(&mut self, class: impl ByteClass) -> bool {
        let from = self.pos;
        loop {
            match self.next_byte() {
                Some(byte) if class.contains(byte) => {}
                _ => {
                    self.step_back();
                    break;
                }
            }
        }
        self.pos > from
    }

    /// Greedily consumes bytes until one belonging to `class` is found,
    /// leaving the match unconsumed. Stops at EOF. Reports whether at least
    /// one byte was consumed.
    pub fn accept_until(&mut self, class: impl ByteClass) -> bool {
        let from = self.pos;
        loop {
            match self.next_byte() {
                Some(byte) if !class.contains(byte) => {}
                _ => {
                    self.step_back();
                    break;
                }
            }
        }
        self.pos > from
    }

    /// Whether the unconsumed input begins with `prefix`. Pure lookahead.
    #[must_use]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.input[self.pos..].starts_with(prefix)
    }

    /// Unconditionally discards the next `n` bytes (or up to EOF).
    pub fn consume(&mut self, n: usize) {
        for _ in 0..n {
            self.next_byte();
        }
    }

    /// Whether there is unemitted content between `start` and the cursor.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    /// Whether the cursor has reached the end of the input.
    #[must_use]
    pub fn at_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Appends a token of `kind` covering the pending byte range, then
    /// advances the pending start past it.
    pub fn emit(&mut self, kind: TokenKind) {
        let value = Cow::Borrowed(BStr::new(&self.input[self.start..self.pos]));
        self.tokens.push(Token {
            kind,
            value,
            pos: self.start,
            line: self.line,
            column: self.column,
        });
        self.advance();
    }

    /// Discards the pending byte range without emitting a token, after
    /// first advancing the cursor by `extra` bytes (used to swallow a
    /// delimiter that carries no token of its own).
    ///
    /// # Panics
    ///
    /// Panics if `extra` would move the cursor past the end of the input;
    /// callers are expected to have verified the bytes exist.
    pub fn skip(&mut self, extra: usize) {
        assert!(
            self.pos + extra <= self.input.len(),
            "lexer: skip past end of input"
        );
        self.pos += extra;
        self.advance();
    }

    /// Latches an error positioned at the start of the pending value. The
    /// first error wins; later calls are no-ops.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let (pos, line, column) = (self.start, self.line, self.column);
        self.set_error_at(message, pos, line, column);
    }

    /// Latches an error at an explicit position. The first error wins.
    pub fn set_error_at(
        &mut self,
        message: impl Into<String>,
        pos: usize,
        line: usize,
        column: usize,
    ) {
        if self.error.is_none() {
            self.error = Some(LexError {
                message: message.into(),
                pos,
                line,
                column,
            });
        }
    }

    /// Recomputes `line`/`column` over the consumed span and resets the
    /// pending start to the cursor.
    fn advance(&mut self) {
        let mut line = self.line;
        let mut column = self.column;
        for &byte in &self.input[self.start..self.pos] {
            if byte == b'\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        self.line = line;
        self.column = column;
        self.start = self.pos;
        self.last_read = None;
    }
}
