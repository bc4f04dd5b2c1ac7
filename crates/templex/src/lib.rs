//! A minimalist state-machine lexer framework, plus an HTML-with-embedded-
//! templates tokenizer built on top of it.
//!
//! The crate has two layers:
//!
//! - [`Lexer`] is a grammar-agnostic cursor over a byte buffer: advance,
//!   peek, one-step backtracking, token emission with source positions, a
//!   latched error record, and a [`Lexer::run`] driver that repeatedly steps
//!   a grammar [`State`] until it signals completion or failure.
//! - [`tokenize`] applies a concrete grammar to that engine: plain HTML tags,
//!   attributes, comments, and `{{ ... }}` template expressions.
//!
//! ```rust
//! use templex::{TokenKind, tokenize};
//!
//! let lexed = tokenize("<div>hi</div>");
//! assert!(lexed.error().is_none());
//! let kinds: Vec<TokenKind> = lexed.tokens().iter().map(|t| t.kind).collect();
//! assert_eq!(kinds[1], TokenKind::TagName);
//! ```
//!
//! Tokenization is a single-pass, synchronous transform over one immutable
//! input buffer. Independent [`Lexer`] instances share no mutable state, so
//! parallel scans of independent inputs need no synchronization.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod charset;
mod error;
mod grammar;
mod lexer;
mod options;
mod token;

#[cfg(test)]
mod tests;

pub use charset::ByteSet;
pub use error::LexError;
pub use grammar::{HtmlState, tokenize, tokenize_with};
pub use lexer::{ByteClass, Lexer, State};
pub use options::LexOptions;
pub use token::{Token, TokenKind, merge_text_tokens};
