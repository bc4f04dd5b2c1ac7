use alloc::{string::String, vec::Vec};

use crate::{Lexer, TokenKind};

mod scenarios;

/// Flattens a lexed token list into `(kind, value)` pairs for assertions.
fn summarize(lx: &Lexer<'_>) -> Vec<(TokenKind, String)> {
    lx.tokens()
        .iter()
        .map(|t| (t.kind, String::from_utf8_lossy(&t.value).into_owned()))
        .collect()
}
