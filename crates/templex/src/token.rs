use alloc::{borrow::Cow, vec::Vec};

use bstr::BStr;

/// The closed set of token categories the scanner can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal text, including stray `<` and `{` bytes resolved as text.
    Text,
    /// `<` opening a start tag.
    TagOpenOpenDelim,
    /// A tag name in either a start or an end tag.
    TagName,
    /// `>` closing a start tag.
    TagOpenCloseDelim,
    /// `</` opening an end tag.
    TagCloseOpenDelim,
    /// `>` closing an end tag.
    TagCloseCloseDelim,
    /// An attribute name inside a start tag.
    AttrName,
    /// An attribute value; quoted values cover the inner content only.
    AttrValue,
    /// `<!--`.
    HtmlCommentStart,
    /// `-->`.
    HtmlCommentEnd,
    /// The inner content of a `{{ ... }}` template expression.
    Expression,
    /// The inner content of a `{{# ... }}` block opener.
    BlockOpen,
    /// The inner content of a `{{/ ... }}` block closer.
    BlockClose,
}

/// A classified, positioned slice of the input.
///
/// `value` borrows from the input buffer in the common case; only TEXT
/// tokens merged by [`merge_text_tokens`] carry an owned concatenation.
/// Either way the value is independent of further cursor movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The token's category.
    pub kind: TokenKind,
    /// The bytes the token covers.
    pub value: Cow<'src, BStr>,
    /// Byte offset of the token's first byte.
    pub pos: usize,
    /// 0-based line of the token's first byte.
    pub line: usize,
    /// 0-based column of the token's first byte.
    pub column: usize,
}

/// Coalesces adjacent TEXT tokens into one token per contiguous text run.
///
/// The grammar's fallback paths emit single-byte TEXT tokens (a stray `<`,
/// a lone `{`), so a raw token list can contain TEXT/TEXT adjacencies that
/// are artifacts of recovery rather than structure. The merged token takes
/// the position of the first token in the run. Single pass, and idempotent:
/// a merged list has no adjacent TEXT tokens left to merge.
#[must_use]
pub fn merge_text_tokens(tokens: Vec<Token<'_>>) -> Vec<Token<'_>> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut run: Option<Token<'_>> = None;
    for token in tokens {
        if token.kind == TokenKind::Text {
            match run.as_mut() {
                Some(pending) => pending.value.to_mut().extend_from_slice(&token.value),
                None => run = Some(token),
            }
        } else {
            if let Some(pending) = run.take() {
                merged.push(pending);
            }
            merged.push(token);
        }
    }
    if let Some(pending) = run {
        merged.push(pending);
    }
    merged
}
