//! The HTML-with-templates grammar, expressed as states over the engine.
//!
//! Each state consumes bytes through the engine's primitives, emits zero or
//! more tokens, and names its successor. The tie-break rules live here:
//! text always wins over delimiter interpretation when a delimiter has no
//! valid continuation — a stray `<` or a lone `{` is literal text, never an
//! error, and never stalls the scan.

use core::mem;

use crate::{
    charset,
    lexer::{Lexer, State},
    options::LexOptions,
    token::{TokenKind, merge_text_tokens},
};

/// The grammar's states. `Content` is the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlState {
    /// Text interleaved with tag, comment, and template openers.
    Content,
    /// After `<`, inside a start tag's name.
    TagOpen,
    /// After `</`, inside an end tag.
    TagClose,
    /// Inside a start tag, before an attribute name or the closing `>`.
    Attr,
    /// After `name=`, before the attribute's value.
    AttrValue,
    /// After `<!--`, inside a comment body.
    Comment,
    /// At a `{{`, inside a template expression.
    TemplateExpr,
}

/// Pairs the current [`HtmlState`] with the scan policies so the driver can
/// step it through the engine's [`State`] trait.
#[derive(Debug, Clone, Copy)]
struct HtmlGrammar {
    state: HtmlState,
    options: LexOptions,
}

impl<'src> State<'src> for HtmlGrammar {
    fn step(self, lx: &mut Lexer<'src>) -> Option<Self> {
        let next = match self.state {
            HtmlState::Content => content(lx, self.options),
            HtmlState::TagOpen => tag_open(lx),
            HtmlState::TagClose => tag_close(lx),
            HtmlState::Attr => attr(lx),
            HtmlState::AttrValue => attr_value(lx),
            HtmlState::Comment => comment(lx, self.options),
            HtmlState::TemplateExpr => template_expr(lx),
        };
        next.map(|state| Self { state, ..self })
    }
}

/// Tokenizes `input` with default [`LexOptions`].
#[must_use]
pub fn tokenize(input: &str) -> Lexer<'_> {
    tokenize_with(input, LexOptions::default())
}

/// Tokenizes `input` under the given policies.
///
/// Runs the grammar from [`HtmlState::Content`] and, on an error-free scan,
/// merges adjacent TEXT tokens so the observable stream has no artificial
/// TEXT/TEXT adjacency. The returned engine carries the token list and, on
/// failure, the latched error alongside the tokens emitted before it.
#[must_use]
pub fn tokenize_with(input: &str, options: LexOptions) -> Lexer<'_> {
    let mut lx = Lexer::new(input).run(HtmlGrammar {
        state: HtmlState::Content,
        options,
    });
    if lx.error().is_none() {
        lx.tokens = merge_text_tokens(mem::take(&mut lx.tokens));
    }
    lx
}

fn content(lx: &mut Lexer<'_>, options: LexOptions) -> Option<HtmlState> {
    if lx.accept_until(charset::TAG_OR_TEMPLATE_START) {
        lx.emit(TokenKind::Text);
    }
    if lx.accept_next(charset::LEFT_ANGLE) {
        if lx.starts_with(charset::HTML_COMMENT_OPEN) {
            lx.consume(charset::HTML_COMMENT_OPEN.len());
            lx.emit(TokenKind::HtmlCommentStart);
            return Some(HtmlState::Comment);
        }
        if lx.accept_next(charset::SLASH) {
            lx.emit(TokenKind::TagCloseOpenDelim);
            return Some(HtmlState::TagClose);
        }
        if lx.peek().is_some_and(|b| charset::ALPHA.contains(b)) {
            lx.emit(TokenKind::TagOpenOpenDelim);
            return Some(HtmlState::TagOpen);
        }
        // Not a tag start after all; the `<` is literal text.
        lx.emit(TokenKind::Text);
        return Some(HtmlState::Content);
    }
    if lx.starts_with(charset::TEMPLATE_OPEN) && !template_escaped(lx, options) {
        return Some(HtmlState::TemplateExpr);
    }
    if lx.at_eof() {
        return None;
    }
    // A lone `{`: consume it as text so the scan always makes progress.
    lx.next_byte();
    lx.emit(TokenKind::Text);
    Some(HtmlState::Content)
}

/// Whether the `{{` at the cursor is suppressed by a preceding backslash.
fn template_escaped(lx: &Lexer<'_>, options: LexOptions) -> bool {
    options.backslash_escapes_template && lx.prev_byte() == Some(charset::BACKSLASH)
}

fn tag_open(lx: &mut Lexer<'_>) -> Option<HtmlState> {
    lx.accept_next(charset::ALPHA);
    lx.accept_while(charset::IDENT);
    lx.emit(TokenKind::TagName);
    if lx.accept_next(charset::RIGHT_ANGLE) {
        lx.emit(TokenKind::TagOpenCloseDelim);
        return Some(HtmlState::Content);
    }
    if !lx.accept_while(charset::WHITESPACE) {
        lx.set_error("expected whitespace after tag name");
        return None;
    }
    // Discard the expected whitespace.
    lx.skip(0);
    Some(HtmlState::Attr)
}

fn attr(lx: &mut Lexer<'_>) -> Option<HtmlState> {
    if lx.accept_while(charset::WHITESPACE) {
        lx.skip(0);
    }
    if lx.accept_next(charset::RIGHT_ANGLE) {
        lx.emit(TokenKind::TagOpenCloseDelim);
        return Some(HtmlState::Content);
    }
    if lx.at_eof() {
        lx.set_error("expected > to close tag");
        return None;
    }
    lx.accept_until(charset::ATTR_NAME_END);
    if lx.has_pending() {
        lx.emit(TokenKind::AttrName);
    }
    if lx.accept_next(charset::RIGHT_ANGLE) {
        lx.emit(TokenKind::TagOpenCloseDelim);
        return Some(HtmlState::Content);
    }
    if lx.accept_next(charset::EQUALS) {
        // The `=` separates name and value but carries no token.
        lx.skip(0);
        return Some(HtmlState::AttrValue);
    }
    // Stopped at whitespace (or EOF, caught on re-entry).
    Some(HtmlState::Attr)
}

fn attr_value(lx: &mut Lexer<'_>) -> Option<HtmlState> {
    match lx.peek() {
        Some(quote @ (charset::DOUBLE_QUOTE | charset::SINGLE_QUOTE)) => {
            lx.skip(1);
            lx.accept_until(quote);
            if lx.at_eof() {
                lx.set_error("expected closing quote for attribute value");
                return None;
            }
            lx.emit(TokenKind::AttrValue);
            lx.skip(1);
        }
        Some(_) => {
            lx.accept_until(charset::ATTR_VALUE_END);
            lx.emit(TokenKind::AttrValue);
        }
        None => {
            lx.set_error("expected attribute value");
            return None;
        }
    }
    Some(HtmlState::Attr)
}

fn tag_close(lx: &mut Lexer<'_>) -> Option<HtmlState> {
    if lx.accept_while(charset::WHITESPACE) {
        lx.skip(0);
    }
    lx.accept_next(charset::ALPHA);
    lx.accept_while(charset::IDENT);
    if !lx.has_pending() {
        lx.set_error("expected tag name");
        return None;
    }
    lx.emit(TokenKind::TagName);
    if lx.accept_while(charset::WHITESPACE) {
        lx.skip(0);
    }
    if !lx.accept_next(charset::RIGHT_ANGLE) {
        lx.set_error("expected > to close tag");
        return None;
    }
    lx.emit(TokenKind::TagCloseCloseDelim);
    Some(HtmlState::Content)
}

fn comment(lx: &mut Lexer<'_>, options: LexOptions) -> Option<HtmlState> {
    lx.accept_until(charset::HYPHEN);
    if lx.starts_with(charset::HTML_COMMENT_CLOSE) {
        if lx.has_pending() {
            lx.emit(TokenKind::Text);
        }
        lx.consume(charset::HTML_COMMENT_CLOSE.len());
        lx.emit(TokenKind::HtmlCommentEnd);
        return Some(HtmlState::Content);
    }
    if lx.at_eof() {
        if options.error_on_unterminated_comment {
            lx.set_error("unterminated html comment");
        }
        return None;
    }
    // A `-` that does not open `-->` belongs to the comment body.
    lx.next_byte();
    Some(HtmlState::Comment)
}

fn template_expr(lx: &mut Lexer<'_>) -> Option<HtmlState> {
    lx.skip(charset::TEMPLATE_OPEN.len());
    let kind = if lx.accept_next(charset::HASH) {
        lx.skip(0);
        TokenKind::BlockOpen
    } else if lx.accept_next(charset::SLASH) {
        lx.skip(0);
        TokenKind::BlockClose
    } else {
        TokenKind::Expression
    };
    loop {
        lx.accept_until(charset::RIGHT_BRACE);
        if lx.starts_with(charset::TEMPLATE_CLOSE) {
            lx.emit(kind);
            lx.skip(charset::TEMPLATE_CLOSE.len());
            return Some(HtmlState::Content);
        }
        if lx.at_eof() {
            lx.set_error("expected }} to close template expression");
            return None;
        }
        // A lone `}` inside the expression body.
        lx.next_byte();
    }
}
