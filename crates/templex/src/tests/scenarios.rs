#![allow(clippy::enum_glob_use)]

use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use rstest::rstest;

use super::summarize;
use crate::{
    LexError,
    TokenKind::{self, *},
    tokenize,
};

fn expect_tokens(input: &str, expected: &[(TokenKind, &str)]) {
    let lexed = tokenize(input);
    assert!(
        lexed.error().is_none(),
        "unexpected error for {input:?}: {:?}",
        lexed.error()
    );
    let expected: Vec<(TokenKind, String)> = expected
        .iter()
        .map(|&(kind, value)| (kind, value.to_string()))
        .collect();
    assert_eq!(summarize(&lexed), expected, "token mismatch for {input:?}");
}

#[rstest]
#[case::empty("", vec![])]
#[case::plain_text("hello", vec![(Text, "hello")])]
#[case::simple_element("<div>hi</div>", vec![
    (TagOpenOpenDelim, "<"),
    (TagName, "div"),
    (TagOpenCloseDelim, ">"),
    (Text, "hi"),
    (TagCloseOpenDelim, "</"),
    (TagName, "div"),
    (TagCloseCloseDelim, ">"),
])]
#[case::empty_element("<br>", vec![
    (TagOpenOpenDelim, "<"),
    (TagName, "br"),
    (TagOpenCloseDelim, ">"),
])]
#[case::lone_brace_is_text("a{b", vec![(Text, "a{b")])]
#[case::stray_angle_is_text("a < b", vec![(Text, "a < b")])]
#[case::angle_before_digit_is_text("1<2", vec![(Text, "1<2")])]
#[case::trailing_angle_is_text("a<", vec![(Text, "a<")])]
#[case::comment("<!-- note -->rest", vec![
    (HtmlCommentStart, "<!--"),
    (Text, " note "),
    (HtmlCommentEnd, "-->"),
    (Text, "rest"),
])]
#[case::empty_comment("<!---->", vec![
    (HtmlCommentStart, "<!--"),
    (HtmlCommentEnd, "-->"),
])]
#[case::comment_with_inner_hyphens("<!-- a - b -->x", vec![
    (HtmlCommentStart, "<!--"),
    (Text, " a - b "),
    (HtmlCommentEnd, "-->"),
    (Text, "x"),
])]
#[case::quoted_attribute(r#"<a href="x">link</a>"#, vec![
    (TagOpenOpenDelim, "<"),
    (TagName, "a"),
    (AttrName, "href"),
    (AttrValue, "x"),
    (TagOpenCloseDelim, ">"),
    (Text, "link"),
    (TagCloseOpenDelim, "</"),
    (TagName, "a"),
    (TagCloseCloseDelim, ">"),
])]
#[case::single_quoted_and_bare_attributes("<input id='i' disabled>", vec![
    (TagOpenOpenDelim, "<"),
    (TagName, "input"),
    (AttrName, "id"),
    (AttrValue, "i"),
    (AttrName, "disabled"),
    (TagOpenCloseDelim, ">"),
])]
#[case::unquoted_attribute_value("<a b=c>", vec![
    (TagOpenOpenDelim, "<"),
    (TagName, "a"),
    (AttrName, "b"),
    (AttrValue, "c"),
    (TagOpenCloseDelim, ">"),
])]
#[case::whitespace_in_end_tag("<i></ i >", vec![
    (TagOpenOpenDelim, "<"),
    (TagName, "i"),
    (TagOpenCloseDelim, ">"),
    (TagCloseOpenDelim, "</"),
    (TagName, "i"),
    (TagCloseCloseDelim, ">"),
])]
#[case::template_expression("x{{ name }}y", vec![
    (Text, "x"),
    (Expression, " name "),
    (Text, "y"),
])]
#[case::template_block("{{#if x}}hi{{/if}}", vec![
    (BlockOpen, "if x"),
    (Text, "hi"),
    (BlockClose, "if"),
])]
#[case::empty_template_expression("{{}}", vec![(Expression, "")])]
#[case::lone_close_brace_in_expression("{{a}b}}", vec![(Expression, "a}b")])]
#[case::hyphenated_tag_name("<my-widget>", vec![
    (TagOpenOpenDelim, "<"),
    (TagName, "my-widget"),
    (TagOpenCloseDelim, ">"),
])]
fn tokenizes(#[case] input: &str, #[case] expected: Vec<(TokenKind, &str)>) {
    expect_tokens(input, &expected);
}

#[rstest]
#[case::unterminated_open_tag("<foo", "expected whitespace after tag name", 4, 0, 4)]
#[case::missing_end_tag_name("</>", "expected tag name", 2, 0, 2)]
#[case::unterminated_end_tag("</div", "expected > to close tag", 5, 0, 5)]
#[case::unterminated_attribute_list("<a b", "expected > to close tag", 4, 0, 4)]
#[case::unterminated_quoted_value(
    r#"<a b="x"#,
    "expected closing quote for attribute value",
    6,
    0,
    6
)]
#[case::missing_attribute_value("<a b=", "expected attribute value", 5, 0, 5)]
#[case::unterminated_template("{{ x", "expected }} to close template expression", 2, 0, 2)]
fn latches_errors(
    #[case] input: &str,
    #[case] message: &str,
    #[case] pos: usize,
    #[case] line: usize,
    #[case] column: usize,
) {
    let lexed = tokenize(input);
    assert_eq!(
        lexed.error(),
        Some(&LexError {
            message: message.to_string(),
            pos,
            line,
            column,
        }),
        "error mismatch for {input:?}"
    );
}

#[test]
fn failed_scan_keeps_the_token_prefix() {
    let lexed = tokenize("<foo");
    assert!(lexed.error().is_some());
    assert_eq!(
        summarize(&lexed),
        vec![
            (TagOpenOpenDelim, "<".to_string()),
            (TagName, "foo".to_string()),
        ]
    );
}

#[test]
fn positions_span_lines() {
    let lexed = tokenize("a\n<b>");
    assert!(lexed.error().is_none());
    let tokens = lexed.tokens();
    assert_eq!((tokens[0].pos, tokens[0].line, tokens[0].column), (0, 0, 0));
    assert_eq!((tokens[1].pos, tokens[1].line, tokens[1].column), (2, 1, 0));
    assert_eq!((tokens[2].pos, tokens[2].line, tokens[2].column), (3, 1, 1));
    assert_eq!((tokens[3].pos, tokens[3].line, tokens[3].column), (4, 1, 2));
}

#[test]
fn merged_text_keeps_the_position_of_the_run_start() {
    let lexed = tokenize("a{b");
    let tokens = lexed.tokens();
    assert_eq!(tokens.len(), 1);
    assert_eq!((tokens[0].pos, tokens[0].line, tokens[0].column), (0, 0, 0));
}
