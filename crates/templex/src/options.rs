/// Configuration options for the HTML/template tokenizer.
///
/// These resolve the two policy points the grammar leaves open: what to do
/// with an HTML comment that is still open at end of input, and whether a
/// backslash suppresses template interpretation of `{{`.
///
/// # Examples
///
/// ```rust
/// use templex::{LexOptions, tokenize_with};
///
/// let options = LexOptions {
///     error_on_unterminated_comment: true,
///     ..Default::default()
/// };
/// let lexed = tokenize_with("<!-- never closed", options);
/// assert!(lexed.error().is_some());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexOptions {
    /// Whether an HTML comment left open at end of input latches an error.
    ///
    /// When `false`, a scan that reaches EOF inside a comment ends silently
    /// with no error and no token for the partial body. When `true`, it
    /// latches `"unterminated html comment"` positioned at the start of the
    /// unclosed body.
    ///
    /// # Default
    ///
    /// `false`
    pub error_on_unterminated_comment: bool,

    /// Whether a backslash escapes the `{{` template opener.
    ///
    /// When `true`, a `{{` whose immediately preceding consumed byte is a
    /// backslash is treated as literal text rather than the start of a
    /// template expression. The backslash itself stays in the surrounding
    /// text run untouched.
    ///
    /// # Default
    ///
    /// `false`
    pub backslash_escapes_template: bool,
}
