use alloc::string::String;
use thiserror::Error;

/// The latched scan error.
///
/// A scan records at most one error; once set, the engine is terminal and
/// the driver stops stepping the grammar. The token prefix emitted before
/// the error is still available for best-effort diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {line}:{column}")]
pub struct LexError {
    /// Human-readable description of the grammar violation.
    pub message: String,
    /// Byte offset of the pending value when the error was raised.
    pub pos: usize,
    /// 0-based line of `pos`.
    pub line: usize,
    /// 0-based column of `pos`.
    pub column: usize,
}
