//! Byte-level character sets and literal prefixes used by the grammar.
//!
//! All tables are process-wide constants. The grammar scans raw bytes rather
//! than decoded code points, which is sound only while every stop byte is
//! ASCII: UTF-8 continuation bytes are always `>= 0x80`, so an ASCII
//! delimiter can never appear in the middle of a multi-byte sequence. The
//! `const` block at the bottom of this module enforces that invariant at
//! compile time.

/// An immutable membership set over byte values, backed by a 256-bit bitmap.
///
/// Sets are cheap to copy and test, and can be built in `const` context, so
/// every table in this module is a plain `const` with no lazy initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteSet([u64; 4]);

impl ByteSet {
    /// Builds a set containing every byte of `members`.
    #[must_use]
    pub const fn new(members: &[u8]) -> Self {
        let mut words = [0u64; 4];
        let mut i = 0;
        while i < members.len() {
            let b = members[i];
            words[(b >> 6) as usize] |= 1 << (b & 63);
            i += 1;
        }
        Self(words)
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }

    /// Whether `byte` is a member of the set.
    #[inline]
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        self.0[(byte >> 6) as usize] & (1 << (byte & 63)) != 0
    }

    /// Whether every member is an ASCII byte (`< 0x80`).
    const fn is_ascii_only(&self) -> bool {
        self.0[2] == 0 && self.0[3] == 0
    }
}

// Basic character sets.
pub const ALPHA: ByteSet =
    ByteSet::new(b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ");
pub const NUMERIC: ByteSet = ByteSet::new(b"0123456789");
pub const ALPHA_NUMERIC: ByteSet = ALPHA.union(NUMERIC);
pub const WHITESPACE: ByteSet = ByteSet::new(b" \n\t");

// Compound character sets.
pub const IDENT: ByteSet = ALPHA_NUMERIC.union(ByteSet::new(b"-"));
pub const TAG_OR_TEMPLATE_START: ByteSet = ByteSet::new(b"<{");
pub const ATTR_NAME_END: ByteSet = WHITESPACE.union(ByteSet::new(b">="));
pub const ATTR_VALUE_END: ByteSet = WHITESPACE.union(ByteSet::new(b">"));

// Delimiters.
pub const LEFT_ANGLE: u8 = b'<';
pub const RIGHT_ANGLE: u8 = b'>';
pub const RIGHT_BRACE: u8 = b'}';

// Special chars.
pub const BACKSLASH: u8 = b'\\';
pub const EQUALS: u8 = b'=';
pub const HASH: u8 = b'#';
pub const HYPHEN: u8 = b'-';
pub const SLASH: u8 = b'/';

// Quote marks.
pub const DOUBLE_QUOTE: u8 = b'"';
pub const SINGLE_QUOTE: u8 = b'\'';

// HTML comments. The open literal is tested after the `<` has already been
// consumed, hence the missing angle bracket.
pub const HTML_COMMENT_OPEN: &[u8] = b"!--";
pub const HTML_COMMENT_CLOSE: &[u8] = b"-->";

// Template delimiters.
pub const TEMPLATE_OPEN: &[u8] = b"{{";
pub const TEMPLATE_CLOSE: &[u8] = b"}}";

// Every set the grammar stops on must stay ASCII; see the module docs.
const _: () = {
    assert!(WHITESPACE.is_ascii_only());
    assert!(IDENT.is_ascii_only());
    assert!(TAG_OR_TEMPLATE_START.is_ascii_only());
    assert!(ATTR_NAME_END.is_ascii_only());
    assert!(ATTR_VALUE_END.is_ascii_only());
};
