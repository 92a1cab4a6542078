use core::fmt;

use strum_macros::Display;

/// The kind of a [`Token`].
///
/// The tokenizer knows nothing about tags or attributes, so most kinds are a
/// single punctuation character. The multi-character kinds are whitespace
/// runs, identifiers and the three comment / declaration markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenKind {
    /// `<`
    TagOpen,
    /// `>`
    TagClose,
    /// A letter followed by any run of letters and digits.
    Identifier,
    /// `=`
    Equals,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `'`
    SingleQuote,
    /// `"`
    DoubleQuote,
    /// `/`
    Slash,
    /// `!` when not part of `<!`
    Bang,
    /// `-` when not part of `-->`
    Minus,
    /// `#`
    Hash,
    /// `@`
    At,
    /// `*`
    Star,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// A maximal run of whitespace, kept verbatim.
    Whitespace,
    /// `<!--`
    CommentStart,
    /// `-->`
    CommentEnd,
    /// `<!` not followed by `--`
    BangTagStart,
    /// Any other single character.
    Unknown,
    /// Input is exhausted. Emitted again on every further call.
    EndOfStream,
}

impl TokenKind {
    /// Whether tokens of this kind open or close a quoted attribute value.
    #[must_use]
    pub const fn is_quote(self) -> bool {
        matches!(self, Self::SingleQuote | Self::DoubleQuote)
    }
}

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self { line: 1, column: 1 };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A lexical token with the exact source text it was built from.
///
/// Concatenating the `text` of every token reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The source text of the token, verbatim.
    pub text: String,
    /// Where the token's first character sits in the source.
    pub position: Position,
}

impl Token {
    /// Create a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Whether this is the end-of-stream token.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfStream)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({} {:?})", self.position, self.kind, self.text)
    }
}
