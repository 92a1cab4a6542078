use std::io::Read;

use super::token::{Position, Token, TokenKind};
use crate::error::Result;

/// Lossless tokenizer for HTML-like markup.
///
/// The tokenizer is purely lexical. It keeps one character of lookahead past
/// the current one (two for `-->`), which is enough to recognise comment and
/// bang-tag markers without backtracking. Every input character ends up in
/// exactly one token's text.
pub struct Tokenizer {
    /// The input being tokenized
    input: Vec<char>,
    /// Index of the current character in `input`
    position: usize,
    /// Line and column of the current character
    location: Position,
}

impl Tokenizer {
    /// Create a new tokenizer over the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            location: Position::START,
        }
    }

    /// Create a tokenizer by reading `reader` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if reading fails or the input
    /// is not valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        let _ = reader.read_to_string(&mut input)?;
        Ok(Self::new(input))
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted this returns an end-of-stream token on
    /// every call.
    pub fn next_token(&mut self) -> Token {
        let start = self.location;

        let Some(c) = self.current() else {
            return Token::new(TokenKind::EndOfStream, "", start);
        };

        if c.is_whitespace() {
            return self.consume_run(TokenKind::Whitespace, start, char::is_whitespace);
        }

        let kind = match c {
            '<' if self.peek_at(1) == Some('!') => {
                if self.peek_at(2) == Some('-') && self.peek_at(3) == Some('-') {
                    return self.consume_fixed(TokenKind::CommentStart, 4, start);
                }
                return self.consume_fixed(TokenKind::BangTagStart, 2, start);
            }
            '-' if self.peek_at(1) == Some('-') && self.peek_at(2) == Some('>') => {
                return self.consume_fixed(TokenKind::CommentEnd, 3, start);
            }
            '<' => TokenKind::TagOpen,
            '>' => TokenKind::TagClose,
            '"' => TokenKind::DoubleQuote,
            '\'' => TokenKind::SingleQuote,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            '=' => TokenKind::Equals,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '/' => TokenKind::Slash,
            '!' => TokenKind::Bang,
            '-' => TokenKind::Minus,
            '#' => TokenKind::Hash,
            '@' => TokenKind::At,
            '*' => TokenKind::Star,
            c if c.is_alphabetic() => {
                return self.consume_run(TokenKind::Identifier, start, char::is_alphanumeric);
            }
            _ => TokenKind::Unknown,
        };

        self.consume_fixed(kind, 1, start)
    }

    /// Tokenize the rest of the input.
    ///
    /// The returned list always ends with exactly one end-of-stream token.
    #[must_use]
    pub fn tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_end = token.is_end();
            tokens.push(token);
            if is_end {
                return tokens;
            }
        }
    }

    fn current(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Advance past the current character, keeping line and column in step.
    fn consume(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += 1;
        if c == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
        Some(c)
    }

    fn consume_fixed(&mut self, kind: TokenKind, count: usize, start: Position) -> Token {
        let text: String = (0..count).map_while(|_| self.consume()).collect();
        Token::new(kind, text, start)
    }

    fn consume_run(&mut self, kind: TokenKind, start: Position, accept: fn(char) -> bool) -> Token {
        let mut text = String::new();
        while let Some(c) = self.current().filter(|&c| accept(c)) {
            text.push(c);
            let _ = self.consume();
        }
        Token::new(kind, text, start)
    }
}
