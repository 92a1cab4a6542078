use std::mem;

use crate::error::{Error, Result};
use crate::order::OrderSettings;
use crate::tokenizer::{Position, Token, TokenKind, Tokenizer};
use crate::tree::{Attribute, AttributeKind, Node, OpeningTag, SyntaxTree};

/// Recursive-descent parser producing a lossless [`SyntaxTree`].
///
/// The parser looks at the current token and one token of lookahead. Each
/// opening tag's attributes are reordered with the given settings as soon as
/// the tag is complete.
pub struct Parser<'s> {
    /// Source of tokens.
    tokenizer: Tokenizer,
    /// The token being looked at.
    current: Token,
    /// The token after `current`.
    peek: Token,
    /// Attribute order applied to every opening tag.
    settings: &'s OrderSettings,
}

impl<'s> Parser<'s> {
    /// Create a parser, priming the current and lookahead tokens.
    #[must_use]
    pub fn new(mut tokenizer: Tokenizer, settings: &'s OrderSettings) -> Self {
        let current = tokenizer.next_token();
        let peek = tokenizer.next_token();
        Self {
            tokenizer,
            current,
            peek,
            settings,
        }
    }

    /// Parse the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] at the first token that does not fit the
    /// grammar, including running out of input inside a tag, comment or
    /// quoted value. There is no recovery.
    pub fn parse_document(mut self) -> Result<SyntaxTree> {
        let mut nodes = Vec::new();
        while !self.current.is_end() {
            nodes.push(self.parse_node()?);
        }
        Ok(SyntaxTree::new(nodes))
    }

    fn parse_node(&mut self) -> Result<Node> {
        match self.current.kind {
            TokenKind::TagOpen if self.peek.kind == TokenKind::Slash => self.parse_closing_tag(),
            TokenKind::TagOpen => self.parse_opening_tag(),
            TokenKind::BangTagStart => self.parse_bang_tag(),
            TokenKind::CommentStart => self.parse_comment(),
            _ => Ok(self.parse_text()),
        }
    }

    fn parse_text(&mut self) -> Node {
        Node::Text(self.collect_until(|kind| {
            matches!(kind, TokenKind::TagOpen | TokenKind::CommentStart)
        }))
    }

    fn parse_opening_tag(&mut self) -> Result<Node> {
        self.expect("tag opening '<'", TokenKind::TagOpen)?;
        let _ = self.skip_whitespace();
        let mut tag = OpeningTag::new(self.parse_tag_name());

        loop {
            let whitespace = self.skip_whitespace();
            match self.current.kind {
                TokenKind::Slash => {
                    self.skip();
                    tag.finish(whitespace, true);
                    break;
                }
                TokenKind::TagClose | TokenKind::EndOfStream => {
                    tag.finish(whitespace, false);
                    break;
                }
                _ => {
                    let attribute = self.parse_attribute()?;
                    tag.push_attribute(whitespace, attribute);
                }
            }
        }

        self.expect("closing '>'", TokenKind::TagClose)?;
        self.settings.reorder(tag.attributes_mut());
        Ok(Node::OpeningTag(tag))
    }

    fn parse_attribute(&mut self) -> Result<Attribute> {
        let kind = match self.current.kind {
            TokenKind::LeftParen => AttributeKind::Paren,
            TokenKind::LeftBracket if self.peek.kind == TokenKind::LeftParen => {
                self.skip();
                AttributeKind::TwoWay
            }
            TokenKind::LeftBracket => AttributeKind::Bracket,
            TokenKind::Hash => AttributeKind::Hash,
            TokenKind::At => AttributeKind::At,
            TokenKind::Star => AttributeKind::Star,
            TokenKind::Identifier => AttributeKind::Plain,
            _ => return Err(self.unexpected("attribute identifier", TokenKind::Identifier)),
        };
        if kind != AttributeKind::Plain {
            self.skip();
        }

        let name = self.parse_attribute_name();

        if matches!(kind, AttributeKind::Paren | AttributeKind::TwoWay) {
            self.expect("attribute ')'", TokenKind::RightParen)?;
        }
        if matches!(kind, AttributeKind::Bracket | AttributeKind::TwoWay) {
            self.expect("attribute ']'", TokenKind::RightBracket)?;
        }

        if self.current.kind != TokenKind::Equals {
            return Ok(Attribute::new(name, kind, None));
        }
        self.skip();

        let value = if self.current.kind.is_quote() {
            self.parse_quoted_string()?
        } else {
            self.parse_unquoted_value()?
        };
        Ok(Attribute::new(name, kind, Some(value)))
    }

    /// Names like `ng-model`, `app.foo`, `xml:lang`, `@named` and `data-2`.
    fn parse_attribute_name(&mut self) -> String {
        let mut name = String::new();
        loop {
            let continues = match self.current.kind {
                TokenKind::Identifier
                | TokenKind::Minus
                | TokenKind::Colon
                | TokenKind::Dot
                | TokenKind::At => true,
                TokenKind::Unknown => self
                    .current
                    .text
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == '_'),
                _ => false,
            };
            if !continues {
                return name;
            }
            name.push_str(&self.advance().text);
        }
    }

    /// An unquoted value runs until whitespace, `>`, or a quote.
    fn parse_unquoted_value(&mut self) -> Result<String> {
        let mut value = self.collect_until(|kind| {
            matches!(
                kind,
                TokenKind::Whitespace | TokenKind::TagClose | TokenKind::CommentEnd
            ) || kind.is_quote()
        });
        if self.current.kind == TokenKind::CommentEnd {
            // `b=c-->` is the value `c--` followed by the tag's `>`
            value.push_str("--");
            let Position { line, column } = self.current.position;
            self.current = Token::new(
                TokenKind::TagClose,
                ">",
                Position {
                    line,
                    column: column + 2,
                },
            );
        }
        if value.is_empty() {
            return Err(self.unexpected("attribute value", TokenKind::DoubleQuote));
        }
        Ok(value)
    }

    /// A quoted value, returned with both quote characters.
    fn parse_quoted_string(&mut self) -> Result<String> {
        let delimiter = self.current.kind;
        if !delimiter.is_quote() {
            return Err(self.unexpected("string start ('\"' or ''')", TokenKind::DoubleQuote));
        }
        let quote = self.advance().text;

        let mut value = quote.clone();
        value.push_str(&self.collect_until(|kind| kind == delimiter));
        self.expect("string end", delimiter)?;
        value.push_str(&quote);
        Ok(value)
    }

    fn parse_closing_tag(&mut self) -> Result<Node> {
        self.expect("tag opening '<'", TokenKind::TagOpen)?;
        self.expect("closing tag '/'", TokenKind::Slash)?;
        let name = self.parse_tag_name();
        self.expect("closing tag '>'", TokenKind::TagClose)?;
        Ok(Node::ClosingTag(name))
    }

    fn parse_comment(&mut self) -> Result<Node> {
        self.expect("comment start '<!--'", TokenKind::CommentStart)?;
        let content = self.collect_until(|kind| kind == TokenKind::CommentEnd);
        self.expect("comment end '-->'", TokenKind::CommentEnd)?;
        Ok(Node::Comment(content))
    }

    fn parse_bang_tag(&mut self) -> Result<Node> {
        self.expect("bang tag '<!'", TokenKind::BangTagStart)?;
        let content = self.collect_until(|kind| kind == TokenKind::TagClose);
        self.expect("bang tag closing '>'", TokenKind::TagClose)?;
        Ok(Node::BangTag(content))
    }

    fn parse_tag_name(&mut self) -> String {
        let mut name = String::new();
        while matches!(self.current.kind, TokenKind::Identifier | TokenKind::Minus) {
            name.push_str(&self.advance().text);
        }
        name
    }

    /// Consume a whitespace token if there is one and return its text.
    fn skip_whitespace(&mut self) -> String {
        if self.current.kind == TokenKind::Whitespace {
            self.advance().text
        } else {
            String::new()
        }
    }

    /// Concatenate token text until `stop` accepts a kind or input ends.
    fn collect_until(&mut self, stop: impl Fn(TokenKind) -> bool) -> String {
        let mut text = String::new();
        while !self.current.is_end() && !stop(self.current.kind) {
            text.push_str(&self.advance().text);
        }
        text
    }

    /// Move to the next token, returning the one that was current.
    fn advance(&mut self) -> Token {
        let next = self.tokenizer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    fn skip(&mut self) {
        let _ = self.advance();
    }

    fn expect(&mut self, expected: &'static str, kind: TokenKind) -> Result<()> {
        if self.current.kind != kind {
            return Err(self.unexpected(expected, kind));
        }
        self.skip();
        Ok(())
    }

    fn unexpected(&self, expected: &'static str, expected_kind: TokenKind) -> Error {
        Error::Syntax {
            expected,
            expected_kind,
            found: self.current.clone(),
        }
    }
}
