//! Integration tests for the markup tokenizer.

use attorder_markup::{Error, Position, Token, TokenKind, Tokenizer};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokens()
}

/// Helper to tokenize a string and return only the token kinds
fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tag_with_bound_attributes() {
    use TokenKind::{
        DoubleQuote, EndOfStream, Equals, Identifier, LeftBracket, LeftParen, RightBracket,
        RightParen, Slash, TagClose, TagOpen, Whitespace,
    };

    let input = r#"<a [href]="test" (click)="clickEvent()" class="test asd"></a>"#;
    assert_eq!(
        kinds(input),
        vec![
            TagOpen,
            Identifier,
            Whitespace,
            LeftBracket,
            Identifier,
            RightBracket,
            Equals,
            DoubleQuote,
            Identifier,
            DoubleQuote,
            Whitespace,
            LeftParen,
            Identifier,
            RightParen,
            Equals,
            DoubleQuote,
            Identifier,
            LeftParen,
            RightParen,
            DoubleQuote,
            Whitespace,
            Identifier,
            Equals,
            DoubleQuote,
            Identifier,
            Whitespace,
            Identifier,
            DoubleQuote,
            TagClose,
            TagOpen,
            Slash,
            Identifier,
            TagClose,
            EndOfStream,
        ]
    );
}

#[test]
fn test_comment() {
    use TokenKind::{
        CommentEnd, CommentStart, EndOfStream, Identifier, Slash, TagClose, TagOpen, Whitespace,
    };

    assert_eq!(
        kinds("<div></div>\n<!-- <div> -->"),
        vec![
            TagOpen,
            Identifier,
            TagClose,
            TagOpen,
            Slash,
            Identifier,
            TagClose,
            Whitespace,
            CommentStart,
            Whitespace,
            TagOpen,
            Identifier,
            TagClose,
            Whitespace,
            CommentEnd,
            EndOfStream,
        ]
    );
}

#[test]
fn test_comment_markers_text() {
    let tokens = tokenize("<!---->");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::CommentStart);
    assert_eq!(tokens[0].text, "<!--");
    assert_eq!(tokens[1].kind, TokenKind::CommentEnd);
    assert_eq!(tokens[1].text, "-->");
    assert!(tokens[2].is_end());
}

#[test]
fn test_bang_tag() {
    use TokenKind::{BangTagStart, EndOfStream, Identifier, TagClose, Whitespace};

    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens[0].text, "<!");
    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![BangTagStart, Identifier, Whitespace, Identifier, TagClose, EndOfStream]
    );
}

#[test]
fn test_bang_tag_with_single_dash() {
    assert_eq!(
        kinds("<!-x>"),
        vec![
            TokenKind::BangTagStart,
            TokenKind::Minus,
            TokenKind::Identifier,
            TokenKind::TagClose,
            TokenKind::EndOfStream,
        ]
    );
}

#[test]
fn test_minus_versus_comment_end() {
    use TokenKind::{CommentEnd, EndOfStream, Identifier, Minus, TagClose};

    assert_eq!(
        kinds("a--b-->"),
        vec![Identifier, Minus, Minus, Identifier, CommentEnd, EndOfStream]
    );
    // The first dash of "--->" is a plain minus
    assert_eq!(kinds("--->"), vec![Minus, CommentEnd, EndOfStream]);
    assert_eq!(kinds("->"), vec![Minus, TagClose, EndOfStream]);
}

#[test]
fn test_single_character_punctuation() {
    use TokenKind::{
        At, Bang, Colon, Dot, DoubleQuote, EndOfStream, Equals, Hash, LeftBracket, LeftParen, Minus,
        RightBracket, RightParen, SingleQuote, Slash, Star, TagClose, TagOpen,
    };

    assert_eq!(
        kinds("<>\"':.=()[]/!-#@*"),
        vec![
            TagOpen,
            TagClose,
            DoubleQuote,
            SingleQuote,
            Colon,
            Dot,
            Equals,
            LeftParen,
            RightParen,
            LeftBracket,
            RightBracket,
            Slash,
            Bang,
            Minus,
            Hash,
            At,
            Star,
            EndOfStream,
        ]
    );
}

#[test]
fn test_identifier_with_digits() {
    let tokens = tokenize("h1 2x x2");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "h1");
    // Digits cannot start an identifier
    assert_eq!(tokens[2].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].text, "2");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].text, "x");
    assert_eq!(tokens[5].text, "x2");
}

#[test]
fn test_unicode_identifier() {
    let tokens = tokenize("héllo 日本");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "héllo");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text, "日本");
}

#[test]
fn test_whitespace_run_is_one_token() {
    let tokens = tokenize(" \t\n \r\n x");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Whitespace);
    assert_eq!(tokens[0].text, " \t\n \r\n ");
}

#[test]
fn test_unknown_characters() {
    let tokens = tokenize("{}&;");
    assert_eq!(tokens.len(), 5);
    assert!(tokens[..4].iter().all(|token| token.kind == TokenKind::Unknown));
    assert_eq!(tokens[1].text, "}");
}

#[test]
fn test_end_of_stream_repeats() {
    let mut tokenizer = Tokenizer::new("x");
    assert_eq!(tokenizer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = tokenizer.next_token();
        assert!(token.is_end());
        assert!(token.text.is_empty());
    }
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_end());
    assert_eq!(tokens[0].position, Position::START);
}

#[test]
fn test_positions() {
    let tokens = tokenize("<a\n  b>");
    let positions: Vec<(usize, usize)> = tokens
        .iter()
        .map(|token| (token.position.line, token.position.column))
        .collect();
    assert_eq!(
        positions,
        vec![(1, 1), (1, 2), (1, 3), (2, 3), (2, 4), (2, 5)]
    );
}

#[test]
fn test_positions_are_ordered() {
    let tokens = tokenize("<p class=\"a\">\n  text <!-- c -->\n</p>");
    assert!(tokens.windows(2).all(|pair| pair[0].position <= pair[1].position));
}

#[test]
fn test_token_text_is_lossless() {
    let input = "<!DOCTYPE html>\n<div [x]=\"1\"\t(y)='2' #z @w *v [(m)]=n>é & ü --> <!-- -- -->\n</div>";
    let joined: String = tokenize(input).iter().map(|token| token.text.as_str()).collect();
    assert_eq!(joined, input);
}

#[test]
fn test_from_reader() {
    let tokenizer = Tokenizer::from_reader("<b>".as_bytes()).unwrap();
    let tokens = tokenizer.tokens();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].text, "b");
}

#[test]
fn test_from_reader_rejects_invalid_utf8() {
    let result = Tokenizer::from_reader(&[0x3c, 0xff, 0xfe][..]);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_token_display() {
    let token = Token::new(
        TokenKind::Identifier,
        "div",
        Position { line: 3, column: 7 },
    );
    assert_eq!(token.to_string(), "[3:7](identifier \"div\")");
    assert_eq!(TokenKind::CommentStart.to_string(), "comment-start");
}
