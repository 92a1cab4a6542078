//! Lossless markup parsing and attribute reordering for attorder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer**: splits HTML-like text into typed tokens without losing
//!   a single character, including whitespace runs and unknown characters
//! - **Parser**: rebuilds a flat syntax tree of text, opening tags, closing
//!   tags, comments and `<!...>` declarations
//! - **Reordering**: puts each opening tag's attributes into the order given
//!   by a list of regular expressions
//!
//! Attributes may use the wrappers of component templating dialects:
//! `[prop]`, `(event)`, `[(model)]`, `#ref`, `@directive` and `*structural`.
//!
//! # Not Implemented
//!
//! - HTML5 tree construction (implied tags, void elements, DOCTYPE handling)
//! - Validation or escaping of attribute values
//!
//! # Example
//!
//! ```
//! use attorder_markup::{reorder_attributes, OrderSettings};
//!
//! let settings = OrderSettings::new(["id", "class"]).unwrap();
//! let output = reorder_attributes(r#"<a href="/" class="x" id="y">"#, &settings).unwrap();
//! assert_eq!(output, r#"<a id="y" class="x" href="/">"#);
//! ```

use std::io::Read;

/// Error types.
pub mod error;
/// Attribute ordering.
pub mod order;
/// Parser building the syntax tree.
pub mod parser;
/// Tokenizer for converting input into tokens.
pub mod tokenizer;
/// Syntax tree and rendering.
pub mod tree;

pub use error::{Error, Result};
pub use order::OrderSettings;
pub use parser::Parser;
pub use tokenizer::{Position, Token, TokenKind, Tokenizer};
pub use tree::{Attribute, AttributeKind, Node, OpeningTag, SyntaxTree, print_tree};

/// Parse `input` without rendering it.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input is not well-formed enough to parse.
pub fn parse(input: &str, settings: &OrderSettings) -> Result<SyntaxTree> {
    Parser::new(Tokenizer::new(input), settings).parse_document()
}

/// Reorder the attributes of every opening tag in `input`.
///
/// Everything outside attribute lists is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input is not well-formed enough to parse.
pub fn reorder_attributes(input: &str, settings: &OrderSettings) -> Result<String> {
    Ok(parse(input, settings)?.to_string())
}

/// Read a whole document from `reader` and reorder its attributes.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Syntax`] if the input
/// is not well-formed enough to parse.
pub fn reorder_reader<R: Read>(reader: R, settings: &OrderSettings) -> Result<String> {
    let tokenizer = Tokenizer::from_reader(reader)?;
    let tree = Parser::new(tokenizer, settings).parse_document()?;
    Ok(tree.to_string())
}
