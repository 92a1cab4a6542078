//! Markup tokenizer module.
//!
//! Turns raw text into a stream of typed tokens. Whitespace runs and unknown
//! characters are tokens too, so nothing in the source is lost.

/// Token types produced by the tokenizer.
pub mod token;
/// Tokenizer implementation.
pub mod core;

pub use self::core::Tokenizer;
pub use token::{Position, Token, TokenKind};
