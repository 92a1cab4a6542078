//! Parser module for syntax tree construction.

/// Recursive-descent parser implementation.
pub mod core;

pub use self::core::Parser;
