//! Token definitions and stream handling
//!
//! Provides the token data model for Monkey lexical analysis and a
//! navigable stream abstraction over a completed scan.

pub mod token;
pub mod token_stream;

pub use token::{classify_symbol, classify_word, Token, TokenClass, TokenKind};
pub use token_stream::TokenStream;
