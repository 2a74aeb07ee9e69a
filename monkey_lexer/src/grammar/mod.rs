//! Grammar-level data for the Monkey language
//!
//! The lexer only needs the reserved-word table; everything structural
//! (precedence, productions) belongs to the downstream parser.

pub mod keywords;

pub use keywords::{lookup_ident, Keyword};
