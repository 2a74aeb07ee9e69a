//! Reserved-word table for the Monkey language
//!
//! Process-wide immutable static data: a closed mapping from exact keyword
//! spellings to their token kinds. Every other identifier spelling is a
//! generic `Ident`. Read-only, no synchronization required.

use crate::tokens::TokenKind;
use serde::{Deserialize, Serialize};

/// Monkey reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Keyword {
    /// Get the exact string representation as it appears in Monkey source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        }
    }

    /// Parse keyword from string with exact case matching
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fn" => Some(Self::Function),
            "let" => Some(Self::Let),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "return" => Some(Self::Return),
            _ => None,
        }
    }

    /// Token kind this keyword lexes to
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Function => TokenKind::Function,
            Self::Let => TokenKind::Let,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::Return => TokenKind::Return,
        }
    }

    /// All reserved words, in declaration order
    pub const fn all() -> [Keyword; 7] {
        [
            Self::Function,
            Self::Let,
            Self::True,
            Self::False,
            Self::If,
            Self::Else,
            Self::Return,
        ]
    }
}

/// Classify an identifier spelling: reserved word kind, or generic `Ident`
pub fn lookup_ident(word: &str) -> TokenKind {
    match Keyword::from_str(word) {
        Some(keyword) => keyword.token_kind(),
        None => TokenKind::Ident,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for keyword in Keyword::all() {
            assert_eq!(Keyword::from_str(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn test_lookup_ident_keywords() {
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("let"), TokenKind::Let);
        assert_eq!(lookup_ident("true"), TokenKind::True);
        assert_eq!(lookup_ident("false"), TokenKind::False);
        assert_eq!(lookup_ident("if"), TokenKind::If);
        assert_eq!(lookup_ident("else"), TokenKind::Else);
        assert_eq!(lookup_ident("return"), TokenKind::Return);
    }

    #[test]
    fn test_lookup_ident_non_keywords() {
        assert_eq!(lookup_ident("five"), TokenKind::Ident);
        assert_eq!(lookup_ident("add"), TokenKind::Ident);
        // Case matters: only exact spellings are reserved
        assert_eq!(lookup_ident("Let"), TokenKind::Ident);
        assert_eq!(lookup_ident("FN"), TokenKind::Ident);
        // Prefixes and extensions of keywords are plain identifiers
        assert_eq!(lookup_ident("lets"), TokenKind::Ident);
        assert_eq!(lookup_ident("iff"), TokenKind::Ident);
        assert_eq!(lookup_ident("_"), TokenKind::Ident);
    }
}
