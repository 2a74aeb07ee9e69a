//! Token types for Monkey lexical analysis
//!
//! A token is an immutable, detached value: a closed kind enumeration plus
//! the exact source substring that produced it. Tokens hold no reference
//! back into the scanner, so they stay readable after the cursor moves on.

use crate::grammar::keywords::{self, Keyword};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of Monkey token kinds
///
/// The set and spellings must match exactly for downstream compatibility;
/// the parser dispatches on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === SPECIAL ===
    /// Unrecognized single byte; lexing never aborts, rejection is deferred
    Illegal,
    /// End of input, literal is always empty
    Eof,

    // === IDENTIFIERS AND LITERALS ===
    Ident,
    Int,

    // === OPERATORS ===
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // === DELIMITERS ===
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // === KEYWORDS ===
    Function, // fn
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Canonical downstream name for this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }

    /// Check if this kind is an operator symbol
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::Plus
                | Self::Minus
                | Self::Bang
                | Self::Asterisk
                | Self::Slash
                | Self::Lt
                | Self::Gt
                | Self::Eq
                | Self::NotEq
        )
    }

    /// Check if this kind is a structural delimiter
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            Self::Comma
                | Self::Semicolon
                | Self::LParen
                | Self::RParen
                | Self::LBrace
                | Self::RBrace
        )
    }

    /// Check if this kind is a reserved word
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::Let
                | Self::True
                | Self::False
                | Self::If
                | Self::Else
                | Self::Return
        )
    }

    /// Get the classification of this kind
    pub const fn token_class(self) -> TokenClass {
        match self {
            Self::Illegal | Self::Eof => TokenClass::Special,
            Self::Ident => TokenClass::Identifier,
            Self::Int => TokenClass::Literal,
            _ if self.is_operator() => TokenClass::Operator,
            _ if self.is_delimiter() => TokenClass::Delimiter,
            _ => TokenClass::Keyword,
        }
    }

    /// Token kind for a keyword
    pub const fn from_keyword(keyword: Keyword) -> Self {
        keyword.token_kind()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token classification for reporting and metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Operator,
    Delimiter,
    Keyword,
    Identifier,
    Literal,
    Special,
}

/// A classified lexical unit with its exact source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    /// Create a token from a kind and its source text
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Create a single-byte token
    pub fn from_byte(kind: TokenKind, byte: u8) -> Self {
        Self {
            kind,
            literal: (byte as char).to_string(),
        }
    }

    /// The end-of-input token; the only token with an empty literal
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    /// Get the classification of this token
    pub fn token_class(&self) -> TokenClass {
        self.kind.token_class()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            write!(f, "<EOF>")
        } else {
            write!(f, "{}({:?})", self.kind.as_str(), self.literal)
        }
    }
}

/// Classify an identifier spelling as keyword or generic identifier
pub fn classify_word(word: &str) -> TokenKind {
    keywords::lookup_ident(word)
}

/// Map a symbol sequence to its operator or delimiter kind
pub fn classify_symbol(symbol: &str) -> Option<TokenKind> {
    match symbol {
        "=" => Some(TokenKind::Assign),
        "+" => Some(TokenKind::Plus),
        "-" => Some(TokenKind::Minus),
        "!" => Some(TokenKind::Bang),
        "*" => Some(TokenKind::Asterisk),
        "/" => Some(TokenKind::Slash),
        "<" => Some(TokenKind::Lt),
        ">" => Some(TokenKind::Gt),
        "==" => Some(TokenKind::Eq),
        "!=" => Some(TokenKind::NotEq),
        "," => Some(TokenKind::Comma),
        ";" => Some(TokenKind::Semicolon),
        "(" => Some(TokenKind::LParen),
        ")" => Some(TokenKind::RParen),
        "{" => Some(TokenKind::LBrace),
        "}" => Some(TokenKind::RBrace),
        _ => None,
    }
}
