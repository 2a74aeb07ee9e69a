//! Token stream management for downstream consumers
//!
//! The scanner hands out one token per call; this wraps a fully-drained run
//! into a navigable stream with single-token lookahead for the parser.

use crate::tokens::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Navigable sequence of tokens ending in `Eof`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
    #[serde(skip)]
    position: usize,
}

impl TokenStream {
    /// Create a new token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    // === CORE NAVIGATION ===

    /// Get the current token
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Peek at the next token without advancing
    pub fn peek(&self) -> Option<&Token> {
        self.peek_ahead(1)
    }

    /// Peek ahead by n positions
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    /// Advance to the next token
    pub fn advance(&mut self) -> Option<&Token> {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Check if the cursor has moved past the last token
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Get the number of tokens (including the trailing `Eof`)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the stream holds no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Reset navigation to the first token
    pub fn reset(&mut self) {
        self.position = 0;
    }

    // === INSPECTION ===

    /// All tokens in scan order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Count of tokens with a given kind
    pub fn count_kind(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }

    /// Tokens the scanner flagged as unrecognized
    pub fn illegal_tokens(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.is_illegal()).collect()
    }

    /// Check if the stream contains any unrecognized bytes
    pub fn has_illegal_tokens(&self) -> bool {
        self.tokens.iter().any(Token::is_illegal)
    }

    /// Consume the stream, yielding the underlying tokens
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
