//! Single-pass byte scanner for Monkey source text
//!
//! The scanner walks the input exactly once with a two-index cursor and
//! emits one token per call. It never fails: bytes outside the language
//! become `Illegal` tokens and scanning continues, so rejection is the
//! parser's decision, not the lexer's.

use crate::grammar::keywords;
use crate::tokens::{Token, TokenKind};

/// Byte-oriented cursor over a single source buffer
///
/// `position` always indexes the byte held in `current`; `read_position`
/// is the next byte to consume. `current` is `None` exactly when the
/// cursor has run off the end of the input.
pub struct Scanner<'src> {
    input: &'src [u8],
    position: usize,
    read_position: usize,
    current: Option<u8>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner primed on the first byte of `input`
    pub fn new(input: &'src str) -> Self {
        let mut scanner = Self {
            input: input.as_bytes(),
            position: 0,
            read_position: 0,
            current: None,
        };
        scanner.read_char();
        scanner
    }

    /// Byte offset of the byte under the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    /// Produce the next token, consuming input as needed
    ///
    /// Once the input is exhausted this returns an `Eof` token on every
    /// call without touching the cursor.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let byte = match self.current {
            Some(byte) => byte,
            None => return Token::eof(),
        };

        let token = match byte {
            b'=' => {
                if self.peek_char() == Some(b'=') {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::from_byte(TokenKind::Assign, byte)
                }
            }
            b'!' => {
                if self.peek_char() == Some(b'=') {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::from_byte(TokenKind::Bang, byte)
                }
            }
            b'+' => Token::from_byte(TokenKind::Plus, byte),
            b'-' => Token::from_byte(TokenKind::Minus, byte),
            b'*' => Token::from_byte(TokenKind::Asterisk, byte),
            b'/' => Token::from_byte(TokenKind::Slash, byte),
            b'<' => Token::from_byte(TokenKind::Lt, byte),
            b'>' => Token::from_byte(TokenKind::Gt, byte),
            b',' => Token::from_byte(TokenKind::Comma, byte),
            b';' => Token::from_byte(TokenKind::Semicolon, byte),
            b'(' => Token::from_byte(TokenKind::LParen, byte),
            b')' => Token::from_byte(TokenKind::RParen, byte),
            b'{' => Token::from_byte(TokenKind::LBrace, byte),
            b'}' => Token::from_byte(TokenKind::RBrace, byte),
            _ if is_letter(byte) => {
                // read_identifier leaves the cursor past the word, so
                // return without the trailing read_char below
                let literal = self.read_identifier();
                return Token::new(keywords::lookup_ident(literal), literal);
            }
            _ if is_digit(byte) => {
                let literal = self.read_number();
                return Token::new(TokenKind::Int, literal);
            }
            _ => Token::from_byte(TokenKind::Illegal, byte),
        };

        self.read_char();
        token
    }

    /// Advance the cursor by one byte
    fn read_char(&mut self) {
        self.current = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Look at the next byte without moving the cursor
    fn peek_char(&self) -> Option<u8> {
        self.input.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// Consume a maximal run of letters and underscores
    fn read_identifier(&mut self) -> &'src str {
        let start = self.position;
        while self.current.is_some_and(is_letter) {
            self.read_char();
        }
        self.slice_from(start)
    }

    /// Consume a maximal run of ASCII digits
    fn read_number(&mut self) -> &'src str {
        let start = self.position;
        while self.current.is_some_and(is_digit) {
            self.read_char();
        }
        self.slice_from(start)
    }

    fn slice_from(&self, start: usize) -> &'src str {
        let end = self.position.min(self.input.len());
        // Runs are bounded by is_letter/is_digit, so the slice is ASCII
        std::str::from_utf8(&self.input[start..end]).unwrap_or("")
    }
}

/// Bytes that may appear in identifiers: ASCII letters and underscore
const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// ASCII decimal digits only
const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Iterator adapter over the non-`Eof` tokens of the input
impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut scanner = Scanner::new(input);
        let mut out = Vec::new();
        loop {
            let token = scanner.next_token();
            let done = token.is_eof();
            out.push(token.kind);
            if done {
                break;
            }
        }
        out
    }

    fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
        let mut scanner = Scanner::new(input);
        for (i, (kind, literal)) in expected.iter().enumerate() {
            let token = scanner.next_token();
            assert_eq!(token.kind, *kind, "token {} of {:?}", i, input);
            assert_eq!(token.literal, *literal, "token {} of {:?}", i, input);
        }
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn test_empty_input_yields_eof() {
        let mut scanner = Scanner::new("");
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn test_whitespace_only_yields_eof() {
        let mut scanner = Scanner::new("  \t\r\n  ");
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);
        for _ in 0..5 {
            let token = scanner.next_token();
            assert!(token.is_eof());
            assert!(token.literal.is_empty());
        }
    }

    #[test]
    fn test_single_char_tokens() {
        assert_tokens(
            "=+-!*/<>,;(){}",
            &[
                (TokenKind::Assign, "="),
                (TokenKind::Plus, "+"),
                (TokenKind::Minus, "-"),
                (TokenKind::Bang, "!"),
                (TokenKind::Asterisk, "*"),
                (TokenKind::Slash, "/"),
                (TokenKind::Lt, "<"),
                (TokenKind::Gt, ">"),
                (TokenKind::Comma, ","),
                (TokenKind::Semicolon, ";"),
                (TokenKind::LParen, "("),
                (TokenKind::RParen, ")"),
                (TokenKind::LBrace, "{"),
                (TokenKind::RBrace, "}"),
            ],
        );
    }

    #[test]
    fn test_two_char_operators() {
        assert_tokens(
            "== != = !",
            &[
                (TokenKind::Eq, "=="),
                (TokenKind::NotEq, "!="),
                (TokenKind::Assign, "="),
                (TokenKind::Bang, "!"),
            ],
        );
    }

    #[test]
    fn test_triple_equals_is_eq_then_assign() {
        assert_tokens(
            "===",
            &[(TokenKind::Eq, "=="), (TokenKind::Assign, "=")],
        );
    }

    #[test]
    fn test_bang_at_end_of_input() {
        assert_tokens("!", &[(TokenKind::Bang, "!")]);
        assert_tokens("5!", &[(TokenKind::Int, "5"), (TokenKind::Bang, "!")]);
    }

    #[test]
    fn test_let_statement() {
        assert_tokens(
            "let five = 5;",
            &[
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "five"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
            ],
        );
    }

    #[test]
    fn test_equality_expressions() {
        assert_tokens(
            "10 == 10;",
            &[
                (TokenKind::Int, "10"),
                (TokenKind::Eq, "=="),
                (TokenKind::Int, "10"),
                (TokenKind::Semicolon, ";"),
            ],
        );
        assert_tokens(
            "5 != 10;",
            &[
                (TokenKind::Int, "5"),
                (TokenKind::NotEq, "!="),
                (TokenKind::Int, "10"),
                (TokenKind::Semicolon, ";"),
            ],
        );
    }

    #[test]
    fn test_illegal_byte() {
        assert_tokens("@", &[(TokenKind::Illegal, "@")]);
    }

    #[test]
    fn test_illegal_does_not_stop_scanning() {
        assert_tokens(
            "a @ b",
            &[
                (TokenKind::Ident, "a"),
                (TokenKind::Illegal, "@"),
                (TokenKind::Ident, "b"),
            ],
        );
    }

    #[test]
    fn test_embedded_nul_is_illegal() {
        assert_tokens(
            "a\0b",
            &[
                (TokenKind::Ident, "a"),
                (TokenKind::Illegal, "\0"),
                (TokenKind::Ident, "b"),
            ],
        );
    }

    #[test]
    fn test_identifiers_with_underscores() {
        assert_tokens(
            "_foo foo_bar __",
            &[
                (TokenKind::Ident, "_foo"),
                (TokenKind::Ident, "foo_bar"),
                (TokenKind::Ident, "__"),
            ],
        );
    }

    #[test]
    fn test_digits_and_letters_split() {
        // No alphanumeric identifiers: "5x" is an Int then an Ident
        assert_tokens(
            "5x x5",
            &[
                (TokenKind::Int, "5"),
                (TokenKind::Ident, "x"),
                (TokenKind::Ident, "x"),
                (TokenKind::Int, "5"),
            ],
        );
    }

    #[test]
    fn test_maximal_runs() {
        assert_tokens(
            "abcdef 123456",
            &[(TokenKind::Ident, "abcdef"), (TokenKind::Int, "123456")],
        );
    }

    #[test]
    fn test_keywords_recognized() {
        assert_eq!(
            kinds("fn let true false if else return"),
            vec![
                TokenKind::Function,
                TokenKind::Let,
                TokenKind::True,
                TokenKind::False,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Return,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_tokens(
            "lets letfn iff",
            &[
                (TokenKind::Ident, "lets"),
                (TokenKind::Ident, "letfn"),
                (TokenKind::Ident, "iff"),
            ],
        );
    }

    #[test]
    fn test_full_program() {
        let input = "let five = 5;\n\
                     let ten = 10;\n\
                     \n\
                     let add = fn(x, y) {\n\
                     \tx + y;\n\
                     };\n\
                     \n\
                     let result = add(five, ten);\n\
                     !-/*5;\n\
                     5 < 10 > 5;\n\
                     \n\
                     if (5 < 10) {\n\
                     \treturn true;\n\
                     } else {\n\
                     \treturn false;\n\
                     }\n\
                     \n\
                     10 == 10;\n\
                     10 != 9;\n";

        let expected: &[(TokenKind, &str)] = &[
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "ten"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fn"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "y"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Ident, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Ident, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "result"),
            (TokenKind::Assign, "="),
            (TokenKind::Ident, "add"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "ten"),
            (TokenKind::RParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Minus, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::Gt, ">"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::LParen, "("),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Int, "10"),
            (TokenKind::Eq, "=="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "10"),
            (TokenKind::NotEq, "!="),
            (TokenKind::Int, "9"),
            (TokenKind::Semicolon, ";"),
        ];

        assert_tokens(input, expected);
    }

    #[test]
    fn test_literal_is_exact_source_text() {
        let mut scanner = Scanner::new("foobar   42");
        assert_eq!(scanner.next_token().literal, "foobar");
        assert_eq!(scanner.next_token().literal, "42");
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let tokens: Vec<Token> = Scanner::new("1 + 2").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| !t.is_eof()));
    }
}
