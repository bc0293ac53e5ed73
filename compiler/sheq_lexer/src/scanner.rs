//! Hand-written scanner producing one token per call.
//!
//! Dispatch is on the first byte of the token. The only byte that needs
//! lookahead is `-`: followed by a digit it starts a number, otherwise it
//! starts an identifier. So `-5` is a number while `- 5` and `-foo` are
//! identifiers.

use sheq_ir::{Location, Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::lex_error::LexError;

pub(crate) struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            source,
            cursor: Cursor::new(source.as_bytes()),
        }
    }

    /// Produce the next token. Returns `Eof` (zero-length) once the input is
    /// exhausted, and keeps returning it.
    pub(crate) fn next_token(&mut self) -> Result<Token, LexError> {
        self.cursor.eat_while(is_space);

        let start = self.cursor.pos();
        let location = self.cursor.location();
        if self.cursor.is_eof() {
            return Ok(Token::new(TokenKind::Eof, Span::new(start, start), location));
        }

        let kind = match self.cursor.current() {
            b'0'..=b'9' => self.number(),
            b'-' if self.cursor.peek().is_ascii_digit() => self.number(),
            b'"' => self.string(location)?,
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'[' => self.single(TokenKind::LBracket),
            b']' => self.single(TokenKind::RBracket),
            b':' => self.single(TokenKind::Colon),
            b'=' => self.single(TokenKind::Equals),
            b if is_ident_start(b) => self.identifier(start),
            _ => return Err(self.unexpected(start, location)),
        };

        Ok(Token::new(kind, Span::new(start, self.cursor.pos()), location))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `-?[0-9]+(\.[0-9]*)?`
    fn number(&mut self) -> TokenKind {
        if self.cursor.current() == b'-' {
            self.cursor.advance();
        }
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        TokenKind::Number
    }

    fn string(&mut self, location: Location) -> Result<TokenKind, LexError> {
        self.cursor.advance(); // opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return Ok(TokenKind::String);
                }
                b'\\' => {
                    // Escapes stay raw; only make sure `\"` does not close.
                    self.cursor.advance();
                    self.cursor.advance();
                }
                b'\n' => self.cursor.advance(),
                _ => return Err(LexError::UnterminatedString { location }),
            }
        }
    }

    fn identifier(&mut self, start: u32) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let text = &self.source[start as usize..self.cursor.pos() as usize];
        TokenKind::keyword(text).unwrap_or(TokenKind::Ident)
    }

    fn unexpected(&self, start: u32, location: Location) -> LexError {
        let ch = self
            .source
            .get(start as usize..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0');
        LexError::UnexpectedChar { ch, location }
    }
}

/// C `isspace` in the "C" locale.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// `-` is included here; a `-` followed by a digit never reaches this check.
#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'_' | b'+' | b'-' | b'*' | b'/' | b'<' | b'>' | b'?' | b'!')
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'_' | b'-' | b'?' | b'!' | b'+' | b'*' | b'/' | b'<' | b'=' | b'>')
}
