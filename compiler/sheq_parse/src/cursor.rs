//! Token cursor with single-token lookahead.

use sheq_ir::{Token, TokenKind, TokenList};
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind};

pub(crate) struct Cursor<'a, 'src> {
    tokens: &'a TokenList<'src>,
    pos: usize,
}

impl<'a, 'src> Cursor<'a, 'src> {
    pub(crate) fn new(tokens: &'a TokenList<'src>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current token.
    ///
    /// A list built by the lexer always ends with `Eof`, and the cursor
    /// never moves past it. A hand-built list without one reads as `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        match self.tokens.as_slice().get(self.pos) {
            Some(token) => *token,
            None => self.eof_token(),
        }
    }

    #[cold]
    fn eof_token(&self) -> Token {
        let last = self.tokens.as_slice().last();
        Token::new(
            TokenKind::Eof,
            last.map(|t| t.span).unwrap_or_default(),
            last.map(|t| t.location).unwrap_or_default(),
        )
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. `Eof` is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(pos = self.pos, kind = %token.kind, "advance");
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail at the current token.
    #[inline]
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// "expected X, found <current>" at the current token.
    #[cold]
    #[inline(never)]
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: token.kind,
            },
            token.location,
        )
    }

    /// Raw source text of a token.
    #[inline]
    pub(crate) fn text(&self, token: &Token) -> &'src str {
        self.tokens.text(token)
    }
}
