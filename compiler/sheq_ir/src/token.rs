//! Token definitions and the lexer's output list.

use std::fmt;

use crate::arena::{Arena, ArenaError, Idx, Pool};
use crate::location::{Location, Span};

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Number,
    String,

    // Identifiers and operators (`+`, `<=`, `equal?` all land here)
    Ident,

    // Keywords
    If,
    Lambda,
    Let,
    In,
    End,
    True,
    False,

    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Equals,

    Eof,
}

impl TokenKind {
    /// Keyword kind for an identifier-shaped lexeme, if it is one.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "if" => Some(TokenKind::If),
            "lambda" => Some(TokenKind::Lambda),
            "let" => Some(TokenKind::Let),
            "in" => Some(TokenKind::In),
            "end" => Some(TokenKind::End),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }

    /// Check if this is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Lambda
                | TokenKind::Let
                | TokenKind::In
                | TokenKind::End
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Human-readable description for "expected X" messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Ident => "identifier",
            TokenKind::If => "'if'",
            TokenKind::Lambda => "'lambda'",
            TokenKind::Let => "'let'",
            TokenKind::In => "'in'",
            TokenKind::End => "'end'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Equals => "'='",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its source position.
///
/// The raw text is not copied: `span` indexes the source the `TokenList`
/// was built from.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub location: Location,
}

// Span (8) + Location (8) + one-byte kind, padded to 4.
crate::static_assert_size!(Token, 20);

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, location: Location) -> Self {
        Token {
            kind,
            span,
            location,
        }
    }
}

/// Ordered token sequence for one source text.
///
/// Invariant: a list returned by the lexer ends with exactly one `Eof`.
pub struct TokenList<'src> {
    source: &'src str,
    tokens: Pool<Token>,
}

impl<'src> TokenList<'src> {
    pub fn new(source: &'src str) -> Self {
        TokenList {
            source,
            tokens: Pool::new(),
        }
    }

    /// Append a token, charging its record to the arena.
    pub fn push(&mut self, arena: &mut Arena, token: Token) -> Result<(), ArenaError> {
        self.tokens.alloc(arena, token).map(|_: Idx<Token>| ())
    }

    /// Raw text of a token.
    #[inline]
    pub fn text(&self, token: &Token) -> &'src str {
        &self.source[token.span.to_range()]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        self.tokens.as_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token kinds in order, for tests and debug output.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.as_slice().iter().map(|t| t.kind).collect()
    }
}

impl fmt::Debug for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.as_slice().iter().map(|t| (t.kind, self.text(t))))
            .finish()
    }
}
