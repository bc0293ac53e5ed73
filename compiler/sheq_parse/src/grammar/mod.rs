//! Expression parsing.
//!
//! - `mod.rs`: entry point (`parse_expr`), literals, identifiers, braced dispatch
//! - `forms.rs`: `if`, `lambda`, `let` and application inside braces

mod forms;

use sheq_ir::{Expr, ExprId, ExprKind, Location, Name, Token, TokenKind};
use sheq_stack::ensure_sufficient_stack;

use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;

impl Parser<'_, '_> {
    /// Parse one expression.
    ///
    /// Runs under `ensure_sufficient_stack`: nesting depth is limited by the
    /// arena, not the native stack.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::LBrace => return self.parse_braced(),
            TokenKind::Number => {
                self.cursor.advance();
                ExprKind::Number(self.number_value(&token)?)
            }
            TokenKind::String => {
                self.cursor.advance();
                let text = self.cursor.text(&token);
                let contents = text
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    .unwrap_or_default();
                let span = self
                    .arena
                    .alloc_bytes(contents.as_bytes())
                    .map_err(|err| self.arena_error(err))?;
                ExprKind::String(span)
            }
            // `true` and `false` are names bound in the root environment.
            TokenKind::Ident | TokenKind::True | TokenKind::False => {
                self.cursor.advance();
                ExprKind::Ident(self.intern(&token)?)
            }
            _ => return Err(self.cursor.unexpected("expression")),
        };
        self.alloc(kind, token.location)
    }

    /// `'{' form '}'`
    fn parse_braced(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace)?;
        let id = match self.cursor.current_kind() {
            TokenKind::If => {
                self.cursor.advance();
                self.parse_if(open.location)?
            }
            TokenKind::Lambda => {
                self.cursor.advance();
                self.parse_lambda(open.location)?
            }
            TokenKind::Let => {
                self.cursor.advance();
                self.parse_let(open.location)?
            }
            _ => self.parse_application(open.location)?,
        };
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(id)
    }

    fn number_value(&self, token: &Token) -> Result<f64, ParseError> {
        let text = self.cursor.text(token);
        text.parse::<f64>().map_err(|_| {
            ParseError::new(
                ParseErrorKind::InvalidNumber {
                    text: text.to_owned(),
                },
                token.location,
            )
        })
    }

    fn intern(&mut self, token: &Token) -> Result<Name, ParseError> {
        let text = self.cursor.text(token);
        self.interner
            .intern(self.arena, text)
            .map_err(|err| self.arena_error(err))
    }

    fn alloc(&mut self, kind: ExprKind, location: Location) -> Result<ExprId, ParseError> {
        self.exprs
            .alloc_expr(self.arena, Expr { kind, location })
            .map_err(|err| self.arena_error(err))
    }
}
