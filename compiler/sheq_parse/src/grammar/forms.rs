//! Braced forms.

use sheq_ir::{ExprId, ExprKind, ExprRange, Location, Name, NameRange, TokenKind};
use tracing::trace;

use crate::error::{NameList, ParseError, ParseErrorKind};
use crate::Parser;

impl Parser<'_, '_> {
    /// `if cond then else` (after `if`)
    pub(super) fn parse_if(&mut self, location: Location) -> Result<ExprId, ParseError> {
        let cond = self.parse_expr()?;
        let then_branch = self.parse_expr()?;
        let else_branch = self.parse_expr()?;
        self.alloc(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            location,
        )
    }

    /// `'(' ID* ')' ':' expr` (after `lambda`)
    pub(super) fn parse_lambda(&mut self, location: Location) -> Result<ExprId, ParseError> {
        self.cursor.expect(TokenKind::LParen)?;
        let mut names = Vec::new();
        while !self.cursor.eat(TokenKind::RParen) {
            let name = self.parse_list_name(&names, NameList::Parameter)?;
            names.push(name);
        }
        self.cursor.expect(TokenKind::Colon)?;
        let body = self.parse_expr()?;

        let params = self.alloc_names(&names)?;
        self.alloc(ExprKind::Lambda { params, body }, location)
    }

    /// `'{' ('[' ID '=' expr ']')* '}' 'in' expr 'end'` (after `let`)
    ///
    /// Produces `{{lambda (names...) : body} values...}`.
    pub(super) fn parse_let(&mut self, location: Location) -> Result<ExprId, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let mut names = Vec::new();
        let mut values = Vec::new();
        while self.cursor.eat(TokenKind::LBracket) {
            let name = self.parse_list_name(&names, NameList::Binding)?;
            names.push(name);
            self.cursor.expect(TokenKind::Equals)?;
            values.push(self.parse_expr()?);
            self.cursor.expect(TokenKind::RBracket)?;
        }
        self.cursor.expect(TokenKind::RBrace)?;
        self.cursor.expect(TokenKind::In)?;
        let body = self.parse_expr()?;
        self.cursor.expect(TokenKind::End)?;

        trace!(bindings = names.len(), "desugar let");
        let params = self.alloc_names(&names)?;
        let func = self.alloc(ExprKind::Lambda { params, body }, location)?;
        let args = self.alloc_exprs(&values)?;
        self.alloc(ExprKind::Apply { func, args }, location)
    }

    /// `expr expr*` up to (not including) the closing `}`
    pub(super) fn parse_application(&mut self, location: Location) -> Result<ExprId, ParseError> {
        let func = self.parse_expr()?;
        let mut values = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            values.push(self.parse_expr()?);
        }
        let args = self.alloc_exprs(&values)?;
        self.alloc(ExprKind::Apply { func, args }, location)
    }

    /// One name of a parameter or binding list.
    ///
    /// Keywords and names already in `seen` are rejected here, while the
    /// list is being read.
    fn parse_list_name(&mut self, seen: &[Name], list: NameList) -> Result<Name, ParseError> {
        let token = self.cursor.current();
        if token.kind.is_keyword() {
            return Err(ParseError::new(
                ParseErrorKind::KeywordAsName {
                    keyword: token.kind,
                    list,
                },
                token.location,
            ));
        }
        if token.kind != TokenKind::Ident {
            return Err(self.cursor.unexpected(match list {
                NameList::Parameter => "parameter name or ')'",
                NameList::Binding => "binding name",
            }));
        }
        self.cursor.advance();

        let name = self.intern(&token)?;
        if seen.contains(&name) {
            return Err(ParseError::new(
                ParseErrorKind::DuplicateName {
                    name: self.cursor.text(&token).to_owned(),
                    list,
                },
                token.location,
            ));
        }
        Ok(name)
    }

    fn alloc_names(&mut self, names: &[Name]) -> Result<NameRange, ParseError> {
        self.exprs
            .alloc_name_list(self.arena, names)
            .map_err(|err| self.arena_error(err))
    }

    fn alloc_exprs(&mut self, ids: &[ExprId]) -> Result<ExprRange, ParseError> {
        self.exprs
            .alloc_expr_list(self.arena, ids)
            .map_err(|err| self.arena_error(err))
    }
}
