//! Parser tests.
//!
//! - `parser`: literals, forms, error reporting
//! - `desugar`: `let` rewriting and shape equivalence

#![allow(clippy::unwrap_used, clippy::expect_used)]


use std::fmt::Write as _;

use crate::{parse, ParseError, ParseOutput};
use sheq_ir::{Arena, ExprId, ExprKind, Interner};

/// Everything a parse leaves behind, kept together for inspection.
pub(crate) struct Parsed {
    pub arena: Arena,
    pub interner: Interner,
    pub output: ParseOutput,
}

impl Parsed {
    /// S-expression rendering of the tree, ignoring locations.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(self.output.root, &mut out);
        out
    }

    fn dump_into(&self, id: ExprId, out: &mut String) {
        let exprs = &self.output.exprs;
        match exprs.get_expr(id).kind {
            ExprKind::Number(n) => write!(out, "{n:?}").unwrap(),
            ExprKind::String(span) => {
                let text = String::from_utf8_lossy(self.arena.bytes(span));
                write!(out, "{text:?}").unwrap();
            }
            ExprKind::Ident(name) => out.push_str(&self.interner.lookup(&self.arena, name)),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push_str("(if");
                for child in [cond, then_branch, else_branch] {
                    out.push(' ');
                    self.dump_into(child, out);
                }
                out.push(')');
            }
            ExprKind::Lambda { params, body } => {
                out.push_str("(lambda (");
                let names: Vec<_> = exprs
                    .get_names(params)
                    .iter()
                    .map(|&n| self.interner.lookup(&self.arena, n).into_owned())
                    .collect();
                out.push_str(&names.join(" "));
                out.push_str(") ");
                self.dump_into(body, out);
                out.push(')');
            }
            ExprKind::Apply { func, args } => {
                out.push('(');
                self.dump_into(func, out);
                for &arg in exprs.get_expr_list(args) {
                    out.push(' ');
                    self.dump_into(arg, out);
                }
                out.push(')');
            }
        }
    }
}

pub(crate) fn try_parse(source: &str) -> Result<Parsed, ParseError> {
    let mut arena = Arena::with_capacity(64 * 1024);
    let mut interner = Interner::new();
    let tokens = sheq_lexer::lex(source, &mut arena).unwrap();
    let output = parse(&tokens, &mut arena, &mut interner)?;
    Ok(Parsed {
        arena,
        interner,
        output,
    })
}

pub(crate) fn parse_source(source: &str) -> Parsed {
    try_parse(source).unwrap()
}

pub(crate) fn parse_err(source: &str) -> ParseError {
    match try_parse(source) {
        Ok(parsed) => panic!("expected a syntax error, parsed {}", parsed.dump()),
        Err(err) => err,
    }
}
