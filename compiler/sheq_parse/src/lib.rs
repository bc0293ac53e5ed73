//! Recursive-descent parser for SHEQ.
//!
//! Consumes a [`TokenList`] and builds the expression tree in an
//! [`ExprArena`], with every node charged to the evaluation's [`Arena`].
//! `let` has no node of its own: it is rewritten here into the
//! application of a fresh lambda.
//!
//! ```text
//! expr        := NUMBER | STRING | ID | '{' form '}'
//! form        := 'if' expr expr expr
//!              | 'lambda' '(' ID* ')' ':' expr
//!              | 'let' '{' ('[' ID '=' expr ']')* '}' 'in' expr 'end'
//!              | expr expr*
//! ```
//!
//! The first error aborts the parse. There is no recovery.

mod cursor;
mod error;
mod grammar;

pub use error::{NameList, ParseError, ParseErrorKind};

use sheq_ir::{Arena, ArenaError, ExprArena, ExprId, Interner, TokenKind, TokenList};

use crate::cursor::Cursor;

/// A parsed program: the node storage and the id of its root.
pub struct ParseOutput {
    pub exprs: ExprArena,
    pub root: ExprId,
}

/// Parser state for one token list.
pub(crate) struct Parser<'a, 'src> {
    cursor: Cursor<'a, 'src>,
    arena: &'a mut Arena,
    interner: &'a mut Interner,
    exprs: ExprArena,
}

impl<'a, 'src> Parser<'a, 'src> {
    fn new(tokens: &'a TokenList<'src>, arena: &'a mut Arena, interner: &'a mut Interner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena,
            interner,
            exprs: ExprArena::new(),
        }
    }

    /// Wrap an arena failure at the current token.
    #[cold]
    fn arena_error(&self, err: ArenaError) -> ParseError {
        ParseError::new(ParseErrorKind::Arena(err), self.cursor.current().location)
    }
}

/// Parse exactly one expression followed by end of input.
///
/// Identifiers are interned into `interner`; string contents and all nodes
/// are charged to `arena`.
///
/// # Errors
///
/// Returns the first syntax error, or an arena error if the tree does not
/// fit.
pub fn parse(
    tokens: &TokenList<'_>,
    arena: &mut Arena,
    interner: &mut Interner,
) -> Result<ParseOutput, ParseError> {
    let _span = tracing::debug_span!("parse", tokens = tokens.len()).entered();

    let mut parser = Parser::new(tokens, arena, interner);
    let root = parser.parse_expr()?;

    let next = parser.cursor.current();
    if next.kind != TokenKind::Eof {
        return Err(ParseError::new(
            ParseErrorKind::TrailingInput { found: next.kind },
            next.location,
        ));
    }

    tracing::debug!(nodes = parser.exprs.len(), "parsed");
    Ok(ParseOutput {
        exprs: parser.exprs,
        root,
    })
}

#[cfg(test)]
mod tests;
