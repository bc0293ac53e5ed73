//! Tokenizer for SHEQ source text.
//!
//! Two layers, as usual: [`Cursor`](cursor::Cursor) walks bytes and tracks
//! line/column, the scanner turns bytes into [`Token`]s. [`lex`] drives the
//! scanner to end of input and stores the tokens in an arena-charged
//! [`TokenList`].
//!
//! Keywords are resolved here; number text is converted by the parser and
//! string escapes are never interpreted.

mod cursor;
mod lex_error;
mod scanner;

pub use lex_error::LexError;

use sheq_ir::{Arena, ArenaError, TokenKind, TokenList};

use crate::scanner::Scanner;

/// Tokenize `source` into a list ending with exactly one `Eof` token.
///
/// # Errors
///
/// Stops at the first unterminated string or unrecognized character, or
/// when the arena cannot hold another token.
pub fn lex<'src>(source: &'src str, arena: &mut Arena) -> Result<TokenList<'src>, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::Arena(ArenaError {
            requested: source.len(),
            offset: arena.offset(),
            capacity: arena.capacity(),
        }));
    }

    let mut scanner = Scanner::new(source);
    let mut tokens = TokenList::new(source);
    loop {
        let token = scanner.next_token()?;
        tracing::trace!(kind = ?token.kind, text = tokens.text(&token), %token.location, "token");
        tokens.push(arena, token)?;
        if token.kind == TokenKind::Eof {
            break;
        }
    }

    tracing::debug!(count = tokens.len(), bytes = source.len(), "lexed");
    Ok(tokens)
}
