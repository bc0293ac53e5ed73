//! SHEQ IR - shared data structures for the interpreter pipeline.
//!
//! This crate contains everything the phases pass between each other:
//! - `Arena`: the fixed-capacity bump region that bounds one evaluation
//! - `Pool` / `Idx`: typed side-tables charged against the arena
//! - `Name` / `Interner`: interned identifiers
//! - `Token` / `TokenList`: lexer output
//! - `Expr` / `ExprArena`: the parsed expression tree
//!
//! # Design Philosophy
//!
//! - **One region per evaluation**: every allocation made while lexing,
//!   parsing and evaluating is charged to a single `Arena`, so capacity is
//!   the only resource limit and everything is dropped together.
//! - **Handles, not pointers**: nodes refer to each other through `u32`
//!   indices (`ExprId`, `Name`, ...). Children are always allocated before
//!   their parents, so the graph is acyclic by construction.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod interner;
mod location;
mod token;

pub use arena::{Arena, ArenaError, ByteSpan, Idx, IdxRange, Pool};
pub use ast::{Expr, ExprArena, ExprId, ExprKind, ExprRange, NameRange};
pub use interner::{Interner, Name};
pub use location::{Location, Span};
pub use token::{Token, TokenKind, TokenList};
