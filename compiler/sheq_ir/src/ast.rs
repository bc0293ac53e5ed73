//! Expression tree.
//!
//! Nodes are stored flat in an `ExprArena` and refer to their children by
//! `ExprId`. A child is always allocated before its parent, so the tree
//! (a DAG at most) can never contain a cycle. Nothing is mutated after the
//! parser hands the arena over.

use crate::arena::{Arena, ArenaError, ByteSpan, Idx, IdxRange, Pool};
use crate::interner::Name;
use crate::location::Location;

/// Index into the expression arena.
pub type ExprId = Idx<Expr>;

/// Argument list of an application.
pub type ExprRange = IdxRange<ExprId>;

/// Parameter list of a lambda.
pub type NameRange = IdxRange<Name>;

/// Expression node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    /// Position of the token that starts this expression.
    pub location: Location,
}

crate::static_assert_size!(Expr, 24);

/// Expression variants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Numeric literal.
    Number(f64),

    /// String literal contents (without the quotes), stored in the arena.
    ///
    /// Backslash escapes are kept verbatim.
    String(ByteSpan),

    /// Variable reference.
    Ident(Name),

    /// `{if cond then else}`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// `{lambda (params...) : body}`
    ///
    /// Parameter names are pairwise distinct and never keywords.
    Lambda { params: NameRange, body: ExprId },

    /// `{func args...}`: position 0 is `func`, the rest are `args`.
    /// Zero arguments are allowed.
    Apply { func: ExprId, args: ExprRange },
}

impl ExprKind {
    /// Short node name for debug output.
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Number(_) => "number",
            ExprKind::String(_) => "string",
            ExprKind::Ident(_) => "identifier",
            ExprKind::If { .. } => "if",
            ExprKind::Lambda { .. } => "lambda",
            ExprKind::Apply { .. } => "application",
        }
    }
}

/// Flat storage for one parsed expression tree.
#[derive(Default)]
pub struct ExprArena {
    exprs: Pool<Expr>,
    expr_lists: Pool<ExprId>,
    name_lists: Pool<Name>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node.
    pub fn alloc_expr(&mut self, arena: &mut Arena, expr: Expr) -> Result<ExprId, ArenaError> {
        self.exprs.alloc(arena, expr)
    }

    /// Allocate an argument list.
    pub fn alloc_expr_list(
        &mut self,
        arena: &mut Arena,
        ids: &[ExprId],
    ) -> Result<ExprRange, ArenaError> {
        self.expr_lists.alloc_slice(arena, ids)
    }

    /// Allocate a parameter list.
    pub fn alloc_name_list(
        &mut self,
        arena: &mut Arena,
        names: &[Name],
    ) -> Result<NameRange, ArenaError> {
        self.name_lists.alloc_slice(arena, names)
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        self.exprs.get(id)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        self.expr_lists.get_range(range)
    }

    #[inline]
    pub fn get_names(&self, range: NameRange) -> &[Name] {
        self.name_lists.get_range(range)
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
