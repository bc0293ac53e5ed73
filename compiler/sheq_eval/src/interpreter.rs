//! Tree-walking interpreter.
//!
//! One rule per expression kind. The current environment is a `FrameId`
//! passed down every call; there is no ambient "current scope".

use smallvec::SmallVec;
use tracing::debug;

use sheq_ir::{Arena, ExprArena, ExprId, ExprKind, Interner, Location};
use sheq_stack::ensure_sufficient_stack;

use crate::environment::{Environment, FrameId};
use crate::errors::{arity_mismatch, not_callable, type_mismatch, unbound, EvalError, EvalResult};
use crate::primitives::install_globals;
use crate::value::{Closure, Value};

/// Evaluator for one parsed program.
///
/// Borrows the arena for the whole evaluation: every environment frame and
/// binding is charged to it.
pub struct Interpreter<'a> {
    arena: &'a mut Arena,
    interner: &'a Interner,
    exprs: &'a ExprArena,
    env: Environment,
    globals: FrameId,
}

impl<'a> Interpreter<'a> {
    /// Set up the global frame (primitives, `true`, `false`).
    ///
    /// # Errors
    ///
    /// Fails only if the arena cannot hold the global frame.
    pub fn new(
        arena: &'a mut Arena,
        interner: &'a mut Interner,
        exprs: &'a ExprArena,
    ) -> Result<Self, EvalError> {
        let mut env = Environment::new();
        let globals = install_globals(&mut env, arena, interner)?;
        Ok(Interpreter {
            arena,
            interner,
            exprs,
            env,
            globals,
        })
    }

    /// The frame holding the primitives.
    pub fn globals(&self) -> FrameId {
        self.globals
    }

    pub fn arena(&self) -> &Arena {
        self.arena
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Evaluate `root` in the global frame.
    ///
    /// # Errors
    ///
    /// The first failure aborts evaluation and is returned as is.
    pub fn eval_program(&mut self, root: ExprId) -> EvalResult {
        self.eval(root, self.globals)
    }

    /// Evaluate `id` in `env`.
    ///
    /// Not tail-call optimized: every nested call recurses. Stack growth is
    /// handled by `ensure_sufficient_stack`, so depth is bounded by the
    /// arena, which every call frame is charged to.
    pub fn eval(&mut self, id: ExprId, env: FrameId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: ExprId, env: FrameId) -> EvalResult {
        let exprs = self.exprs;
        let expr = *exprs.get_expr(id);
        match expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(n)),
            ExprKind::String(span) => Ok(Value::Str(span)),
            ExprKind::Ident(name) => self.env.resolve(env, name).ok_or_else(|| {
                unbound(&self.interner.lookup(self.arena, name)).or_at(expr.location)
            }),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(cond, env)? {
                Value::Bool(true) => self.eval(then_branch, env),
                Value::Bool(false) => self.eval(else_branch, env),
                other => Err(type_mismatch("if", "boolean", other.type_name()).or_at(expr.location)),
            },
            ExprKind::Lambda { params, body } => Ok(Value::Closure(Closure { params, body, env })),
            ExprKind::Apply { func, args } => {
                let callee = self.eval(func, env)?;
                let mut values: SmallVec<[Value; 4]> = SmallVec::new();
                for &arg in exprs.get_expr_list(args) {
                    values.push(self.eval(arg, env)?);
                }
                self.apply(callee, &values, expr.location)
            }
        }
    }

    /// Call an already-evaluated operator with already-evaluated arguments.
    fn apply(&mut self, callee: Value, args: &[Value], location: Location) -> EvalResult {
        match callee {
            Value::Closure(closure) => {
                let exprs = self.exprs;
                let params = exprs.get_names(closure.params);
                if params.len() != args.len() {
                    return Err(arity_mismatch("closure", params.len(), args.len()).or_at(location));
                }
                let frame = self.env.extend(self.arena, closure.env, params, args)?;
                debug!(argc = args.len(), frame = frame.raw(), "apply closure");
                self.eval(closure.body, frame)
            }
            Value::Primitive(primitive) => primitive
                .call(args, self.arena)
                .map_err(|err| err.or_at(location)),
            other => Err(not_callable(other.type_name()).or_at(location)),
        }
    }
}
