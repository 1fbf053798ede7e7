use crate::*;
use std::sync::Arc;

/// A leaf met while walking a term under `depth` binders.
enum Leaf<'a> {
    Bound(usize),
    Var(&'a Var),
}

/// Rebuilds `tm` with every leaf `f` maps to `Some`; untouched subterms are
/// shared with the input.
fn replace<F>(tm: &Tm, depth: usize, f: &F) -> Tm
where
    F: Fn(Leaf, usize) -> Option<Tm>,
{
    fn same(a: &Tm, b: &Tm) -> bool {
        Arc::ptr_eq(a, b)
    }
    match tm.as_ref() {
        | Term::Bound(Bound(idx)) => f(Leaf::Bound(*idx), depth).unwrap_or_else(|| tm.clone()),
        | Term::Var(var) => f(Leaf::Var(var), depth).unwrap_or_else(|| tm.clone()),
        | Term::Ref(_) | Term::Typ(_) => tm.clone(),
        | Term::All(All { self_name, name, bind, body }) => {
            let bind_ = replace(bind, depth, f);
            let body_ = replace_scope(body, depth, f);
            if same(bind, &bind_) && same(&body.body, &body_.body) {
                tm.clone()
            } else {
                Arc::new(
                    All { self_name: self_name.clone(), name: name.clone(), bind: bind_, body: body_ }
                        .into(),
                )
            }
        }
        | Term::Lam(Lam { name, eras, body }) => {
            let body_ = replace_scope(body, depth, f);
            if same(&body.body, &body_.body) {
                tm.clone()
            } else {
                Arc::new(Lam { name: name.clone(), eras: *eras, body: body_ }.into())
            }
        }
        | Term::App(App { func, argm, eras }) => {
            let func_ = replace(func, depth, f);
            let argm_ = replace(argm, depth, f);
            if same(func, &func_) && same(argm, &argm_) {
                tm.clone()
            } else {
                Arc::new(App { func: func_, argm: argm_, eras: *eras }.into())
            }
        }
        | Term::Let(Let { name, dups, expr, body }) => {
            let expr_ = replace(expr, depth, f);
            let body_ = replace_scope(body, depth, f);
            if same(expr, &expr_) && same(&body.body, &body_.body) {
                tm.clone()
            } else {
                Arc::new(Let { name: name.clone(), dups: *dups, expr: expr_, body: body_ }.into())
            }
        }
        | Term::Ann(Ann { done, expr, ty }) => {
            let expr_ = replace(expr, depth, f);
            let ty_ = replace(ty, depth, f);
            if same(expr, &expr_) && same(ty, &ty_) {
                tm.clone()
            } else {
                Arc::new(Ann { done: *done, expr: expr_, ty: ty_ }.into())
            }
        }
        | Term::Loc(Loc { span, expr }) => {
            let expr_ = replace(expr, depth, f);
            if same(expr, &expr_) {
                tm.clone()
            } else {
                Arc::new(Loc { span: *span, expr: expr_ }.into())
            }
        }
    }
}

fn replace_scope<F>(scope: &Scope, depth: usize, f: &F) -> Scope
where
    F: Fn(Leaf, usize) -> Option<Tm>,
{
    Scope { arity: scope.arity, body: replace(&scope.body, depth + scope.arity, f) }
}

impl Scope {
    pub fn new(arity: usize, body: Tm) -> Self {
        Scope { arity, body }
    }
    /// Substitutes `args` (outermost binder first) for the bound indices.
    ///
    /// The arguments must be locally closed.
    pub fn instantiate(&self, args: &[Tm]) -> Tm {
        let arity = self.arity;
        debug_assert_eq!(arity, args.len(), "scope arity mismatch");
        replace(&self.body, 0, &|leaf, depth| match leaf {
            | Leaf::Bound(idx) if idx >= depth => {
                let rel = idx - depth;
                if rel < arity {
                    Some(args[arity - 1 - rel].clone())
                } else {
                    Some(Arc::new(Bound(idx - arity).into()))
                }
            }
            | Leaf::Bound(_) | Leaf::Var(_) => None,
        })
    }
    /// Turns the free variables `vars` (outermost binder first) of `body` into
    /// the bound indices of a new scope.
    pub fn abstract_over(vars: &[VarId], body: &Tm) -> Self {
        let arity = vars.len();
        let body = replace(body, 0, &|leaf, depth| match leaf {
            | Leaf::Var(var) => vars
                .iter()
                .position(|id| *id == var.id)
                .map(|pos| Arc::new(Bound(depth + arity - 1 - pos).into())),
            | Leaf::Bound(idx) if idx >= depth => Some(Arc::new(Bound(idx + arity).into())),
            | Leaf::Bound(_) => None,
        });
        Scope { arity, body }
    }
}
