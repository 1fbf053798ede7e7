use crate::syntax::*;
use std::sync::Arc;

fn scope(scope: &Scope) -> Scope {
    Scope { arity: scope.arity, body: unlocate(&scope.body) }
}

/// Strips every location wrapper, under binders as well.
pub fn unlocate(tm: &Tm) -> Tm {
    match tm.as_ref() {
        | Term::Loc(Loc { expr, .. }) => unlocate(expr),
        | Term::Bound(_) | Term::Var(_) | Term::Ref(_) | Term::Typ(_) => tm.clone(),
        | Term::All(All { self_name, name, bind, body }) => Arc::new(
            All {
                self_name: self_name.clone(),
                name: name.clone(),
                bind: unlocate(bind),
                body: scope(body),
            }
            .into(),
        ),
        | Term::Lam(Lam { name, eras, body }) => {
            Arc::new(Lam { name: name.clone(), eras: *eras, body: scope(body) }.into())
        }
        | Term::App(App { func, argm, eras }) => {
            Term::app(unlocate(func), unlocate(argm), *eras)
        }
        | Term::Let(Let { name, dups, expr, body }) => Arc::new(
            Let { name: name.clone(), dups: *dups, expr: unlocate(expr), body: scope(body) }
                .into(),
        ),
        | Term::Ann(Ann { done, expr, ty }) => Term::ann(*done, unlocate(expr), unlocate(ty)),
    }
}
