use crate::*;
use ember_utils::{alloc::IndexLike, span::Span};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Group tag of the variables handed to constructor closures. They are
/// abstracted away before the constructor returns, so they never leak.
const PLACEHOLDER_GROUP: usize = usize::MAX;
static PLACEHOLDERS: AtomicUsize = AtomicUsize::new(0);

pub fn placeholder(name: &VarName) -> Var {
    let idx = PLACEHOLDERS.fetch_add(1, Ordering::Relaxed);
    Var { id: VarId::new(PLACEHOLDER_GROUP, idx), name: name.clone() }
}

impl Term {
    pub fn bound(idx: usize) -> Tm {
        Arc::new(Bound(idx).into())
    }
    pub fn var(var: Var) -> Tm {
        Arc::new(var.into())
    }
    pub fn global(name: impl Into<DefName>) -> Tm {
        Arc::new(Term::Ref(name.into()))
    }
    pub fn typ() -> Tm {
        Arc::new(Typ.into())
    }
    /// `%self(name: bind) -> body(self, name)`
    pub fn all(
        self_name: impl Into<VarName>, name: impl Into<VarName>, bind: Tm,
        body: impl FnOnce(Tm, Tm) -> Tm,
    ) -> Tm {
        let self_name = self_name.into();
        let name = name.into();
        let s = placeholder(&self_name);
        let x = placeholder(&name);
        let body = body(Term::var(s.clone()), Term::var(x.clone()));
        let body = Scope::abstract_over(&[s.id, x.id], &body);
        Arc::new(All { self_name, name, bind, body }.into())
    }
    /// a self type whose body ignores self
    pub fn pi(name: impl Into<VarName>, bind: Tm, body: impl FnOnce(Tm) -> Tm) -> Tm {
        Term::all("_", name, bind, |_, x| body(x))
    }
    pub fn lam(name: impl Into<VarName>, eras: bool, body: impl FnOnce(Tm) -> Tm) -> Tm {
        let name = name.into();
        let x = placeholder(&name);
        let body = body(Term::var(x.clone()));
        let body = Scope::abstract_over(&[x.id], &body);
        Arc::new(Lam { name, eras, body }.into())
    }
    pub fn app(func: Tm, argm: Tm, eras: bool) -> Tm {
        Arc::new(App { func, argm, eras }.into())
    }
    /// applies `func` to every `(argm, eras)` from left to right
    pub fn apps(func: Tm, args: impl IntoIterator<Item = (Tm, bool)>) -> Tm {
        args.into_iter().fold(func, |func, (argm, eras)| Term::app(func, argm, eras))
    }
    pub fn let_(
        name: impl Into<VarName>, dups: bool, expr: Tm, body: impl FnOnce(Tm) -> Tm,
    ) -> Tm {
        let name = name.into();
        let x = placeholder(&name);
        let body = body(Term::var(x.clone()));
        let body = Scope::abstract_over(&[x.id], &body);
        Arc::new(Let { name, dups, expr, body }.into())
    }
    pub fn ann(done: bool, expr: Tm, ty: Tm) -> Tm {
        Arc::new(Ann { done, expr, ty }.into())
    }
    pub fn loc(span: Span, expr: Tm) -> Tm {
        Arc::new(Loc { span, expr }.into())
    }
}
