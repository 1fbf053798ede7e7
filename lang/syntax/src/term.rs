use crate::*;
use derive_more::From;
use ember_utils::{new_key_type, span::Span};
use std::sync::Arc;

/* ------------------------------- Identifier ------------------------------- */

new_key_type! {
    /// one instantiation of a binder
    pub struct VarId;
}

pub type Tm = Arc<Term>;

/// A free variable; `name` is only for display.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Var {
    pub id: VarId,
    pub name: VarName,
}

/* ---------------------------------- Scope --------------------------------- */

/// A body under `arity` binders, which it refers to by de Bruijn index.
///
/// Index 0 is the innermost binder. When a scope binds several values, they
/// are listed outermost first, so for `All` the self value is index 1 and the
/// argument is index 0.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Scope {
    pub arity: usize,
    pub body: Tm,
}

/* ---------------------------------- Term ---------------------------------- */

/// reference to an enclosing binder
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Bound(pub usize);

/// `Type`, the universe
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Typ;

/// `%self(x: bind) -> body`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct All {
    pub self_name: VarName,
    pub name: VarName,
    pub bind: Tm,
    /// binds self and the argument
    pub body: Scope,
}

/// `(x) => body`, or `<x> => body` when erased
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Lam {
    pub name: VarName,
    pub eras: bool,
    pub body: Scope,
}

/// `func(argm)`, or `func<argm>` when erased
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct App {
    pub func: Tm,
    pub argm: Tm,
    pub eras: bool,
}

/// `let x = expr; body`, or `dup x = expr; body` when duplicable
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Let {
    pub name: VarName,
    pub dups: bool,
    pub expr: Tm,
    pub body: Scope,
}

/// `(expr :: ty)`; `done` marks values that were already checked
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Ann {
    pub done: bool,
    pub expr: Tm,
    pub ty: Tm,
}

/// source location of `expr`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Loc {
    pub span: Span,
    pub expr: Tm,
}

#[derive(From, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Term {
    Bound(Bound),
    Var(Var),
    Ref(DefName),
    Typ(Typ),
    All(All),
    Lam(Lam),
    App(App),
    Let(Let),
    Ann(Ann),
    Loc(Loc),
}

impl Term {
    /// strips location wrappers at the head
    pub fn peel(tm: &Tm) -> &Tm {
        let mut tm = tm;
        while let Term::Loc(Loc { expr, .. }) = tm.as_ref() {
            tm = expr;
        }
        tm
    }
}
