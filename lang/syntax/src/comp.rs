//! Runtime terms: what is left of a typed term after erasure.

use crate::*;
use std::sync::Arc;

pub type RcComp = Arc<Comp>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Comp {
    Var(VarName),
    Ref(DefName),
    /// anything without runtime content: types, erased parameters, proofs
    Nul,
    Lam(VarName, RcComp),
    App(RcComp, RcComp),
    /// evaluated once and shared by the body
    Let(VarName, RcComp, RcComp),
    /// applying the wrapped value needs the primitive's native eliminator
    Eli(Prim, RcComp),
    /// the wrapped closure is built with the primitive's native constructor
    Ins(Prim, RcComp),
    Chr(char),
    Str(String),
}

impl Comp {
    pub fn var(name: impl Into<VarName>) -> RcComp {
        Arc::new(Comp::Var(name.into()))
    }
    pub fn global(name: impl Into<DefName>) -> RcComp {
        Arc::new(Comp::Ref(name.into()))
    }
    pub fn nul() -> RcComp {
        Arc::new(Comp::Nul)
    }
    pub fn lam(name: impl Into<VarName>, body: RcComp) -> RcComp {
        Arc::new(Comp::Lam(name.into(), body))
    }
    pub fn app(func: RcComp, argm: RcComp) -> RcComp {
        Arc::new(Comp::App(func, argm))
    }
    pub fn let_(name: impl Into<VarName>, expr: RcComp, body: RcComp) -> RcComp {
        Arc::new(Comp::Let(name.into(), expr, body))
    }
    pub fn eli(prim: Prim, term: RcComp) -> RcComp {
        Arc::new(Comp::Eli(prim, term))
    }
    pub fn ins(prim: Prim, term: RcComp) -> RcComp {
        Arc::new(Comp::Ins(prim, term))
    }
    pub fn chr(c: char) -> RcComp {
        Arc::new(Comp::Chr(c))
    }
    pub fn str(s: impl Into<String>) -> RcComp {
        Arc::new(Comp::Str(s.into()))
    }
}
