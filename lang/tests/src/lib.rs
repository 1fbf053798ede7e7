//! A small prelude of self-typed encodings and helpers for the end-to-end
//! tests.

pub use ember_core::{Ctx, Definition, Defs};
pub use ember_driver::{BuildError, Compiled, Conf, Driver, compile};
pub use ember_syntax::*;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    use super::*;

    /// `%self(P: (x: Bool) -> Type) -> (t: P(true)) -> (f: P(false)) -> P(self)`
    pub fn bool_ty() -> Tm {
        let motive = Term::pi("x", Term::global("Bool"), |_| Term::typ());
        Term::all("self", "P", motive, |s, p| {
            Term::pi("t", Term::app(p.clone(), Term::global("true"), false), |_| {
                Term::pi("f", Term::app(p.clone(), Term::global("false"), false), |_| {
                    Term::app(p, s, false)
                })
            })
        })
    }
    /// `<P> => (t) => (f) => t` or `... => f`
    pub fn bool_tm(value: bool) -> Tm {
        Term::lam("P", true, |_| {
            Term::lam("t", false, |t| Term::lam("f", false, |f| if value { t } else { f }))
        })
    }
    /// `(b) => b<(x) => Bool>(false)(true)`
    pub fn not_tm() -> Tm {
        Term::lam("b", false, |b| {
            Term::apps(
                b,
                [
                    (Term::lam("x", false, |_| Term::global("Bool")), true),
                    (Term::global("false"), false),
                    (Term::global("true"), false),
                ],
            )
        })
    }
    /// `%self(P: (x: Unit) -> Type) -> (u: P(unit)) -> P(self)`
    pub fn unit_ty() -> Tm {
        let motive = Term::pi("x", Term::global("Unit"), |_| Term::typ());
        Term::all("self", "P", motive, |s, p| {
            Term::pi("u", Term::app(p.clone(), Term::global("unit"), false), |_| {
                Term::app(p, s, false)
            })
        })
    }
    /// `(A: Type) -> (x: A) -> A`
    pub fn id_ty() -> Tm {
        Term::pi("A", Term::typ(), |a| Term::pi("x", a.clone(), |_| a))
    }
    /// `<A> => (x) => x`
    pub fn id_tm() -> Tm {
        Term::lam("A", true, |_| Term::lam("x", false, |x| x))
    }
    pub fn arrow(dom: Tm, cod: Tm) -> Tm {
        Term::pi("x", dom, |_| cod)
    }

    pub fn defs() -> Defs {
        let bool = || Term::global("Bool");
        Defs::new()
            .with("Bool", Term::typ(), bool_ty())
            .with("true", bool(), bool_tm(true))
            .with("false", bool(), bool_tm(false))
            .with("not", arrow(bool(), bool()), not_tm())
            .with("Unit", Term::typ(), unit_ty())
            .with("unit", Term::global("Unit"), Term::lam("P", true, |_| Term::lam("u", false, |u| u)))
            .with("id", id_ty(), id_tm())
    }
}

/// number of nodes of `comp` satisfying `pred`
pub fn count(comp: &Comp, pred: &impl Fn(&Comp) -> bool) -> usize {
    let here = usize::from(pred(comp));
    here + match comp {
        | Comp::Var(_) | Comp::Ref(_) | Comp::Nul | Comp::Chr(_) | Comp::Str(_) => 0,
        | Comp::Lam(_, body) | Comp::Eli(_, body) | Comp::Ins(_, body) => count(body, pred),
        | Comp::App(a, b) | Comp::Let(_, a, b) => count(a, pred) + count(b, pred),
    }
}

/// Compiles `entry` of `defs` and compares the entry's compiled form.
#[macro_export]
macro_rules! compile_case {
    ($name:ident, $defs:expr, $entry:expr, $want:expr) => {
        #[test]
        fn $name() {
            $crate::init();
            let defs = $defs;
            let entry = $crate::DefName::from($entry);
            match $crate::compile(&defs, &entry) {
                | Ok(out) => {
                    pretty_assertions::assert_eq!(out.get(&entry), Some(&$want));
                }
                | Err(err) => {
                    eprintln!("{}", err);
                    panic!("Error compiling {}", $entry);
                }
            }
        }
    };
}
