//! The formatter traits.

use crate::*;
use ember_utils::alloc::IndexLike;
use pretty::RcDoc;

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Ugly<'a, Fmter> {
    fn ugly(&self, f: &'a Fmter) -> String;
}

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Pretty<'a, Fmter> {
    fn pretty(&self, f: &'a Fmter) -> RcDoc<'a>;
}

pub struct Formatter {
    pub indent: isize,
    pub width: usize,
}

impl Formatter {
    pub fn new() -> Self {
        Formatter { indent: 2, width: usize::MAX }
    }
    fn render(&self, doc: RcDoc<'_>) -> String {
        let mut s = String::new();
        doc.render_fmt(self.width, &mut s).expect("writing into a String");
        s
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/* ---------------------------------- Term ---------------------------------- */

/// Binder names of the scopes around the term being printed.
struct Names(Vec<VarName>);

impl Names {
    fn under<R>(&mut self, names: &[&VarName], f: impl FnOnce(&mut Self) -> R) -> R {
        let len = self.0.len();
        self.0.extend(names.iter().map(|&name| name.clone()));
        let res = f(self);
        self.0.truncate(len);
        res
    }
    fn bound(&self, idx: usize) -> String {
        match self.0.len().checked_sub(idx + 1).and_then(|pos| self.0.get(pos)) {
            | Some(name) => name.to_string(),
            | None => format!("^{}", idx),
        }
    }
}

fn atomic(tm: &Term) -> bool {
    match tm {
        | Term::Bound(_) | Term::Var(_) | Term::Ref(_) | Term::Typ(_) | Term::App(_) => true,
        | Term::Ann(_) => true,
        | Term::Loc(Loc { expr, .. }) => atomic(expr),
        | Term::All(_) | Term::Lam(_) | Term::Let(_) => false,
    }
}

fn term_doc<'a>(f: &'a Formatter, names: &mut Names, tm: &Term) -> RcDoc<'a> {
    match tm {
        | Term::Bound(Bound(idx)) => RcDoc::text(names.bound(*idx)),
        | Term::Var(var) => RcDoc::text(var.ugly(f)),
        | Term::Ref(name) => RcDoc::text(name.to_string()),
        | Term::Typ(Typ) => RcDoc::text("Type"),
        | Term::All(All { self_name, name, bind, body }) => {
            let bind = term_doc(f, names, bind);
            let body = names.under(&[self_name, name], |names| term_doc(f, names, &body.body));
            let head = if self_name.0 == "_" {
                RcDoc::nil()
            } else {
                RcDoc::text(format!("%{}", self_name))
            };
            RcDoc::concat([
                head,
                RcDoc::text(format!("({}: ", name)),
                bind,
                RcDoc::text(")"),
                RcDoc::space(),
                RcDoc::text("->"),
                RcDoc::concat([RcDoc::line(), body]).nest(f.indent).group(),
            ])
            .group()
        }
        | Term::Lam(Lam { name, eras, body }) => {
            let body = names.under(&[name], |names| term_doc(f, names, &body.body));
            let param = if *eras { format!("<{}>", name) } else { format!("({})", name) };
            RcDoc::concat([
                RcDoc::text(param),
                RcDoc::space(),
                RcDoc::text("=>"),
                RcDoc::concat([RcDoc::line(), body]).nest(f.indent).group(),
            ])
            .group()
        }
        | Term::App(App { func, argm, eras }) => {
            let func_doc = term_doc(f, names, func);
            let func_doc = if atomic(func) {
                func_doc
            } else {
                RcDoc::concat([RcDoc::text("("), func_doc, RcDoc::text(")")])
            };
            let (open, close) = if *eras { ("<", ">") } else { ("(", ")") };
            RcDoc::concat([
                func_doc,
                RcDoc::text(open),
                term_doc(f, names, argm),
                RcDoc::text(close),
            ])
        }
        | Term::Let(Let { name, dups, expr, body }) => {
            let expr = term_doc(f, names, expr);
            let body = names.under(&[name], |names| term_doc(f, names, &body.body));
            let keyword = if *dups { "dup" } else { "let" };
            RcDoc::concat([
                RcDoc::text(format!("{} {} =", keyword, name)),
                RcDoc::concat([RcDoc::line(), expr]).nest(f.indent).group(),
                RcDoc::text(";"),
                RcDoc::line(),
                body,
            ])
            .group()
        }
        | Term::Ann(Ann { done: _, expr, ty }) => RcDoc::concat([
            RcDoc::text("("),
            term_doc(f, names, expr),
            RcDoc::space(),
            RcDoc::text("::"),
            RcDoc::space(),
            term_doc(f, names, ty),
            RcDoc::text(")"),
        ]),
        | Term::Loc(Loc { expr, .. }) => term_doc(f, names, expr),
    }
}

impl<'a> Pretty<'a, Formatter> for Term {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        term_doc(f, &mut Names(Vec::new()), self)
    }
}

impl<'a> Ugly<'a, Formatter> for Term {
    fn ugly(&self, f: &'a Formatter) -> String {
        f.render(self.pretty(f))
    }
}

impl<'a> Ugly<'a, Formatter> for Var {
    fn ugly(&self, _f: &'a Formatter) -> String {
        format!("{}#{}", self.name, self.id.index())
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ugly(&Formatter::new()))
    }
}

/* ---------------------------------- Comp ---------------------------------- */

impl<'a> Pretty<'a, Formatter> for Comp {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        match self {
            | Comp::Var(name) => RcDoc::text(name.to_string()),
            | Comp::Ref(name) => RcDoc::text(name.to_string()),
            | Comp::Nul => RcDoc::text("null"),
            | Comp::Lam(name, body) => RcDoc::concat([
                RcDoc::text(format!("({})", name)),
                RcDoc::space(),
                RcDoc::text("=>"),
                RcDoc::concat([RcDoc::line(), body.pretty(f)]).nest(f.indent).group(),
            ])
            .group(),
            | Comp::App(func, argm) => {
                let func_doc = match func.as_ref() {
                    | Comp::Lam(..) | Comp::Let(..) => {
                        RcDoc::concat([RcDoc::text("("), func.pretty(f), RcDoc::text(")")])
                    }
                    | _ => func.pretty(f),
                };
                RcDoc::concat([func_doc, RcDoc::text("("), argm.pretty(f), RcDoc::text(")")])
            }
            | Comp::Let(name, expr, body) => RcDoc::concat([
                RcDoc::text(format!("let {} =", name)),
                RcDoc::concat([RcDoc::line(), expr.pretty(f)]).nest(f.indent).group(),
                RcDoc::text(";"),
                RcDoc::line(),
                body.pretty(f),
            ])
            .group(),
            | Comp::Eli(prim, term) => RcDoc::concat([
                RcDoc::text(format!("elim_{}(", prim.name().to_lowercase())),
                term.pretty(f),
                RcDoc::text(")"),
            ]),
            | Comp::Ins(prim, term) => RcDoc::concat([
                RcDoc::text(format!("inst_{}(", prim.name().to_lowercase())),
                term.pretty(f),
                RcDoc::text(")"),
            ]),
            | Comp::Chr(c) => RcDoc::text(format!("'{}'", c.escape_default())),
            | Comp::Str(s) => RcDoc::text(format!("\"{}\"", s.escape_default())),
        }
    }
}

impl<'a> Ugly<'a, Formatter> for Comp {
    fn ugly(&self, f: &'a Formatter) -> String {
        f.render(self.pretty(f))
    }
}

impl std::fmt::Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ugly(&Formatter::new()))
    }
}
