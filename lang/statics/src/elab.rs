use crate::{syntax::*, *};
use ember_surface::{stringify_chr, stringify_str, unlocate};
use ember_utils::alloc::IndexAlloc;

#[derive(Clone, Debug)]
pub struct ElabConf {
    /// reduction steps allowed per definition; `None` is unbounded
    pub fuel: Option<usize>,
    /// whether checking a synthesized term compares its type with the expected one
    pub subsumption: bool,
}

impl Default for ElabConf {
    fn default() -> Self {
        ElabConf { fuel: None, subsumption: true }
    }
}

/// An elaborated term: its compiled form and its type.
#[derive(Clone, Debug)]
pub struct Elab {
    pub comp: RcComp,
    pub ty: Tm,
}

#[derive(Clone, Copy, Debug)]
pub enum Switch<Ann> {
    Syn,
    Ana(Ann),
}

#[derive(Clone, Debug)]
pub enum ElabTask {
    Definition(DefName),
    Term(Tm, Switch<Tm>),
}

pub struct Elaborator<'d> {
    pub core: Core<'d>,
    pub conf: ElabConf,
    /// call stack for debugging the elaborator and error tracking
    pub stack: im::Vector<ElabTask>,
}

impl<'d> Elaborator<'d> {
    pub fn new(defs: &'d Defs, conf: ElabConf) -> Self {
        Self::with_alloc(defs, IndexAlloc::with_meta(0), conf)
    }
    pub fn with_alloc(defs: &'d Defs, alloc: IndexAlloc<usize>, conf: ElabConf) -> Self {
        let core = Core::new(defs, alloc, conf.fuel);
        Elaborator { core, conf, stack: im::Vector::new() }
    }
    /// Run `with` and restore the task stack afterwards.
    #[inline]
    pub(crate) fn guarded<R>(&mut self, with: impl FnOnce(&mut Self) -> R) -> R {
        let stack = self.stack.clone();
        let res = with(self);
        self.stack = stack;
        res
    }
    #[track_caller]
    pub fn reduce(&mut self, tm: &Tm) -> Result<Tm> {
        let res = self.core.reduce(tm);
        self.lift(res, std::panic::Location::caller())
    }
    #[track_caller]
    pub fn equal(&mut self, a: &Tm, b: &Tm) -> Result<bool> {
        let res = self.core.equal(a, b);
        self.lift(res, std::panic::Location::caller())
    }
}

/* -------------------------------- Definition ------------------------------- */

impl<'d> Elaborator<'d> {
    /// Checks a global definition against its declared type at the empty
    /// context, with every location removed first.
    pub fn definition(&mut self, name: &DefName) -> Result<RcComp> {
        self.guarded(|el| {
            el.stack.push_back(ElabTask::Definition(name.clone()));
            let defs = el.core.defs;
            let Some(def) = defs.get(name) else {
                return el.err(ElabError::LookupFailure(name.clone()), std::panic::Location::caller());
            };
            ::log::debug!("[definition] {}", name);
            let ty = unlocate(&def.ty);
            let term = unlocate(&def.term);
            Ok(el.check(&term, &ty, &Ctx::new())?.comp)
        })
    }
}

/* ---------------------------------- Infer ---------------------------------- */

impl<'d> Elaborator<'d> {
    pub fn infer(&mut self, tm: &Tm, ctx: &Ctx) -> Result<Elab> {
        self.guarded(|el| {
            el.stack.push_back(ElabTask::Term(tm.clone(), Switch::Syn));
            el.log_term("infer", tm);
            el.infer_inner(tm, ctx)
        })
    }

    fn infer_inner(&mut self, tm: &Tm, ctx: &Ctx) -> Result<Elab> {
        match tm.as_ref() {
            | Term::Bound(Bound(idx)) => {
                self.err(ElabError::DanglingIndex(*idx), std::panic::Location::caller())
            }
            | Term::Var(var) => {
                let Some(ty) = ctx.lookup(&var.id) else {
                    return self.err(
                        ElabError::UnboundVariable(var.clone()),
                        std::panic::Location::caller(),
                    );
                };
                Ok(Elab { comp: Comp::var(var.name.clone()), ty: ty.clone() })
            }
            | Term::Ref(name) => {
                let Some(def) = self.core.defs.get(name) else {
                    return self
                        .err(ElabError::LookupFailure(name.clone()), std::panic::Location::caller());
                };
                Ok(Elab { comp: Comp::global(name.clone()), ty: def.ty.clone() })
            }
            | Term::Typ(_) | Term::All(_) => Ok(Elab { comp: Comp::nul(), ty: Term::typ() }),
            | Term::Lam(_) => self
                .err(ElabError::CannotInferLambda { term: tm.clone() }, std::panic::Location::caller()),
            | Term::App(App { func, argm, eras }) => {
                let Elab { comp: func_comp, ty: func_ty } = self.infer(func, ctx)?;
                let func_ty = self.reduce(&func_ty)?;
                let Term::All(All { bind, body, .. }) = func_ty.as_ref() else {
                    return self.err(
                        ElabError::NonFunctionApplication { term: tm.clone(), ty: func_ty.clone() },
                        std::panic::Location::caller(),
                    );
                };
                let argm_comp = self.check(argm, bind, ctx)?.comp;
                let self_var = Term::ann(true, func.clone(), func_ty.clone());
                let name_var = Term::ann(true, argm.clone(), bind.clone());
                let ty = body.instantiate(&[self_var, name_var]);
                let mut comp = func_comp;
                if let Some(prim) = self.classify(&func_ty)? {
                    comp = Comp::eli(prim, comp);
                }
                if !eras {
                    comp = Comp::app(comp, argm_comp);
                }
                Ok(Elab { comp, ty })
            }
            | Term::Let(term) => self.elab_let(term, Switch::Syn, ctx),
            | Term::Ann(Ann { expr, ty, .. }) => self.check(expr, ty, ctx),
            | Term::Loc(Loc { expr, .. }) => self.infer(expr, ctx),
        }
    }
}

/* ---------------------------------- Check ---------------------------------- */

impl<'d> Elaborator<'d> {
    pub fn check(&mut self, tm: &Tm, ty: &Tm, ctx: &Ctx) -> Result<Elab> {
        self.guarded(|el| {
            el.stack.push_back(ElabTask::Term(tm.clone(), Switch::Ana(ty.clone())));
            el.log_term("check", tm);
            el.check_inner(tm, ty, ctx)
        })
    }

    fn check_inner(&mut self, tm: &Tm, ty: &Tm, ctx: &Ctx) -> Result<Elab> {
        if let Some(c) = stringify_chr(tm) {
            return Ok(Elab { comp: Comp::chr(c), ty: Term::global("Char") });
        }
        if let Some(s) = stringify_str(tm) {
            return Ok(Elab { comp: Comp::str(s), ty: Term::global("String") });
        }
        let typv = self.reduce(ty)?;
        if let Term::Typ(_) = typv.as_ref() {
            return Ok(Elab { comp: Comp::nul(), ty: Term::typ() });
        }
        match tm.as_ref() {
            | Term::Lam(Lam { name, eras, body }) => {
                let Term::All(All { bind, body: ty_body, .. }) = typv.as_ref() else {
                    return self.err(
                        ElabError::LambdaNotFunction { term: tm.clone(), ty: typv.clone() },
                        std::panic::Location::caller(),
                    );
                };
                let var = self.core.fresh(name);
                let self_var = Term::ann(true, tm.clone(), ty.clone());
                let name_var = Term::ann(true, Term::var(var.clone()), bind.clone());
                let body_ty = ty_body.instantiate(&[self_var, name_var.clone()]);
                let body_ctx = ctx.extend(var, bind.clone());
                let body_comp = self.check(&body.instantiate(&[name_var]), &body_ty, &body_ctx)?.comp;
                let mut comp = if *eras { body_comp } else { Comp::lam(name.clone(), body_comp) };
                if let Some(prim) = self.classify(ty)? {
                    comp = Comp::ins(prim, comp);
                }
                Ok(Elab { comp, ty: ty.clone() })
            }
            | Term::Let(term) => self.elab_let(term, Switch::Ana(ty), ctx),
            | Term::Loc(Loc { expr, .. }) => self.check(expr, ty, ctx),
            | _ => {
                let Elab { comp, ty: found } = self.infer(tm, ctx)?;
                if self.conf.subsumption && !self.equal(&found, ty)? {
                    return self.err(
                        ElabError::TypeMismatch { expected: ty.clone(), found },
                        std::panic::Location::caller(),
                    );
                }
                Ok(Elab { comp, ty: ty.clone() })
            }
        }
    }

    /// A duplicable let stays a binding in the output; any other let is
    /// inlined into its body.
    fn elab_let(&mut self, term: &Let, switch: Switch<&Tm>, ctx: &Ctx) -> Result<Elab> {
        let Let { name, dups, expr, body } = term;
        let Elab { comp: expr_comp, ty: expr_ty } = self.infer(expr, ctx)?;
        let var = self.core.fresh(name);
        let stand_in = if *dups {
            Term::ann(true, Term::var(var.clone()), expr_ty.clone())
        } else {
            Term::ann(true, expr.clone(), expr_ty.clone())
        };
        let body_ctx = ctx.extend(var, expr_ty);
        let body = body.instantiate(&[stand_in]);
        let Elab { comp: body_comp, ty } = match switch {
            | Switch::Syn => self.infer(&body, &body_ctx)?,
            | Switch::Ana(ty) => self.check(&body, ty, &body_ctx)?,
        };
        let comp = if *dups { Comp::let_(name.clone(), expr_comp, body_comp) } else { body_comp };
        Ok(Elab { comp, ty })
    }
}
