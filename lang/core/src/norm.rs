use crate::{syntax::*, *};
use std::sync::Arc;

/// Budget of unfolding and beta steps.
#[derive(Clone, Debug)]
pub struct Fuel {
    pub limit: Option<usize>,
    pub used: usize,
}

impl Fuel {
    pub fn new(limit: Option<usize>) -> Self {
        Fuel { limit, used: 0 }
    }
    pub fn burn(&mut self) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                return Err(CoreError::OutOfFuel { limit });
            }
        }
        self.used += 1;
        Ok(())
    }
}

impl<'d> Core<'d> {
    /// Reduces `tm` to weak head normal form.
    ///
    /// Annotations and locations are dropped, known globals are unfolded,
    /// redexes and lets are contracted. Unknown globals stay neutral.
    pub fn reduce(&mut self, tm: &Tm) -> Result<Tm> {
        let mut tm = tm.clone();
        loop {
            let next = match tm.as_ref() {
                | Term::Ann(Ann { expr, .. }) | Term::Loc(Loc { expr, .. }) => expr.clone(),
                | Term::Ref(name) => match self.defs.get(name) {
                    | Some(def) => {
                        self.fuel.burn()?;
                        log::trace!("[unfold] {}", name);
                        def.term.clone()
                    }
                    | None => return Ok(tm),
                },
                | Term::Let(Let { expr, body, .. }) => {
                    self.fuel.burn()?;
                    body.instantiate(&[expr.clone()])
                }
                | Term::App(App { func, argm, eras }) => {
                    let head = self.reduce(func)?;
                    match head.as_ref() {
                        | Term::Lam(Lam { body, .. }) => {
                            self.fuel.burn()?;
                            body.instantiate(&[argm.clone()])
                        }
                        | _ if Arc::ptr_eq(&head, func) => return Ok(tm),
                        | _ => {
                            return Ok(Arc::new(
                                App { func: head, argm: argm.clone(), eras: *eras }.into(),
                            ));
                        }
                    }
                }
                | Term::Bound(_)
                | Term::Var(_)
                | Term::Typ(_)
                | Term::All(_)
                | Term::Lam(_) => return Ok(tm),
            };
            tm = next;
        }
    }
}
