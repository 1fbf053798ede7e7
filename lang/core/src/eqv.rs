use crate::{syntax::*, *};
use std::{collections::HashSet, sync::Arc};

impl<'d> Core<'d> {
    /// Decides whether `a` and `b` are definitionally equal.
    ///
    /// Pairs of head normal forms under comparison are assumed equal, so
    /// comparing recursive self types terminates.
    pub fn equal(&mut self, a: &Tm, b: &Tm) -> Result<bool> {
        self.equal_under(&mut HashSet::new(), a, b)
    }

    fn equal_under(&mut self, seen: &mut HashSet<(Tm, Tm)>, a: &Tm, b: &Tm) -> Result<bool> {
        if Arc::ptr_eq(a, b) || a == b {
            return Ok(true);
        }
        let a = self.reduce(a)?;
        let b = self.reduce(b)?;
        if a == b {
            return Ok(true);
        }
        let key = (a.clone(), b.clone());
        if seen.contains(&key) {
            return Ok(true);
        }
        log::trace!("[eqv] {} == {}", a, b);
        seen.insert(key.clone());
        let res = self.congruent(seen, &a, &b);
        seen.remove(&key);
        res
    }

    fn congruent(&mut self, seen: &mut HashSet<(Tm, Tm)>, a: &Tm, b: &Tm) -> Result<bool> {
        match (a.as_ref(), b.as_ref()) {
            | (Term::Bound(i), Term::Bound(j)) => Ok(i == j),
            | (Term::Var(x), Term::Var(y)) => Ok(x.id == y.id),
            | (Term::Ref(x), Term::Ref(y)) => Ok(x == y),
            | (Term::Typ(_), Term::Typ(_)) => Ok(true),
            | (Term::All(a), Term::All(b)) => {
                if !self.equal_under(seen, &a.bind, &b.bind)? {
                    return Ok(false);
                }
                let s = Term::var(self.fresh(&a.self_name));
                let x = Term::var(self.fresh(&a.name));
                let args = [s, x];
                self.equal_under(seen, &a.body.instantiate(&args), &b.body.instantiate(&args))
            }
            | (Term::Lam(a), Term::Lam(b)) => {
                if a.eras != b.eras {
                    return Ok(false);
                }
                let x = Term::var(self.fresh(&a.name));
                let args = [x];
                self.equal_under(seen, &a.body.instantiate(&args), &b.body.instantiate(&args))
            }
            | (Term::App(a), Term::App(b)) => Ok(a.eras == b.eras
                && self.equal_under(seen, &a.func, &b.func)?
                && self.equal_under(seen, &a.argm, &b.argm)?),
            | _ => Ok(false),
        }
    }
}
