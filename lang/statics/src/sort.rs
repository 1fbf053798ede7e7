use crate::{syntax::*, *};
use std::collections::HashSet;

struct Sorter<'d> {
    defs: &'d Defs,
    visited: HashSet<DefName>,
    order: Vec<DefName>,
}

impl<'d> Sorter<'d> {
    fn go(&mut self, tm: &Tm) {
        match tm.as_ref() {
            | Term::Ref(name) => {
                if self.visited.contains(name) {
                    return;
                }
                // unknown names are left for the elaborator to report
                let Some(def) = self.defs.get(name) else { return };
                self.visited.insert(name.clone());
                self.go(&def.term);
                self.order.push(name.clone());
            }
            | Term::Lam(Lam { body, .. }) => self.go(&body.body),
            | Term::Let(Let { expr, body, .. }) => {
                self.go(expr);
                self.go(&body.body);
            }
            | Term::App(App { func, argm, .. }) => {
                self.go(func);
                self.go(argm);
            }
            | Term::Ann(Ann { expr, .. }) | Term::Loc(Loc { expr, .. }) => self.go(expr),
            | Term::Bound(_) | Term::Var(_) | Term::Typ(_) | Term::All(_) => {}
        }
    }
}

/// Every definition transitively referenced by the body of `entry`, each one
/// after everything it refers to. `entry` itself is not included.
pub fn order(defs: &Defs, entry: &DefName) -> Vec<DefName> {
    let Some(def) = defs.get(entry) else { return Vec::new() };
    let mut sorter = Sorter { defs, visited: HashSet::new(), order: Vec::new() };
    sorter.visited.insert(entry.clone());
    sorter.go(&def.term);
    ::log::debug!(
        "[order] {}: {}",
        entry,
        sorter.order.iter().map(|name| name.0.as_str()).collect::<Vec<_>>().join(", ")
    );
    sorter.order
}
