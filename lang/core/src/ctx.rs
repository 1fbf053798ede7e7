use crate::syntax::*;

/// The typing context: free variables and their types, innermost last.
#[derive(Clone, Debug, Default)]
pub struct Ctx {
    vars: im::Vector<(Var, Tm)>,
}

impl Ctx {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn extend(&self, var: Var, ty: Tm) -> Self {
        let mut vars = self.vars.clone();
        vars.push_back((var, ty));
        Ctx { vars }
    }
    pub fn size(&self) -> usize {
        self.vars.len()
    }
    pub fn lookup(&self, id: &VarId) -> Option<&Tm> {
        self.vars.iter().rev().find(|(var, _)| &var.id == id).map(|(_, ty)| ty)
    }
}
