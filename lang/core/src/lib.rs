#![allow(clippy::style)]

pub mod defs;
pub use defs::*;
pub mod ctx;
pub use ctx::*;
pub mod err;
pub use err::*;

/// Weak head reduction.
pub mod norm;
/// Definitional equality.
pub mod eqv;

pub mod syntax {
    pub use ember_syntax::*;
}

use ember_utils::alloc::IndexAlloc;
use syntax::*;

/// The calculus shared by every pass that needs to look at types: fresh
/// variables, reduction budget and the global definitions.
pub struct Core<'d> {
    pub defs: &'d Defs,
    fresh: IndexAlloc<usize>,
    fuel: norm::Fuel,
}

impl<'d> Core<'d> {
    pub fn new(defs: &'d Defs, fresh: IndexAlloc<usize>, fuel: Option<usize>) -> Self {
        Core { defs, fresh, fuel: norm::Fuel::new(fuel) }
    }
    /// a variable no other term of this run mentions
    pub fn fresh(&mut self, name: &VarName) -> Var {
        Var { id: self.fresh.alloc(), name: name.clone() }
    }
    /// reduction steps taken so far
    pub fn spent(&self) -> usize {
        self.fuel.used
    }
}
