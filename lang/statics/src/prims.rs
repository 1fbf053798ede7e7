use crate::{syntax::*, *};

/// The first primitive whose name is definitionally equal to `ty`.
pub fn classify(core: &mut Core<'_>, ty: &Tm) -> ember_core::Result<Option<Prim>> {
    for prim in Prim::ALL {
        if core.equal(&Term::global(prim.name()), ty)? {
            return Ok(Some(prim));
        }
    }
    Ok(None)
}

impl<'d> Elaborator<'d> {
    #[track_caller]
    pub fn classify(&mut self, ty: &Tm) -> Result<Option<Prim>> {
        let res = classify(&mut self.core, ty);
        self.lift(res, std::panic::Location::caller())
    }
}
