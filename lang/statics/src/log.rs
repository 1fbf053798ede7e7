use crate::{syntax::*, *};
use std::fmt::Display;

impl<'d> Elaborator<'d> {
    pub(crate) fn log_term<S: Display>(&self, msg: S, tm: &Tm) {
        if ::log::log_enabled!(::log::Level::Trace) {
            let res = tm.ugly(&Formatter::new());
            ::log::trace!("[{}] {}", msg, res);
        }
    }
}
