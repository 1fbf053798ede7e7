#![allow(clippy::style)]

pub mod term;
pub use term::*;

pub mod comp;
pub use comp::*;

pub mod prims;
pub use prims::Prim;

/// Substitution and abstraction over scopes.
pub mod subst;
/// HOAS-style constructors for typed terms.
pub mod construct;

pub mod fmt;
pub use fmt::{Formatter, Pretty, Ugly};

use derive_more::{Display, From};

/* ---------------------------------- Names --------------------------------- */

/// display name of a binder
#[derive(From, Display, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarName(pub String);
/// name of a global definition
#[derive(From, Display, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DefName(pub String);

impl From<&str> for VarName {
    fn from(s: &str) -> Self {
        VarName(s.to_owned())
    }
}
impl From<&str> for DefName {
    fn from(s: &str) -> Self {
        DefName(s.to_owned())
    }
}
impl AsRef<str> for VarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl AsRef<str> for DefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
