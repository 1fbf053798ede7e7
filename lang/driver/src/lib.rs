//! Compiles a definition and everything it depends on.

pub mod conf;
pub mod err;
pub mod compile;


pub use compile::{Compiled, Driver, compile};
pub use conf::Conf;
pub use err::*;

pub mod syntax {
    pub use ember_syntax::*;
}
pub use ember_core::{Definition, Defs};
