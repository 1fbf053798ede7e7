#![allow(clippy::style)]

pub mod syntax {
    pub use ember_syntax::*;
}

/// Dependency order of global definitions.
pub mod sort;
pub use sort::order;
/// Recognizing built-in primitive types.
pub mod prims;
pub use prims::classify;

/// The bidirectional elaborator.
pub mod elab;
pub use elab::*;
/// Elaboration errors and their reports.
pub mod err;
pub use err::*;
/// Trace output.
mod log;

pub use ember_core::{Core, CoreError, Ctx, Definition, Defs};
