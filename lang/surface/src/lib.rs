#![allow(clippy::style)]

/// Character and string literals as they are encoded in terms.
pub mod lit;
pub use lit::*;

/// Removal of source locations.
pub mod unloc;
pub use unloc::unlocate;

pub mod syntax {
    pub use ember_syntax::*;
}
