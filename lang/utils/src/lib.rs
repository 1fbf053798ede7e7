#![allow(clippy::style)]

pub mod alloc;
pub mod span;
