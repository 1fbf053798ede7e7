use std::fmt::{Debug, Display};

/// A byte range in some source text.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    span1: (usize, usize),
}

impl Span {
    pub fn new(l: usize, r: usize) -> Span {
        Span { span1: (l, r) }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (l, r) = self.span1;
        write!(f, "{}..{}", l, r)
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self)
    }
}
