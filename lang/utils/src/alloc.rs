/* ---------------------------------- Index --------------------------------- */

pub use crate::new_key_type;

pub trait IndexLike: Clone + Copy + Eq + std::hash::Hash {
    type Meta;
    fn new(meta: Self::Meta, idx: usize) -> Self;
    fn meta(&self) -> &Self::Meta;
    fn index(&self) -> usize;
}

/* -------------------------------- Allocator ------------------------------- */

/// Issues consecutive indices, all tagged with the same metadata.
#[derive(Debug, Clone)]
pub struct IndexAlloc<Meta>(Meta, usize);
impl IndexAlloc<()> {
    pub fn new() -> Self {
        IndexAlloc((), 0)
    }
}
impl Default for IndexAlloc<()> {
    fn default() -> Self {
        Self::new()
    }
}
impl<Meta: Copy> IndexAlloc<Meta> {
    pub fn with_meta(meta: Meta) -> Self {
        IndexAlloc(meta, 0)
    }
    pub fn alloc<Id: IndexLike<Meta = Meta>>(&mut self) -> Id {
        let old = self.1;
        self.1 += 1;
        Id::new(self.0, old)
    }
}
/// Hands out allocators whose indices never collide with each other.
#[derive(Debug, Default)]
pub struct GlobalAlloc(IndexAlloc<()>);
impl GlobalAlloc {
    pub fn new() -> Self {
        GlobalAlloc(IndexAlloc::new())
    }
    pub fn alloc(&mut self) -> IndexAlloc<usize> {
        let group = self.0.1;
        self.0.1 += 1;
        IndexAlloc(group, 0)
    }
}

#[macro_export]
macro_rules! new_key_type {
    ( $(#[$outer:meta])* $vis:vis struct $name:ident < $meta:ty > ; $($rest:tt)* ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis struct $name($meta, usize);

        impl $crate::alloc::IndexLike for $name {
            type Meta = $meta;
            fn new(meta: Self::Meta, idx: usize) -> Self {
                Self(meta, idx)
            }
            fn meta(&self) -> &Self::Meta {
                &self.0
            }
            fn index(&self) -> usize {
                self.1
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:?}, {})", stringify!($name), self.0, self.1)
            }
        }

        $crate::new_key_type!($($rest)*);
    };

    // a nice default only for compiler use
    ( $(#[$outer:meta])* $vis:vis struct $name:ident ; $($rest:tt)* ) => {
        $crate::new_key_type!( $(#[$outer])* $vis struct $name<usize> ; $($rest)* );
    };

    () => {}
}
