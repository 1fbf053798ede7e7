use std::fmt::Display;

/// Built-in types whose values have a native runtime representation.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Prim {
    Unit,
    Bool,
    Nat,
    Bits,
    U16,
    U32,
    U64,
    F64,
    String,
}

impl Prim {
    /// the registry, in classification order
    pub const ALL: [Prim; 9] = [
        Prim::Unit,
        Prim::Bool,
        Prim::Nat,
        Prim::Bits,
        Prim::U16,
        Prim::U32,
        Prim::U64,
        Prim::F64,
        Prim::String,
    ];
    /// the definition name the primitive is recognized by
    pub fn name(&self) -> &'static str {
        match self {
            | Prim::Unit => "Unit",
            | Prim::Bool => "Bool",
            | Prim::Nat => "Nat",
            | Prim::Bits => "Bits",
            | Prim::U16 => "U16",
            | Prim::U32 => "U32",
            | Prim::U64 => "U64",
            | Prim::F64 => "F64",
            | Prim::String => "String",
        }
    }
}

impl Display for Prim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
