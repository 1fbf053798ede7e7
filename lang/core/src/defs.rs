use crate::syntax::*;
use indexmap::IndexMap;

/// A global definition: its declared type and its body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub name: DefName,
    pub ty: Tm,
    pub term: Tm,
}

/// Global definitions in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Defs {
    map: IndexMap<DefName, Definition>,
}

impl Defs {
    pub fn new() -> Self {
        Self::default()
    }
    /// adds a definition, replacing any previous one of the same name
    pub fn insert(&mut self, name: impl Into<DefName>, ty: Tm, term: Tm) -> Option<Definition> {
        let name = name.into();
        self.map.insert(name.clone(), Definition { name, ty, term })
    }
    pub fn with(mut self, name: impl Into<DefName>, ty: Tm, term: Tm) -> Self {
        self.insert(name, ty, term);
        self
    }
    pub fn get(&self, name: &DefName) -> Option<&Definition> {
        self.map.get(name)
    }
    pub fn contains(&self, name: &DefName) -> bool {
        self.map.contains_key(name)
    }
    pub fn names(&self) -> impl Iterator<Item = &DefName> {
        self.map.keys()
    }
}

impl FromIterator<Definition> for Defs {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        let map = iter.into_iter().map(|def| (def.name.clone(), def)).collect();
        Defs { map }
    }
}
