use crate::{syntax::*, *};
use ember_statics::{Elaborator, order};
use ember_utils::alloc::{GlobalAlloc, IndexAlloc};
use indexmap::IndexMap;
use rayon::prelude::*;

/// The compiled definitions of one run, in dependency order; the entry
/// comes last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub names: Vec<DefName>,
    pub defs: IndexMap<DefName, RcComp>,
}

impl Compiled {
    pub fn get(&self, name: &DefName) -> Option<&RcComp> {
        self.defs.get(name)
    }
    pub fn entry(&self) -> Option<&DefName> {
        self.names.last()
    }
}

/// Compiles `entry` with the default configuration.
pub fn compile(defs: &Defs, entry: &DefName) -> Result<Compiled> {
    Driver::default().compile(defs, entry)
}

#[derive(Clone, Debug, Default)]
pub struct Driver {
    pub conf: Conf,
}

impl Driver {
    pub fn new(conf: Conf) -> Self {
        Driver { conf }
    }

    pub fn compile(&self, defs: &Defs, entry: &DefName) -> Result<Compiled> {
        if !defs.contains(entry) {
            return Err(BuildError::LookupFailure(entry.clone()));
        }
        let mut names = order(defs, entry);
        names.push(entry.clone());

        // each definition draws its variables from its own group
        let mut alloc = GlobalAlloc::new();
        let jobs = names.iter().map(|name| (name, alloc.alloc())).collect::<Vec<_>>();
        let conf = self.conf.elab();
        let check = |(name, alloc): (&DefName, IndexAlloc<usize>)| -> Result<RcComp> {
            let mut elab = Elaborator::with_alloc(defs, alloc, conf.clone());
            let comp = elab.definition(name)?;
            log::debug!("[check] {}: {} reduction steps", name, elab.core.spent());
            Ok(comp)
        };
        let comps = if self.conf.parallel {
            jobs.into_par_iter().map(check).collect::<Result<Vec<_>>>()?
        } else {
            jobs.into_iter().map(check).collect::<Result<Vec<_>>>()?
        };

        let defs = names.iter().cloned().zip(comps).collect::<IndexMap<_, _>>();
        log::info!("[compile] {}: {} definitions", entry, names.len());
        Ok(Compiled { names, defs })
    }

    /// Compiles every entry on its own, in parallel; results follow the order
    /// of `entries`.
    pub fn compile_many(&self, defs: &Defs, entries: &[DefName]) -> Vec<Result<Compiled>> {
        entries.par_iter().map(|entry| self.compile(defs, entry)).collect()
    }
}
