use crate::*;
use ember_statics::ElabConf;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// reduction steps allowed per definition; unbounded when absent
    pub fuel: Option<usize>,
    /// compare synthesized types with expected ones when checking
    pub subsumption: bool,
    /// check the definitions of one run in parallel
    pub parallel: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf { fuel: None, subsumption: true, parallel: false }
    }
}

impl Conf {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
    /// Reads the configuration at `path`, or the defaults if there is none.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            | Ok(s) => Conf::from_toml_str(&s),
            | Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "Using default configuration; suppose to find one at `{}`.",
                    path.display()
                );
                Ok(Conf::default())
            }
            | Err(err) => Err(err.into()),
        }
    }
    pub fn elab(&self) -> ElabConf {
        ElabConf { fuel: self.fuel, subsumption: self.subsumption }
    }
}
