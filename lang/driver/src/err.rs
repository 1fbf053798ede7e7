use crate::syntax::DefName;
use ember_statics::{ElabError, ElabErrorEntry};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfError(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    ConfWriteError(#[from] toml::ser::Error),
    #[error("Undefined reference: `{0}`")]
    LookupFailure(DefName),
    #[error("{0}")]
    ElabError(String),
}

impl From<ElabErrorEntry> for BuildError {
    fn from(entry: ElabErrorEntry) -> Self {
        match &entry.error {
            | ElabError::LookupFailure(name) => BuildError::LookupFailure(name.clone()),
            | _ => BuildError::ElabError(entry.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
