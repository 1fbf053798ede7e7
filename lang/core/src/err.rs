use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("ran out of fuel after {limit} reduction steps")]
    OutOfFuel { limit: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
