use crate::codec::FormatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed ticket file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ticket #{index}, field '{field}': {source}")]
    Field {
        index: usize,
        field: &'static str,
        source: FormatError,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no ticket prices to compute statistics over")]
pub struct EmptyInputError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
}

pub type Result<T> = std::result::Result<T, Error>;
