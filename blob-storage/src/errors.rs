use std::io;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("invalid blob name: {0:?}")]
    InvalidName(String),

    #[error("{0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Maps a raw I/O failure on `name` to `NotFound` when the file is simply absent.
    pub(crate) fn from_io(name: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(name.to_string())
        } else {
            StoreError::Io(err)
        }
    }
}
