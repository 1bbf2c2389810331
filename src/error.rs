//! Error types

use thiserror::Error;

/// Filter errors
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Reading stdin or writing stdout failed
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
