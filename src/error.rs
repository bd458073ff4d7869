//! Error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input, e.g. event columns of different length
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested correction is not part of the correction set
    #[error("No correction for {id}")]
    Configuration { id: String },

    /// A correction could not be evaluated for the given inputs
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// I/O error while loading corrections
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
