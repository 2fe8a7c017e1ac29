use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running a conversion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open input table {path:?}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read line {line} of the input table: {source}")]
    InputRead {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("cannot write the LaTeX output: {source}")]
    OutputWrite {
        #[source]
        source: io::Error,
    },

    #[error("invalid column separator {separator:?}: {reason}")]
    InvalidSeparator { separator: String, reason: String },

    #[error("overwrite confirmation failed: {0}")]
    Prompt(#[source] io::Error),
}

impl Error {
    pub(crate) fn output(source: io::Error) -> Self {
        Error::OutputWrite { source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
