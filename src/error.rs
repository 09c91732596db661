use std::{num::ParseIntError, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?}:{line}: not an integer: {content:?} ({source})")]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        content: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
