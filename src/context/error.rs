use std::{
    io,
    path::PathBuf,
    string::FromUtf8Error,
};

use thiserror::Error;

/// Failures that abort a whole run.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("root directory {path:?} is not accessible: {source}")]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("root {path:?} is not a directory")]
    RootNotDirectory { path: PathBuf },

    #[error("directory traversal failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("could not read file list {path:?}: {source}")]
    ListRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file list line {line}: {message}")]
    ListSyntax { line: usize, message: String },

    #[error("invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("could not write output {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures reading a single entry. These never abort a run; they end up
/// inside the placeholder body of that entry's record.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("could not decode as UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("file is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
}
