//! Error types for rename-core

use std::path::PathBuf;

/// Result type for rename-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building manifests or applying renames
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two indices of one manifest point at the same path
    #[error("Repeated path {path} at indices {first} and {second}, will not continue")]
    DuplicatePath {
        path: PathBuf,
        first: usize,
        second: usize,
    },

    /// A path whose manifest line would not decode back to the same path
    #[error("Path {path} at index {index} cannot be written to the manifest ({reason}), refusing to change files")]
    UnencodablePath {
        index: usize,
        path: PathBuf,
        reason: &'static str,
    },

    /// Original and edited manifests disagree on their index sets
    #[error(
        "Original paths and new paths don't have the same indexes (missing: {missing:?}, unexpected: {unexpected:?}), refusing to change files"
    )]
    KeySetMismatch {
        missing: Vec<usize>,
        unexpected: Vec<usize>,
    },

    /// A rename target was occupied when the rename was attempted
    #[error("File {path} already exists")]
    FileExists { path: PathBuf },

    /// The editing round trip failed or was rejected
    #[error("Editor aborted: {reason}, refusing to change files")]
    EditorAborted { reason: String },

    /// Nothing was selected for renaming
    #[error("No files given to rename")]
    NoFiles,

    /// Filesystem error from rename-fs
    #[error(transparent)]
    Fs(rename_fs::Error),
}

impl Error {
    pub fn editor_aborted(reason: impl Into<String>) -> Self {
        Self::EditorAborted {
            reason: reason.into(),
        }
    }
}

impl From<rename_fs::Error> for Error {
    fn from(err: rename_fs::Error) -> Self {
        match err {
            rename_fs::Error::AlreadyExists { path } => Self::FileExists { path },
            other => Self::Fs(other),
        }
    }
}
