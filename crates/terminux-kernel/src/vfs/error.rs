use thiserror::Error;

/// Errors from tree lookups and mutations.
///
/// Paths carried here are the absolute paths the operation looked at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("{path}: no such file or directory")]
    NotFound { path: String },

    #[error("{path}: not a directory")]
    NotADirectory { path: String },

    #[error("{path}: is a directory")]
    IsADirectory { path: String },

    #[error("{path}: file exists")]
    AlreadyExists { path: String },

    #[error("invalid name: {name:?}")]
    InvalidName { name: String },
}

impl FsError {
    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        FsError::NotFound { path: path.into() }
    }

    pub(crate) fn not_a_directory(path: impl Into<String>) -> Self {
        FsError::NotADirectory { path: path.into() }
    }

    pub(crate) fn is_a_directory(path: impl Into<String>) -> Self {
        FsError::IsADirectory { path: path.into() }
    }
}
