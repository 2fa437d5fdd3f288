use crate::types::{CodePoint, FoldStatus};
use crate::verify::VerifyError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading, building, verifying or persisting fold tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{status} fold table maps U+{key:04X} to both U+{first:04X} and U+{second:04X}")]
    ConflictingFold {
        status: FoldStatus,
        key: CodePoint,
        first: CodePoint,
        second: CodePoint,
    },

    #[error("{value:#X} is not a valid code point")]
    InvalidCodePoint { value: u64 },

    #[error("duplicate key {key} in equivalence table")]
    DuplicateKey { key: CodePoint },

    #[error("{key:?} is not a decimal code point key")]
    InvalidKey { key: String },

    #[error("{status} fold table maps U+{key:04X} to itself")]
    IdentityFold { status: FoldStatus, key: CodePoint },

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Verify(#[from] VerifyError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
