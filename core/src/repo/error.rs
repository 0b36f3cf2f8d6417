use std::path::PathBuf;

use thiserror::Error;

use crate::object::{Id, Kind, ParseCommitError, ParseKindError, ParseTreeError};

/// Describes the potential error conditions that might arise from
/// repository operations.
///
/// Every error is fatal to the operation that raised it: there are no
/// retries and no partial rollback. Object-store writes are idempotent by
/// construction, so re-running a failed command is always safe.
#[derive(Debug, Error)]
pub enum Error {
    #[error("work dir doesn't exist: {}", .0.display())]
    WorkDirDoesntExist(PathBuf),

    #[error("repository dir doesn't exist: {}", .0.display())]
    RepoDirDoesntExist(PathBuf),

    #[error("repository dir already exists: {}", .0.display())]
    RepoDirShouldntExist(PathBuf),

    #[error("object not found: {0}")]
    ObjectNotFound(Id),

    #[error("object {id} has kind {found}, expected {expected}")]
    TypeMismatch { id: Id, expected: Kind, found: Kind },

    /// The stored bytes for an object no longer hash to its ID.
    #[error("object {id} is corrupt: stored bytes hash to {found}")]
    CorruptObject { id: Id, found: Id },

    #[error("object {id} is malformed: {source}")]
    MalformedObject { id: Id, source: ParseKindError },

    #[error("tree object {id} is malformed: {source}")]
    MalformedTree { id: Id, source: ParseTreeError },

    #[error("commit object {id} is malformed: {source}")]
    MalformedCommit { id: Id, source: ParseCommitError },

    #[error("reference {0} does not contain a valid object ID")]
    MalformedReference(String),

    #[error("unknown reference: {0}")]
    UnknownReference(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// A specialized `Result` type for repository operations.
pub type Result<T> = std::result::Result<T, Error>;
