//! Represents an abstract repository.
//!
//! ## Design Goals
//!
//! mingit intends to allow repositories to be stored in multiple different
//! mechanisms. While it includes built-in support for local on-disk
//! repositories (see the `mingit_on_disk` crate), you could envision
//! repositories stored entirely in memory, or on a remote file system or
//! database.

use std::path::Path;

use crate::object::{Id, Kind, Object};

mod error;
pub use error::{Error, Result};

/// A struct that implements the `Repo` trait represents a particular
/// mechanism for storing and accessing a repository.
///
/// The methods on this trait are the most primitive operations that must be
/// defined for a given storage architecture: the append-only object store,
/// the mutable reference store, and the handle to the working directory the
/// repository tracks. The porcelain operations built on these primitives
/// (working-tree snapshots, commits, checkout, history traversal) live in
/// [`crate::work_tree`] and [`crate::history`] and work with any `Repo`.
pub trait Repo {
    /// Return the working directory this repository tracks.
    fn work_dir(&self) -> &Path;

    /// Store an object if it is not already present and return its ID.
    ///
    /// The store is append-only and content-addressed: storing identical
    /// content twice is a no-op, and existing entries are never mutated.
    fn put_object(&mut self, object: &Object) -> Result<Id>;

    /// Read the object with the given ID back from storage.
    ///
    /// Every call re-reads storage; there is no caching layer. Reading an
    /// ID that is not in the store fails with [`Error::ObjectNotFound`]. If
    /// `expected` is given and the stored object has a different kind, the
    /// read fails with [`Error::TypeMismatch`].
    fn get_object(&self, id: &Id, expected: Option<Kind>) -> Result<Object>;

    /// Create or overwrite the named reference, creating any missing path
    /// components.
    fn update_ref(&mut self, name: &str, id: &Id) -> Result<()>;

    /// Return the value of the named reference, or `None` if it is absent.
    /// An absent reference is not an error.
    fn get_ref(&self, name: &str) -> Result<Option<Id>>;

    /// Enumerate `HEAD` plus every reference under the `refs` namespace.
    ///
    /// References whose value is absent are skipped. Enumeration order is
    /// unspecified.
    fn refs(&self) -> Result<Vec<(String, Id)>>;

    /// Returns true if the given working-directory path belongs to the
    /// repository's own bookkeeping and should be excluded from snapshots
    /// and restores.
    fn is_ignored(&self, path: &Path) -> bool;
}
