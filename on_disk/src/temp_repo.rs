use std::fs;
use std::path::{Path, PathBuf};

use crate::OnDiskRepo;

/// A `TempRepo` creates a temporary, empty repository in a fresh working
/// directory. This is often used in unit tests to exercise repository
/// operations without touching any real checkout.
///
/// Because this struct is intended for testing, its functions panic instead
/// of returning Result structs.
pub struct TempRepo {
    tempdir: tempfile::TempDir,
    repo: OnDiskRepo,
}

impl TempRepo {
    /// Create a new, empty repository in a temporary directory.
    /// The directory will be deleted when the struct is dropped.
    pub fn new() -> TempRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let repo = OnDiskRepo::init(tempdir.path()).unwrap();

        TempRepo { tempdir, repo }
    }

    /// Return the path of the working directory.
    pub fn path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Return the repository handle.
    pub fn repo(&self) -> &OnDiskRepo {
        &self.repo
    }

    /// Return a mutable repository handle.
    pub fn repo_mut(&mut self) -> &mut OnDiskRepo {
        &mut self.repo
    }

    /// Write a file (and any missing parent directories) under the working
    /// directory and return its full path.
    pub fn write_work_file(&self, rel_path: &str, content: &[u8]) -> PathBuf {
        let path = self.tempdir.path().join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();

        path
    }
}

impl Default for TempRepo {
    fn default() -> TempRepo {
        TempRepo::new()
    }
}
