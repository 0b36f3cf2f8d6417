//! A repository that stores content on the local file system.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mingit_core::object::{Id, Kind, Object};
use mingit_core::repo::{Error, Repo, Result};

use tempfile::NamedTempFile;

/// Name of the repository directory created inside the working directory.
pub const REPO_DIR_NAME: &str = ".mingit";

/// Implementation of `mingit_core::repo::Repo` that stores content on the
/// local file system.
///
/// Layout inside the repository directory:
///
/// ```text
/// .mingit/
///   HEAD                 40-hex ID of the current commit, or absent
///   objects/<id>         one file per object: "<kind>\0<content>", uncompressed
///   refs/heads/<name>
///   refs/tags/<name>
/// ```
///
/// Reference and object writes go through a temp file in the destination
/// directory followed by a rename, so a concurrent reader never observes a
/// partially written file. There is no further cross-process coordination:
/// two writers racing on the same reference resolve as last-write-wins.
#[derive(Debug)]
pub struct OnDiskRepo {
    work_dir: PathBuf,
    repo_dir: PathBuf,
}

impl OnDiskRepo {
    /// Open an existing on-disk repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.mingit`
    /// directory must exist at this path. Use the `init` function to create
    /// an empty repository if necessary.
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();
        if !work_dir.exists() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let repo_dir = work_dir.join(REPO_DIR_NAME);
        if !repo_dir.exists() {
            return Err(Error::RepoDirDoesntExist(repo_dir));
        }

        Ok(OnDiskRepo { work_dir, repo_dir })
    }

    /// Create a new, empty repository on the local file system.
    ///
    /// `work_dir` should be the top-level working directory; the `.mingit`
    /// directory is created inside it and must not already exist.
    pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();

        let repo_dir = work_dir.join(REPO_DIR_NAME);
        if repo_dir.exists() {
            return Err(Error::RepoDirShouldntExist(repo_dir));
        }

        fs::create_dir_all(repo_dir.join("objects"))?;
        fs::create_dir_all(repo_dir.join("refs/heads"))?;
        fs::create_dir_all(repo_dir.join("refs/tags"))?;

        // HEAD is intentionally absent until the first commit.

        Ok(OnDiskRepo { work_dir, repo_dir })
    }

    /// Return the path to the repository directory.
    pub fn repo_dir(&self) -> &Path {
        self.repo_dir.as_path()
    }

    fn object_path(&self, id: &Id) -> PathBuf {
        self.repo_dir.join("objects").join(id.to_string())
    }

    fn ref_path(&self, name: &str) -> PathBuf {
        name.split('/')
            .fold(self.repo_dir.clone(), |path, segment| path.join(segment))
    }
}

impl Repo for OnDiskRepo {
    fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    fn put_object(&mut self, object: &Object) -> Result<Id> {
        let path = self.object_path(object.id());

        // The store is content-addressed: an existing file already holds
        // exactly these bytes, so re-storing is a no-op.
        if !path.exists() {
            write_atomic(&self.repo_dir.join("objects"), &path, &object.serialize())?;
        }

        Ok(object.id().clone())
    }

    fn get_object(&self, id: &Id, expected: Option<Kind>) -> Result<Object> {
        let path = self.object_path(id);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(id.clone()))
            }
            Err(err) => return Err(err.into()),
        };

        let object = Object::deserialize(&bytes).map_err(|source| Error::MalformedObject {
            id: id.clone(),
            source,
        })?;

        if object.id() != id {
            return Err(Error::CorruptObject {
                id: id.clone(),
                found: object.id().clone(),
            });
        }

        if let Some(expected) = expected {
            if object.kind() != expected {
                return Err(Error::TypeMismatch {
                    id: id.clone(),
                    expected,
                    found: object.kind(),
                });
            }
        }

        Ok(object)
    }

    fn update_ref(&mut self, name: &str, id: &Id) -> Result<()> {
        let path = self.ref_path(name);

        let parent = match path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => self.repo_dir.clone(),
        };
        fs::create_dir_all(&parent)?;

        write_atomic(&parent, &path, id.to_string().as_bytes())
    }

    fn get_ref(&self, name: &str) -> Result<Option<Id>> {
        let path = self.ref_path(name);

        // A missing file, or a directory (a namespace prefix like `refs`
        // itself), is an absent reference, not an error.
        if !path.is_file() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path)?;
        let id: Id = text
            .trim()
            .parse()
            .map_err(|_| Error::MalformedReference(name.to_string()))?;

        Ok(Some(id))
    }

    fn refs(&self) -> Result<Vec<(String, Id)>> {
        let mut result = Vec::new();

        if let Some(id) = self.get_ref("HEAD")? {
            result.push(("HEAD".to_string(), id));
        }

        let mut pending = vec![self.repo_dir.join("refs")];
        while let Some(dir) = pending.pop() {
            for dir_entry in fs::read_dir(&dir)? {
                let dir_entry = dir_entry?;
                let path = dir_entry.path();

                if path.is_dir() {
                    pending.push(path);
                } else {
                    let name = ref_name(&self.repo_dir, &path);
                    if let Some(id) = self.get_ref(&name)? {
                        result.push((name, id));
                    }
                }
            }
        }

        Ok(result)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.components()
            .any(|component| component.as_os_str() == REPO_DIR_NAME)
    }
}

// Render a reference file path as a slash-delimited name relative to the
// repository directory (e.g. `refs/heads/main`).
fn ref_name(repo_dir: &Path, path: &Path) -> String {
    path.strip_prefix(repo_dir)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

// Write `content` at `path` through a temp file in `dir` followed by a
// rename. `dir` must be on the same file system as `path` for the rename
// to be atomic.
fn write_atomic(dir: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|err| err.error)?;

    Ok(())
}

#[cfg(test)]
mod tests;
