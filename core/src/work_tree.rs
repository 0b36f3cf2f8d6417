//! Converts between tree objects and the live working directory.
//!
//! The snapshot direction is an explicit depth-first traversal of the
//! working directory that excludes symlinked entries and ignored paths,
//! storing each regular file as a blob and each directory level as a tree
//! object. The restore direction destructively replaces the working
//! directory's contents with a stored snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::object::{Id, Kind, Object, Tree, TreeEntry};
use crate::repo::{Error, Repo, Result};

/// Snapshot the repository's working directory and return the resulting
/// tree object's ID.
///
/// Regular files become blob objects; subdirectories recurse into nested
/// tree objects. Symlinked entries and paths the repository ignores are
/// skipped. An empty directory yields an empty tree object.
pub fn write_tree<R: Repo>(repo: &mut R) -> Result<Id> {
    let root = repo.work_dir().to_path_buf();
    write_tree_at(repo, &root)
}

fn write_tree_at<R: Repo>(repo: &mut R, dir: &Path) -> Result<Id> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();

        if repo.is_ignored(&path) {
            continue;
        }

        let file_type = dir_entry.file_type()?;
        if file_type.is_symlink() {
            continue;
        }

        let name = match dir_entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                return Err(Error::IoError(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("file name is not valid UTF-8: {:?}", name),
                )))
            }
        };

        if file_type.is_file() {
            let content = fs::read(&path)?;
            let id = repo.put_object(&Object::new(Kind::Blob, content))?;
            entries.push(TreeEntry {
                kind: Kind::Blob,
                id,
                name,
            });
        } else if file_type.is_dir() {
            let id = write_tree_at(repo, &path)?;
            entries.push(TreeEntry {
                kind: Kind::Tree,
                id,
                name,
            });
        }
        // Sockets, pipes, and other special files are not snapshotted.
    }

    let tree = Tree::new(entries);
    repo.put_object(&Object::new(Kind::Tree, tree.serialize()))
}

/// Expand a tree object into a mapping from working-directory-relative
/// paths to blob IDs.
pub fn flatten<R: Repo>(repo: &R, root: &Id) -> Result<BTreeMap<PathBuf, Id>> {
    let mut result = BTreeMap::new();
    flatten_into(repo, root, Path::new(""), &mut result)?;
    Ok(result)
}

fn flatten_into<R: Repo>(
    repo: &R,
    tree_id: &Id,
    base: &Path,
    result: &mut BTreeMap<PathBuf, Id>,
) -> Result<()> {
    let object = repo.get_object(tree_id, Some(Kind::Tree))?;
    let tree = Tree::parse(object.content()).map_err(|source| Error::MalformedTree {
        id: tree_id.clone(),
        source,
    })?;

    for entry in tree.entries() {
        let path = base.join(&entry.name);
        match entry.kind {
            Kind::Blob => {
                result.insert(path, entry.id.clone());
            }
            _ => flatten_into(repo, &entry.id, &path, result)?,
        }
    }

    Ok(())
}

/// Destructively replace the working directory's contents with the
/// snapshot stored in the given tree object.
///
/// There is no dirty-state check and no backup: whatever is in the working
/// directory (other than ignored paths) is removed first, then the snapshot
/// is materialized, creating parent directories as needed.
pub fn read_tree<R: Repo>(repo: &mut R, root: &Id) -> Result<()> {
    let work_dir = repo.work_dir().to_path_buf();
    clear_dir(repo, &work_dir)?;

    for (path, id) in flatten(repo, root)? {
        let target = work_dir.join(&path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let blob = repo.get_object(&id, Some(Kind::Blob))?;
        fs::write(&target, blob.content())?;
    }

    Ok(())
}

// Remove every non-ignored file below `dir`, then every directory that is
// empty afterward. A directory still containing ignored entries is left in
// place; that is not an error.
fn clear_dir<R: Repo>(repo: &R, dir: &Path) -> Result<()> {
    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();

        if repo.is_ignored(&path) {
            continue;
        }

        if dir_entry.file_type()?.is_dir() {
            clear_dir(repo, &path)?;
            let _ = fs::remove_dir(&path);
        } else {
            fs::remove_file(&path)?;
        }
    }

    Ok(())
}
