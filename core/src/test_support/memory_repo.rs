use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::object::{Id, Kind, Object};
use crate::repo::{Error, Repo, Result};

// A `MemoryRepo` is a `Repo` implementation backed by hash maps, with a
// temporary directory standing in for the working directory. It lets the
// porcelain operations be exercised without any on-disk storage layer.
//
// Objects are held as their serialized byte sequences, exactly as a
// persistent store would hold them, so reads go through the same
// deserialize/verify path.
//
// Because this struct is intended for testing, its helper functions panic
// instead of returning Result structs.
pub(crate) struct MemoryRepo {
    work_dir: TempDir,
    objects: HashMap<Id, Vec<u8>>,
    refs: HashMap<String, Id>,
}

impl MemoryRepo {
    pub fn new() -> MemoryRepo {
        MemoryRepo {
            work_dir: tempfile::tempdir().unwrap(),
            objects: HashMap::new(),
            refs: HashMap::new(),
        }
    }

    // Write a file (and any missing parent directories) under the working
    // directory.
    pub fn write_work_file(&self, rel_path: &str, content: &[u8]) {
        let path = self.work_dir.path().join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read_work_file(&self, rel_path: &str) -> Vec<u8> {
        fs::read(self.work_dir.path().join(rel_path)).unwrap()
    }
}

impl Repo for MemoryRepo {
    fn work_dir(&self) -> &Path {
        self.work_dir.path()
    }

    fn put_object(&mut self, object: &Object) -> Result<Id> {
        self.objects
            .entry(object.id().clone())
            .or_insert_with(|| object.serialize());

        Ok(object.id().clone())
    }

    fn get_object(&self, id: &Id, expected: Option<Kind>) -> Result<Object> {
        let bytes = self
            .objects
            .get(id)
            .ok_or_else(|| Error::ObjectNotFound(id.clone()))?;

        let object = Object::deserialize(bytes).map_err(|source| Error::MalformedObject {
            id: id.clone(),
            source,
        })?;

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
        self.refs.insert(name.to_string(), id.clone());
        Ok(())
    }

    fn get_ref(&self, name: &str) -> Result<Option<Id>> {
        Ok(self.refs.get(name).cloned())
    }

    fn refs(&self) -> Result<Vec<(String, Id)>> {
        Ok(self
            .refs
            .iter()
            .filter(|(name, _)| *name == "HEAD" || name.starts_with("refs/"))
            .map(|(name, id)| (name.clone(), id.clone()))
            .collect())
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.components().any(|c| c.as_os_str() == ".mingit")
    }
}
