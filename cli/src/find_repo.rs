use std::{env, path::Path};

use mingit_core::repo::Result;
use mingit_on_disk::OnDiskRepo;

// Discover a repository starting from the given path.
//
// For now this handles only the simplest case, where the `.mingit`
// directory is nested directly within the given path. Walking up through
// parent directories could be layered in here later, which is why commands
// call this function for repo discovery instead of `OnDiskRepo::new`
// directly.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDiskRepo> {
    OnDiskRepo::new(path)
}

// Discover a repository starting from the current working directory.
pub fn from_current_dir() -> Result<OnDiskRepo> {
    let path = env::current_dir()?;
    from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use mingit_core::repo::{Error, Repo};
    use mingit_on_disk::TempRepo;

    #[test]
    fn simple_case() {
        let tr = TempRepo::new();
        let path = tr.path();

        let repo = from_path(path).unwrap();
        assert_eq!(repo.work_dir(), path);
    }

    #[test]
    fn work_dir_doesnt_exist() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut path = temp_dir.path().to_path_buf();
        path.push("nope");

        let err = from_path(&path).unwrap_err();
        if let Error::WorkDirDoesntExist(err_path) = err {
            assert_eq!(err_path, path);
        } else {
            panic!("Unexpected error response: {:?}", err);
        }
    }

    #[test]
    fn repo_dir_doesnt_exist() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path();

        let mut repo_dir = path.to_path_buf();
        repo_dir.push(".mingit"); // but we don't create it

        let err = from_path(&path).unwrap_err();
        if let Error::RepoDirDoesntExist(err_path) = err {
            assert_eq!(err_path, repo_dir.as_path());
        } else {
            panic!("Unexpected error response: {:?}", err);
        }
    }
}
