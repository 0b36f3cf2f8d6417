//! The commit chain and the operations built on it: recording commits,
//! reading them back, checking out, tagging, resolving user-supplied names,
//! and walking the ancestry graph.
//!
//! Ancestry is represented purely as digest-keyed lookups into the object
//! store: each commit names its parent by ID, and traversal re-queries
//! storage for every step. There is no separate in-memory graph.

use std::collections::{HashSet, VecDeque};

use crate::object::{Commit, Id, Kind, Object};
use crate::repo::{Error, Repo, Result};
use crate::work_tree;

/// Snapshot the working directory and record it as a new commit.
///
/// The current `HEAD` (if any) becomes the new commit's parent, and `HEAD`
/// then advances to the new commit. A repository with no `HEAD` yet
/// produces a valid root commit.
pub fn commit<R: Repo>(repo: &mut R, message: &str) -> Result<Id> {
    let tree = work_tree::write_tree(repo)?;
    let parent = repo.get_ref("HEAD")?;

    let commit = Commit::new(tree, parent, message);
    let id = repo.put_object(&Object::new(Kind::Commit, commit.serialize()))?;

    repo.update_ref("HEAD", &id)?;
    Ok(id)
}

/// Read and parse the commit object with the given ID.
pub fn get_commit<R: Repo>(repo: &R, id: &Id) -> Result<Commit> {
    let object = repo.get_object(id, Some(Kind::Commit))?;
    Commit::parse(object.content()).map_err(|source| Error::MalformedCommit {
        id: id.clone(),
        source,
    })
}

/// Replace the working directory with the given commit's tree and move
/// `HEAD` to that commit.
///
/// This is destructive by design: there is no dirty-state check, and
/// uncommitted changes in the working directory are lost.
pub fn checkout<R: Repo>(repo: &mut R, id: &Id) -> Result<()> {
    let commit = get_commit(repo, id)?;
    work_tree::read_tree(repo, commit.tree())?;
    repo.update_ref("HEAD", id)
}

/// Point `refs/tags/<name>` at the given commit.
///
/// An existing tag of the same name is silently overwritten; there is no
/// uniqueness check.
pub fn create_tag<R: Repo>(repo: &mut R, name: &str, id: &Id) -> Result<()> {
    repo.update_ref(&format!("refs/tags/{}", name), id)
}

/// Resolve a user-supplied name to an object ID.
///
/// `@` is shorthand for `HEAD`. The name is then tried as given, under
/// `refs/`, under `refs/tags/`, and under `refs/heads/`, in that order,
/// returning the first reference that resolves. A name that matches no
/// reference but is itself 40 hex digits is taken literally as an object
/// ID. Anything else fails with [`Error::UnknownReference`].
pub fn resolve_name<R: Repo>(repo: &R, name: &str) -> Result<Id> {
    let name = if name == "@" { "HEAD" } else { name };

    let candidates = [
        name.to_string(),
        format!("refs/{}", name),
        format!("refs/tags/{}", name),
        format!("refs/heads/{}", name),
    ];

    for candidate in &candidates {
        if let Some(id) = repo.get_ref(candidate)? {
            return Ok(id);
        }
    }

    Id::from_hex(name).map_err(|_| Error::UnknownReference(name.to_string()))
}

/// Walk the commit graph from a set of starting points, yielding each
/// reachable commit ID exactly once.
///
/// The walk is lazy: commits are resolved from storage only as the
/// iterator advances, and a commit that cannot be resolved surfaces as an
/// error item. The ancestry chain is acyclic and finite by construction,
/// so the walk always terminates. Order beyond "every reachable ID,
/// exactly once" is unspecified.
pub fn commits_and_parents<R: Repo>(repo: &R, start: Vec<Id>) -> CommitsAndParents<'_, R> {
    CommitsAndParents {
        repo,
        pending: start.into_iter().collect(),
        visited: HashSet::new(),
    }
}

/// Iterator over the commit graph. See [`commits_and_parents`].
pub struct CommitsAndParents<'a, R: Repo> {
    repo: &'a R,
    pending: VecDeque<Id>,
    visited: HashSet<Id>,
}

impl<'a, R: Repo> Iterator for CommitsAndParents<'a, R> {
    type Item = Result<Id>;

    fn next(&mut self) -> Option<Result<Id>> {
        loop {
            let id = self.pending.pop_front()?;
            if !self.visited.insert(id.clone()) {
                continue;
            }

            match get_commit(self.repo, &id) {
                Ok(commit) => {
                    if let Some(parent) = commit.parent() {
                        self.pending.push_back(parent.clone());
                    }
                    return Some(Ok(id));
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::MemoryRepo;

    #[test]
    fn commit_message_round_trip() {
        let mut repo = MemoryRepo::new();
        repo.write_work_file("a.txt", b"hello");

        let id = commit(&mut repo, "first").unwrap();
        let c = get_commit(&repo, &id).unwrap();

        assert_eq!(c.message(), "first");
        assert_eq!(c.parent(), None);
        assert_eq!(repo.get_ref("HEAD").unwrap(), Some(id));
    }

    #[test]
    fn second_commit_chains_to_first() {
        let mut repo = MemoryRepo::new();
        repo.write_work_file("a.txt", b"hello");

        let first = commit(&mut repo, "first").unwrap();

        repo.write_work_file("a.txt", b"world");
        let second = commit(&mut repo, "second").unwrap();

        assert_ne!(first, second);

        let c = get_commit(&repo, &second).unwrap();
        assert_eq!(c.parent(), Some(&first));
        assert_eq!(repo.get_ref("HEAD").unwrap(), Some(second));
    }

    #[test]
    fn checkout_restores_tree_and_moves_head() {
        let mut repo = MemoryRepo::new();
        repo.write_work_file("a.txt", b"hello");

        let first = commit(&mut repo, "first").unwrap();

        repo.write_work_file("a.txt", b"changed");
        repo.write_work_file("extra.txt", b"uncommitted");
        let second = commit(&mut repo, "second").unwrap();

        checkout(&mut repo, &first).unwrap();

        assert_eq!(repo.read_work_file("a.txt"), b"hello");
        assert!(!repo.work_dir().join("extra.txt").exists());
        assert_eq!(repo.get_ref("HEAD").unwrap(), Some(first));

        checkout(&mut repo, &second).unwrap();
        assert_eq!(repo.read_work_file("a.txt"), b"changed");
        assert_eq!(repo.read_work_file("extra.txt"), b"uncommitted");
    }

    #[test]
    fn checkout_error_not_a_commit() {
        let mut repo = MemoryRepo::new();
        let blob = repo
            .put_object(&Object::new(Kind::Blob, b"hello".to_vec()))
            .unwrap();

        let err = checkout(&mut repo, &blob).unwrap_err();
        match err {
            Error::TypeMismatch { expected, .. } => assert_eq!(expected, Kind::Commit),
            _ => panic!("Unexpected error {:?}", err),
        }
    }

    #[test]
    fn get_commit_error_malformed() {
        let mut repo = MemoryRepo::new();
        let id = repo
            .put_object(&Object::new(
                Kind::Commit,
                b"branch nonsense\n\nmessage\n".to_vec(),
            ))
            .unwrap();

        let err = get_commit(&repo, &id).unwrap_err();
        match err {
            Error::MalformedCommit { id: err_id, .. } => assert_eq!(err_id, id),
            _ => panic!("Unexpected error {:?}", err),
        }
    }

    #[test]
    fn tag_and_resolve() {
        let mut repo = MemoryRepo::new();
        repo.write_work_file("a.txt", b"hello");

        let first = commit(&mut repo, "first").unwrap();
        create_tag(&mut repo, "v1", &first).unwrap();

        assert_eq!(
            repo.get_ref("refs/tags/v1").unwrap(),
            Some(first.clone())
        );
        assert_eq!(resolve_name(&repo, "v1").unwrap(), first);
        assert_eq!(resolve_name(&repo, "refs/tags/v1").unwrap(), first);

        // Overwriting an existing tag is allowed.
        repo.write_work_file("a.txt", b"world");
        let second = commit(&mut repo, "second").unwrap();
        create_tag(&mut repo, "v1", &second).unwrap();
        assert_eq!(resolve_name(&repo, "v1").unwrap(), second);
    }

    #[test]
    fn resolve_name_search_order() {
        let mut repo = MemoryRepo::new();
        repo.write_work_file("a.txt", b"hello");

        let head = commit(&mut repo, "first").unwrap();

        let tagged = Id::from_hex("1111111111111111111111111111111111111111").unwrap();
        let branch = Id::from_hex("2222222222222222222222222222222222222222").unwrap();

        repo.update_ref("refs/tags/v1", &tagged).unwrap();
        repo.update_ref("refs/heads/main", &branch).unwrap();

        assert_eq!(resolve_name(&repo, "v1").unwrap(), tagged);
        assert_eq!(resolve_name(&repo, "main").unwrap(), branch);
        assert_eq!(resolve_name(&repo, "@").unwrap(), head.clone());
        assert_eq!(resolve_name(&repo, "HEAD").unwrap(), head);

        // A name shadowed in both namespaces resolves from refs/tags first.
        repo.update_ref("refs/tags/main", &tagged).unwrap();
        assert_eq!(resolve_name(&repo, "main").unwrap(), tagged);
    }

    #[test]
    fn resolve_name_literal_id() {
        let repo = MemoryRepo::new();

        // A syntactically valid 40-hex name that matches no reference
        // resolves to itself.
        let id = resolve_name(&repo, "3cd9329ac53613a0bfa198ae28f3af957e49573c").unwrap();
        assert_eq!(
            id.to_string(),
            "3cd9329ac53613a0bfa198ae28f3af957e49573c"
        );
    }

    #[test]
    fn resolve_name_error_unknown() {
        let repo = MemoryRepo::new();

        let err = resolve_name(&repo, "no-such-ref").unwrap_err();
        match err {
            Error::UnknownReference(name) => assert_eq!(name, "no-such-ref"),
            _ => panic!("Unexpected error {:?}", err),
        }

        // Too short to be a literal ID.
        let err = resolve_name(&repo, "3cd9329a").unwrap_err();
        match err {
            Error::UnknownReference(name) => assert_eq!(name, "3cd9329a"),
            _ => panic!("Unexpected error {:?}", err),
        }
    }

    #[test]
    fn traversal_yields_each_ancestor_once() {
        let mut repo = MemoryRepo::new();
        repo.write_work_file("a.txt", b"one");
        let first = commit(&mut repo, "first").unwrap();

        repo.write_work_file("a.txt", b"two");
        let second = commit(&mut repo, "second").unwrap();

        repo.write_work_file("a.txt", b"three");
        let third = commit(&mut repo, "third").unwrap();

        let walked: Vec<Id> = commits_and_parents(&repo, vec![third.clone()])
            .map(|id| id.unwrap())
            .collect();

        assert_eq!(walked.len(), 3);
        assert!(walked.contains(&first));
        assert!(walked.contains(&second));
        assert!(walked.contains(&third));
    }

    #[test]
    fn traversal_dedups_start_points() {
        let mut repo = MemoryRepo::new();
        repo.write_work_file("a.txt", b"one");
        let first = commit(&mut repo, "first").unwrap();

        repo.write_work_file("a.txt", b"two");
        let second = commit(&mut repo, "second").unwrap();

        // Starting from both the tip and an interior commit still yields
        // each reachable ID exactly once.
        let walked: Vec<Id> =
            commits_and_parents(&repo, vec![second.clone(), first.clone(), second.clone()])
                .map(|id| id.unwrap())
                .collect();

        assert_eq!(walked.len(), 2);
    }

    #[test]
    fn traversal_empty_start() {
        let repo = MemoryRepo::new();
        assert_eq!(commits_and_parents(&repo, Vec::new()).count(), 0);
    }

    #[test]
    fn traversal_error_missing_commit() {
        let repo = MemoryRepo::new();
        let id = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573c").unwrap();

        let mut walk = commits_and_parents(&repo, vec![id.clone()]);
        let err = walk.next().unwrap().unwrap_err();
        match err {
            Error::ObjectNotFound(err_id) => assert_eq!(err_id, id),
            _ => panic!("Unexpected error {:?}", err),
        }

        assert!(walk.next().is_none());
    }
}
