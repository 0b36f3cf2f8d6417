use thiserror::Error;

use super::{Id, ParseIdError};

/// An error which can be returned when parsing a commit object.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseCommitError {
    /// Commit content is not text.
    #[error("commit content is not valid UTF-8")]
    Encoding,

    /// The header section has no `tree` line.
    #[error("commit has no tree header")]
    MissingTree,

    /// The header section contains a key other than `tree` or `parent`.
    #[error("unknown commit header `{0}`")]
    UnknownHeader(String),

    /// A header's ID value does not parse.
    #[error(transparent)]
    BadId(#[from] ParseIdError),
}

/// A commit object: a tree snapshot, an optional parent commit, and a
/// message.
///
/// A commit has at most one parent, so the ancestry chain is a
/// singly-linked list reaching back to a parentless root commit. Commits
/// are immutable once stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    tree: Id,
    parent: Option<Id>,
    message: String,
}

impl Commit {
    /// Create a new commit value.
    pub fn new(tree: Id, parent: Option<Id>, message: &str) -> Commit {
        Commit {
            tree,
            parent,
            message: message.to_string(),
        }
    }

    /// Return the ID of the tree this commit snapshots.
    pub fn tree(&self) -> &Id {
        &self.tree
    }

    /// Return the ID of this commit's parent, if it has one.
    pub fn parent(&self) -> Option<&Id> {
        self.parent.as_ref()
    }

    /// Return the commit message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the commit as its stored content: ordered header lines, a
    /// blank separator line, then the message.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = format!("tree {}\n", self.tree);
        if let Some(parent) = &self.parent {
            out.push_str(&format!("parent {}\n", parent));
        }

        out.push('\n');
        out.push_str(&self.message);
        out.push('\n');

        out.into_bytes()
    }

    /// Parse stored commit content.
    ///
    /// The header section runs until the first blank line and may contain
    /// only a `tree` line (required) and a `parent` line; any other key
    /// fails. The message is everything after the first blank line.
    pub fn parse(content: &[u8]) -> Result<Commit, ParseCommitError> {
        let text = std::str::from_utf8(content).map_err(|_| ParseCommitError::Encoding)?;

        let mut tree = None;
        let mut parent = None;

        let mut lines = text.lines();
        for line in &mut lines {
            if line.is_empty() {
                break;
            }

            let (key, value) = match line.find(' ') {
                Some(n) => (&line[..n], &line[n + 1..]),
                None => (line, ""),
            };

            match key {
                "tree" => tree = Some(Id::from_hex(value)?),
                "parent" => parent = Some(Id::from_hex(value)?),
                _ => return Err(ParseCommitError::UnknownHeader(key.to_string())),
            }
        }

        let tree = tree.ok_or(ParseCommitError::MissingTree)?;
        let message = lines.collect::<Vec<_>>().join("\n");

        Ok(Commit {
            tree,
            parent,
            message,
        })
    }
}
