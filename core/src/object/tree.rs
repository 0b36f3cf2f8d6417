use thiserror::Error;

use super::{Id, Kind, ParseIdError};

/// An error which can be returned when parsing a tree object.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseTreeError {
    /// Tree content is not text.
    #[error("tree content is not valid UTF-8")]
    Encoding,

    /// A record does not have the three `<kind> <id> <name>` fields.
    #[error("malformed tree entry `{0}`")]
    MalformedEntry(String),

    /// A record names a kind other than blob or tree.
    #[error("tree entry has kind `{0}`, expected blob or tree")]
    BadEntryKind(String),

    /// An entry name contains a path separator, or is `.` or `..`.
    #[error("illegal tree entry name `{0}`")]
    IllegalName(String),

    /// An entry's ID field does not parse.
    #[error(transparent)]
    BadId(#[from] ParseIdError),
}

/// A single record in a tree object: the kind of the referenced object,
/// its ID, and its name within the directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    pub kind: Kind,
    pub id: Id,
    pub name: String,
}

/// A tree object describes one directory level of a snapshot: a list of
/// entries sorted by name. Nested directories appear as entries of kind
/// tree referencing further tree objects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Create a tree from a list of entries.
    ///
    /// Entries are sorted by name so that identical directories always
    /// serialize to identical tree objects.
    pub fn new(mut entries: Vec<TreeEntry>) -> Tree {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Tree { entries }
    }

    /// Return the entries of this tree, sorted by name.
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Render the tree as its stored content: one `<kind> <id> <name>`
    /// line per entry.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("{} {} {}\n", entry.kind, entry.id, entry.name));
        }

        out.into_bytes()
    }

    /// Parse stored tree content.
    ///
    /// Fails fast on the first malformed record: a line without the three
    /// `<kind> <id> <name>` fields, a kind other than blob or tree, an
    /// unparseable ID, or a name that contains a path separator or is `.`
    /// or `..`.
    pub fn parse(content: &[u8]) -> Result<Tree, ParseTreeError> {
        let text = std::str::from_utf8(content).map_err(|_| ParseTreeError::Encoding)?;

        let mut entries = Vec::new();
        for line in text.lines() {
            entries.push(parse_entry(line)?);
        }

        Ok(Tree { entries })
    }
}

fn parse_entry(line: &str) -> Result<TreeEntry, ParseTreeError> {
    let mut fields = line.splitn(3, ' ');

    let kind_field = fields
        .next()
        .ok_or_else(|| ParseTreeError::MalformedEntry(line.to_string()))?;
    let id_field = fields
        .next()
        .ok_or_else(|| ParseTreeError::MalformedEntry(line.to_string()))?;
    let name = fields
        .next()
        .ok_or_else(|| ParseTreeError::MalformedEntry(line.to_string()))?;

    let kind: Kind = kind_field
        .parse()
        .map_err(|_| ParseTreeError::BadEntryKind(kind_field.to_string()))?;
    if kind == Kind::Commit {
        return Err(ParseTreeError::BadEntryKind(kind_field.to_string()));
    }

    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(ParseTreeError::IllegalName(name.to_string()));
    }

    let id = Id::from_hex(id_field)?;

    Ok(TreeEntry {
        kind,
        id,
        name: name.to_string(),
    })
}
