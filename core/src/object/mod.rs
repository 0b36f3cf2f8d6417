//! Represents the concept of an "object": a tuple of object kind and binary
//! content identified by the hash of those bytes.

use sha1::{Digest, Sha1};

mod commit;
pub use commit::{Commit, ParseCommitError};

mod id;
pub use id::{Id, ParseIdError};

mod kind;
pub use kind::{Kind, ParseKindError};

mod tree;
pub use tree::{ParseTreeError, Tree, TreeEntry};

/// A single object stored (or about to be stored) in a repository.
///
/// An object's ID is the SHA-1 digest of its kind tag, a NUL separator, and
/// its raw content, and is computed when the object is constructed. Those
/// same bytes are what [`Object::serialize`] produces and what a store
/// persists, so an object's ID always matches its stored representation.
#[derive(Debug)]
pub struct Object {
    id: Id,
    kind: Kind,
    content: Vec<u8>,
}

impl Object {
    /// Create a new object, computing its ID from the kind and content.
    pub fn new(kind: Kind, content: Vec<u8>) -> Object {
        let mut hasher = Sha1::new();

        hasher.update(kind.to_string());
        hasher.update(b"\0");
        hasher.update(&content);

        let hash = hasher.finalize();

        // We use unwrap here because the hasher is guaranteed
        // to return a 20-byte slice.
        let id = Id::new(hash.as_slice()).unwrap();

        Object { id, kind, content }
    }

    /// Return the ID of the object.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return the raw content of the object.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consume the object, returning its raw content.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Return the size (in bytes) of the object's content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the object's content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render the byte sequence that is persisted for this object: the kind
    /// tag, a NUL byte, then the raw content.
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = self.kind.to_string().into_bytes();
        bytes.push(0);
        bytes.extend_from_slice(&self.content);
        bytes
    }

    /// Parse a persisted byte sequence back into an object.
    ///
    /// The kind tag is everything before the first NUL byte; the content is
    /// everything after it. A sequence with an unrecognized kind tag fails
    /// with `ParseKindError`.
    pub fn deserialize(bytes: &[u8]) -> Result<Object, ParseKindError> {
        let (tag, content) = match bytes.iter().position(|b| *b == 0) {
            Some(n) => (&bytes[..n], &bytes[n + 1..]),
            None => (bytes, &[][..]),
        };

        let tag = String::from_utf8_lossy(tag);
        let kind: Kind = tag.parse()?;

        Ok(Object::new(kind, content.to_vec()))
    }
}
