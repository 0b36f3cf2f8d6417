use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// An error which can be returned when parsing an object kind tag.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown object kind `{0}`")]
pub struct ParseKindError(String);

/// Describes the fundamental object type (blob, tree, or commit).
/// We use the word `kind` here to avoid conflict with the Rust reserved
/// word `type`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Blob,
    Tree,
    Commit,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Kind::Blob => write!(f, "blob"),
            Kind::Tree => write!(f, "tree"),
            Kind::Commit => write!(f, "commit"),
        }
    }
}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Kind, ParseKindError> {
        match s {
            "blob" => Ok(Kind::Blob),
            "tree" => Ok(Kind::Tree),
            "commit" => Ok(Kind::Commit),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_string() {
        let k = Kind::Blob;
        assert_eq!(k.to_string(), "blob");

        let k = Kind::Tree;
        assert_eq!(k.to_string(), "tree");

        let k = Kind::Commit;
        assert_eq!(k.to_string(), "commit");
    }

    #[test]
    fn from_str() {
        assert_eq!("blob".parse::<Kind>().unwrap(), Kind::Blob);
        assert_eq!("tree".parse::<Kind>().unwrap(), Kind::Tree);
        assert_eq!("commit".parse::<Kind>().unwrap(), Kind::Commit);
    }

    #[test]
    fn from_invalid_str() {
        let err = "tag".parse::<Kind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown object kind `tag`");

        let err = "Blob".parse::<Kind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown object kind `Blob`");
    }
}
