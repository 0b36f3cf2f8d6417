//! This crate implements the core data model for a minimal
//! content-addressable version-control repository: object identifiers,
//! object kinds, the tree and commit codecs, the abstract storage trait,
//! and the porcelain operations built on top of those primitives.

#![deny(warnings)]

pub mod history;
pub mod object;
pub mod repo;
pub mod work_tree;

#[cfg(test)]
pub(crate) mod test_support;
