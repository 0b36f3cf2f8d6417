//! This crate provides a mingit repository that stores content on the local
//! file system.
//!
//! The on-disk layout is a `.mingit` directory at the root of the working
//! directory, holding a flat uncompressed object store, the reference
//! namespace, and `HEAD`.

#![deny(warnings)]

mod on_disk_repo;
pub use on_disk_repo::{OnDiskRepo, REPO_DIR_NAME};

mod temp_repo;
pub use temp_repo::TempRepo;
