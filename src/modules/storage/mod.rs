//! Storage module for prescription uploads
//!
//! Provides a flat local-disk store for uploaded files, keyed by a
//! generated filename. Files are served back statically under `/uploads`.

mod local_storage;

pub use local_storage::LocalStorage;
