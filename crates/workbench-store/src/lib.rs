//! workbench-store: Directory-backed file storage
//!
//! This crate provides the file store used by the workbench shell:
//! - Creating the managed directory
//! - Adding text files and byte-for-byte copies of other files
//! - Listing and reading entries back

pub mod entry;
pub mod store;

pub use entry::{EntryKind, FileEntry};
pub use store::FileStore;
