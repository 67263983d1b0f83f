//! File manifests for directory synchronization.
//!
//! This crate describes the regular files of a directory tree at one point in time:
//!
//! * [`FileRecord`] - path, modification time and size of one file
//! * [`Manifest`] - ordered collection of records, in traversal order
//! * [`DirectoryCount`] - file count and total size folded from a manifest
//! * [`walk`] - recursive enumeration of a directory into a manifest
//!
//! # Example
//!
//! ```rust,ignore
//! use dsync_manifest::walk;
//!
//! let manifest = walk(Path::new("/srv/data"))?;
//! let count = manifest.count();
//! println!("{} files, {} bytes", count.file_count, count.total_size);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod count;
mod error;
mod record;
mod walk;

pub use count::DirectoryCount;
pub use error::WalkError;
pub use record::{FileRecord, Manifest};
pub use walk::{MAX_PATH_LEN, walk};
