//! File transfer primitives for directory synchronization.
//!
//! This crate provides the filesystem side of a sync run:
//!
//! * Chunked byte copy that carries the source modification time over
//! * Segment-by-segment creation of missing destination directories
//! * Thread-safe progress accounting for files, bytes and live workers
//!
//! # Example
//!
//! ```rust,ignore
//! use dsync_copy::{copy_file, create_dir_tree};
//!
//! create_dir_tree(Path::new("/backup/photos/2024"));
//! let bytes = copy_file(source, target, modified)?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod progress;
mod tree;

pub use copy::{CHUNK_SIZE, copy_file};
pub use error::CopyError;
pub use progress::{CopyProgress, ProgressTracker};
pub use tree::create_dir_tree;
