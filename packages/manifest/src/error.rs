//! Error types for tree walking.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Unrecoverable errors raised while walking a directory tree.
///
/// Unreadable directories are not errors; they are logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// A composed path is longer than the walker accepts.
    #[error("File name is too long ({len} > {max} bytes): {}", path.display())]
    PathTooLong {
        /// The offending path.
        path: PathBuf,
        /// Length of the path in bytes.
        len: usize,
        /// Maximum accepted length in bytes.
        max: usize,
    },

    /// A listed regular file could not be stat'ed.
    #[error("Failed to stat {}: {io_error}", path.display())]
    Stat {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },
}
