//! Error types for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur while copying a single file.
///
/// Every variant abandons only the file it names.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Failed to open the source file for reading.
    #[error("Failed to open {}: {io_error}", path.display())]
    OpenSource {
        /// Source file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to create the destination file.
    #[error("Failed to create {}: {io_error}", path.display())]
    OpenDestination {
        /// Destination file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Reading or writing failed partway through the copy.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    Transfer {
        /// Source file path.
        source_path: PathBuf,
        /// Destination file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to set the modification time of the destination.
    #[error("Failed to set modification time of {}: {io_error}", path.display())]
    SetModified {
        /// Destination file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to create a destination directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },
}

