//! Error types for sync runs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a sync run.
///
/// Failures of individual file copies are not errors; they are counted in the
/// [`SyncReport`](crate::SyncReport).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Source directory does not exist.
    #[error("Source directory does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Destination directory does not exist.
    #[error("Destination directory does not exist: {}", .0.display())]
    DestinationNotFound(PathBuf),

    /// Tree walk hit an unrecoverable condition.
    #[error("Walk error: {0}")]
    Walk(#[from] dsync_manifest::WalkError),

    /// Worker count outside `1..=queued`.
    #[error("Wrong number of workers: {requested} requested for {queued} queued files")]
    InvalidWorkerCount {
        /// Requested number of workers.
        requested: usize,
        /// Number of files in the copy-list.
        queued: usize,
    },

    /// The worker thread pool could not be started.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
