//! Progress tracking for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Progress information for a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyProgress {
    /// Total number of files queued.
    pub files_total: u64,
    /// Number of files copied so far.
    pub files_copied: u64,
    /// Number of files that failed to copy.
    pub files_failed: u64,
    /// Number of bytes written so far.
    pub bytes_copied: u64,
    /// File that was just processed (if any).
    pub current_file: Option<PathBuf>,
}

impl CopyProgress {
    /// Number of files finished, successfully or not.
    #[must_use]
    pub const fn files_done(&self) -> u64 {
        self.files_copied + self.files_failed
    }

    /// Calculate progress as a percentage (0.0 to 100.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.files_total == 0 {
            100.0
        } else {
            (self.files_done() as f64 / self.files_total as f64) * 100.0
        }
    }
}

/// Thread-safe progress tracker using atomics.
///
/// Shared by reference between the workers of one run.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    files_total: AtomicU64,
    files_copied: AtomicU64,
    files_failed: AtomicU64,
    bytes_copied: AtomicU64,
    workers_active: AtomicUsize,
}

impl ProgressTracker {
    /// Create a tracker for a run of `files_total` files.
    #[must_use]
    pub const fn new(files_total: u64) -> Self {
        Self {
            files_total: AtomicU64::new(files_total),
            files_copied: AtomicU64::new(0),
            files_failed: AtomicU64::new(0),
            bytes_copied: AtomicU64::new(0),
            workers_active: AtomicUsize::new(0),
        }
    }

    /// Record a successfully copied file.
    pub fn record_copied(&self, bytes: u64) {
        self.bytes_copied.fetch_add(bytes, Ordering::SeqCst);
        self.files_copied.fetch_add(1, Ordering::SeqCst);
    }

    /// Record a file that could not be copied.
    pub fn record_failed(&self) {
        self.files_failed.fetch_add(1, Ordering::SeqCst);
    }

    /// Register a worker that has started.
    pub fn worker_started(&self) {
        self.workers_active.fetch_add(1, Ordering::SeqCst);
    }

    /// Unregister a worker that is about to exit.
    pub fn worker_finished(&self) {
        self.workers_active.fetch_sub(1, Ordering::SeqCst);
    }

    /// Get the number of queued files.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.files_total.load(Ordering::SeqCst)
    }

    /// Get the current copied count.
    #[must_use]
    pub fn copied(&self) -> u64 {
        self.files_copied.load(Ordering::SeqCst)
    }

    /// Get the current failure count.
    #[must_use]
    pub fn failed(&self) -> u64 {
        self.files_failed.load(Ordering::SeqCst)
    }

    /// Get the number of bytes written so far.
    #[must_use]
    pub fn bytes(&self) -> u64 {
        self.bytes_copied.load(Ordering::SeqCst)
    }

    /// Get the number of workers that have not exited yet.
    #[must_use]
    pub fn workers_active(&self) -> usize {
        self.workers_active.load(Ordering::SeqCst)
    }

    /// Get a progress snapshot.
    #[must_use]
    pub fn snapshot(&self, current_file: Option<PathBuf>) -> CopyProgress {
        CopyProgress {
            files_total: self.total(),
            files_copied: self.copied(),
            files_failed: self.failed(),
            bytes_copied: self.bytes(),
            current_file,
        }
    }
}
