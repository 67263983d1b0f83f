//! Worker pool that drains a copy-list.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::thread;

use dsync_copy::{CopyProgress, ProgressTracker, copy_file, create_dir_tree};
use dsync_manifest::Manifest;

use crate::error::EngineError;
use crate::queue::WorkQueue;
use crate::roots::RootMap;

/// A file that could not be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    /// Source path of the file.
    pub path: PathBuf,
    /// Why the copy failed.
    pub reason: String,
}

/// Outcome of one coordinator run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// The copy-list after the run; every record is claimed.
    pub records: Manifest,
    /// Number of workers that ran.
    pub workers: usize,
    /// Number of files copied.
    pub files_copied: u64,
    /// Number of files that failed to copy.
    pub files_failed: u64,
    /// Number of bytes written.
    pub bytes_copied: u64,
    /// Details of every failed file.
    pub failures: Vec<CopyFailure>,
}

impl SyncReport {
    /// Whether every queued file was copied.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.files_failed == 0
    }
}

/// Runs a fixed number of copy workers against one copy-list.
#[derive(Debug, Clone)]
pub struct Coordinator {
    roots: RootMap,
    workers: usize,
}

impl Coordinator {
    /// Create a coordinator for `workers` threads copying between `roots`.
    #[must_use]
    pub const fn new(roots: RootMap, workers: usize) -> Self {
        Self { roots, workers }
    }

    /// Copy every record of `copy_list` and wait for all workers to exit.
    ///
    /// Each worker claims a record, creates the destination directory while
    /// still holding the queue lock, then copies the file unlocked. A failed
    /// file is logged and counted; the worker moves on to the next claim.
    /// `on_progress` is called after every file.
    ///
    /// # Errors
    ///
    /// * If the worker count is zero or larger than the copy-list
    /// * If the worker threads cannot be started
    pub fn run<F>(&self, copy_list: Manifest, on_progress: F) -> Result<SyncReport, EngineError>
    where
        F: Fn(&CopyProgress) + Sync,
    {
        let queued = copy_list.len();
        if self.workers == 0 || self.workers > queued {
            return Err(EngineError::InvalidWorkerCount {
                requested: self.workers,
                queued,
            });
        }

        log::debug!("Starting {} workers for {queued} files", self.workers);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|index| format!("dsync-worker-{index}"))
            .build()?;

        let queue = WorkQueue::new(copy_list);
        let tracker = ProgressTracker::new(queued as u64);
        let failures = Mutex::new(Vec::new());

        {
            let queue = &queue;
            let tracker = &tracker;
            let failures = &failures;
            let on_progress = &on_progress;

            // One long-lived job per pool thread, so N workers run on N threads
            pool.scope(move |scope| {
                for _ in 0..self.workers {
                    scope.spawn(move |_| self.work(queue, tracker, failures, on_progress));
                }
            });
        }

        debug_assert_eq!(tracker.workers_active(), 0);

        Ok(SyncReport {
            records: queue.into_manifest(),
            workers: self.workers,
            files_copied: tracker.copied(),
            files_failed: tracker.failed(),
            bytes_copied: tracker.bytes(),
            failures: failures
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
        })
    }

    /// Claim, prepare and copy records until the queue runs dry.
    fn work<F>(
        &self,
        queue: &WorkQueue,
        tracker: &ProgressTracker,
        failures: &Mutex<Vec<CopyFailure>>,
        on_progress: &F,
    ) where
        F: Fn(&CopyProgress) + Sync,
    {
        let name = worker_name();
        tracker.worker_started();
        log::info!("Worker {name} started");

        loop {
            let mut target = None;
            let Some(record) = queue.claim(|record| {
                target = self.roots.to_destination(&record.path);
                if let Some(parent) = target.as_deref().and_then(Path::parent) {
                    create_dir_tree(parent);
                }
            }) else {
                break;
            };

            log::info!("Worker {name} copying: {}", record.path.display());

            let result = match target {
                Some(target) => copy_file(&record.path, &target, record.modified)
                    .map_err(|e| e.to_string()),
                None => Err(format!(
                    "{} is not under source root {}",
                    record.path.display(),
                    self.roots.source().display()
                )),
            };

            match result {
                Ok(bytes) => tracker.record_copied(bytes),
                Err(reason) => {
                    log::error!("Worker {name} error: {reason}");
                    tracker.record_failed();
                    failures
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(CopyFailure {
                            path: record.path.clone(),
                            reason,
                        });
                }
            }

            on_progress(&tracker.snapshot(Some(record.path)));
        }

        tracker.worker_finished();
        log::debug!("Worker {name} finished");
    }
}

fn worker_name() -> String {
    let current = thread::current();
    current
        .name()
        .map_or_else(|| format!("{:?}", current.id()), str::to_string)
}
