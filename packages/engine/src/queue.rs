//! Shared work queue over a copy-list.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::{Mutex, MutexGuard, PoisonError};

use dsync_manifest::{FileRecord, Manifest};

/// Find the first record nobody has claimed yet.
///
/// Scans from the head of the list.
pub fn next_unclaimed(records: &mut [FileRecord]) -> Option<&mut FileRecord> {
    records.iter_mut().find(|record| !record.copied)
}

/// A copy-list consumed by several workers.
///
/// One lock guards the claim flags. Anything a worker must do before the
/// transfer starts, such as creating the destination directory, runs inside the
/// same critical section via [`WorkQueue::claim`].
#[derive(Debug, Default)]
pub struct WorkQueue {
    records: Mutex<Manifest>,
}

impl WorkQueue {
    /// Wrap a copy-list.
    #[must_use]
    pub const fn new(copy_list: Manifest) -> Self {
        Self {
            records: Mutex::new(copy_list),
        }
    }

    /// Claim the next unclaimed record.
    ///
    /// Under the lock: find the record, mark it claimed, then call `prepare`
    /// with it. The lock is released before the clone is returned, so the
    /// caller's transfer runs unlocked. Returns `None` once everything is claimed.
    pub fn claim<F>(&self, prepare: F) -> Option<FileRecord>
    where
        F: FnOnce(&FileRecord),
    {
        let mut records = self.lock();
        let record = next_unclaimed(records.records_mut())?;
        record.copied = true;
        prepare(record);
        Some(record.clone())
    }

    /// Number of records still waiting to be claimed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lock().iter().filter(|record| !record.copied).count()
    }

    /// Consume the queue, returning the records with their claim flags.
    #[must_use]
    pub fn into_manifest(self) -> Manifest {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panicking worker cannot leave the flags half-written, so a poisoned
    // lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Manifest> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
