//! File count and total size of a manifest.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use crate::record::{FileRecord, Manifest};

/// Number of files and their combined size.
///
/// Never stored; fold it from a [`Manifest`] whenever it is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryCount {
    /// Number of files.
    pub file_count: u64,
    /// Sum of the file sizes in bytes.
    pub total_size: u64,
}

impl DirectoryCount {
    /// Fold a sequence of records into a count.
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut count, record| {
                count.file_count += 1;
                count.total_size = count.total_size.saturating_add(record.size);
                count
            })
    }

    /// Whether no files were counted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.file_count == 0
    }
}

impl From<&Manifest> for DirectoryCount {
    fn from(manifest: &Manifest) -> Self {
        Self::from_records(manifest)
    }
}
