//! File records and manifests.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::count::DirectoryCount;

/// A regular file discovered under a walked root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path of the file, the walked root joined with its relative location.
    pub path: PathBuf,
    /// Last modification time in whole seconds since the Unix epoch.
    pub modified: i64,
    /// Size in bytes at enumeration time.
    pub size: u64,
    /// Set once a worker has claimed this record for copying.
    pub copied: bool,
}

impl FileRecord {
    /// Create an unclaimed record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, modified: i64, size: u64) -> Self {
        Self {
            path: path.into(),
            modified,
            size,
            copied: false,
        }
    }

    /// Copy of this record with the claim flag cleared.
    #[must_use]
    pub fn unclaimed(&self) -> Self {
        Self::new(self.path.clone(), self.modified, self.size)
    }
}

/// Ordered collection of [`FileRecord`]s describing one directory tree.
///
/// Order is the traversal order of the walk that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    records: Vec<FileRecord>,
}

impl Manifest {
    /// Create an empty manifest.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: FileRecord) {
        debug_assert!(
            !record.path.as_os_str().is_empty(),
            "manifest records need a path"
        );
        self.records.push(record);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the manifest holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    /// The records as a slice.
    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// The records as a mutable slice, for claim bookkeeping.
    pub fn records_mut(&mut self) -> &mut [FileRecord] {
        &mut self.records
    }

    /// Find the record with exactly this path.
    ///
    /// Linear scan; paths are compared component-wise without touching the filesystem.
    #[must_use]
    pub fn find(&self, path: &Path) -> Option<&FileRecord> {
        self.records.iter().find(|record| record.path == path)
    }

    /// Fold the manifest into a file count and total size.
    #[must_use]
    pub fn count(&self) -> DirectoryCount {
        DirectoryCount::from(self)
    }

    /// Consume the manifest, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }
}

impl From<Vec<FileRecord>> for Manifest {
    fn from(records: Vec<FileRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<FileRecord> for Manifest {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Manifest {
    type Item = FileRecord;
    type IntoIter = std::vec::IntoIter<FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unclaimed() {
        let record = FileRecord::new("/src/a.txt", 100, 5);

        assert!(!record.copied);
        assert_eq!(record.path, PathBuf::from("/src/a.txt"));
    }

    #[test]
    fn test_unclaimed_resets_flag() {
        let mut record = FileRecord::new("/src/a.txt", 100, 5);
        record.copied = true;

        let copy = record.unclaimed();

        assert!(!copy.copied);
        assert_eq!(copy.path, record.path);
        assert_eq!(copy.modified, 100);
        assert_eq!(copy.size, 5);
    }

    #[test]
    fn test_find_by_exact_path() {
        let manifest: Manifest = vec![
            FileRecord::new("/src/a", 1, 1),
            FileRecord::new("/src/dir/a", 2, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(manifest.find(Path::new("/src/dir/a")).map(|r| r.modified), Some(2));
        assert!(manifest.find(Path::new("/src/dir")).is_none());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut manifest = Manifest::new();
        manifest.push(FileRecord::new("/z", 1, 1));
        manifest.push(FileRecord::new("/a", 1, 1));

        let paths: Vec<_> = manifest.iter().map(|r| r.path.clone()).collect();

        assert_eq!(paths, vec![PathBuf::from("/z"), PathBuf::from("/a")]);
        assert_eq!(manifest.len(), 2);
    }
}
