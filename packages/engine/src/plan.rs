//! Sync planning - walk and diff both trees without copying anything.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use dsync_copy::CopyProgress;
use dsync_manifest::{DirectoryCount, Manifest, walk};

use crate::coordinator::{Coordinator, SyncReport};
use crate::diff::{Strategy, diff};
use crate::error::EngineError;
use crate::roots::RootMap;

/// Inputs of one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Source directory.
    pub source: PathBuf,
    /// Destination directory.
    pub destination: PathBuf,
    /// Number of copy workers.
    pub workers: usize,
}

/// Both trees walked and diffed, ready to execute.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    /// Normalized roots of the run.
    pub roots: RootMap,
    /// Files and bytes found in the source tree.
    pub source: DirectoryCount,
    /// Files and bytes found in the destination tree.
    pub destination: DirectoryCount,
    /// Diff strategy that produced the copy-list.
    pub strategy: Strategy,
    /// Files that need copying.
    pub copy_list: Manifest,
}

impl SyncPlan {
    /// Files and bytes that need copying.
    #[must_use]
    pub fn to_copy(&self) -> DirectoryCount {
        self.copy_list.count()
    }

    /// Whether the destination is already up to date.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.copy_list.is_empty()
    }

    /// Copy the planned files with `workers` threads.
    ///
    /// # Errors
    ///
    /// * If `workers` is zero or larger than the copy-list
    /// * If the worker threads cannot be started
    pub fn execute<F>(self, workers: usize, on_progress: F) -> Result<SyncReport, EngineError>
    where
        F: Fn(&CopyProgress) + Sync,
    {
        Coordinator::new(self.roots, workers).run(self.copy_list, on_progress)
    }
}

/// Walk the source and destination trees and compute the copy-list.
///
/// # Errors
///
/// * If either root does not exist
/// * If walking either tree fails unrecoverably
pub fn plan(source: &Path, destination: &Path) -> Result<SyncPlan, EngineError> {
    if !source.exists() {
        return Err(EngineError::SourceNotFound(source.to_path_buf()));
    }
    if !destination.exists() {
        return Err(EngineError::DestinationNotFound(destination.to_path_buf()));
    }

    let roots = RootMap::new(source, destination);
    log::info!(
        "Planning sync {} -> {}",
        roots.source().display(),
        roots.destination().display()
    );

    let source_manifest = walk(roots.source())?;
    let destination_manifest = walk(roots.destination())?;

    let source_count = source_manifest.count();
    let destination_count = destination_manifest.count();
    let strategy = Strategy::select(source_count.file_count, destination_count.file_count);
    let copy_list = diff(&source_manifest, &destination_manifest, &roots);

    Ok(SyncPlan {
        roots,
        source: source_count,
        destination: destination_count,
        strategy,
        copy_list,
    })
}

/// Plan and execute a full sync run.
///
/// The worker count is clamped to the number of files that need copying.
/// An up-to-date destination yields an empty report.
///
/// # Errors
///
/// * If planning fails
/// * If `options.workers` is zero
/// * If the worker threads cannot be started
pub fn synchronize(options: &SyncOptions) -> Result<SyncReport, EngineError> {
    let plan = plan(&options.source, &options.destination)?;

    if plan.is_identical() {
        log::info!("Directories are identical");
        return Ok(SyncReport::default());
    }

    if options.workers == 0 {
        return Err(EngineError::InvalidWorkerCount {
            requested: 0,
            queued: plan.copy_list.len(),
        });
    }

    let workers = options.workers.min(plan.copy_list.len());
    plan.execute(workers, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::FileTime;
    use std::fs;
    use tempfile::TempDir;

    const STAMP: i64 = 1_700_000_000;

    fn write_file(path: &Path, content: &str, modified: i64) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        filetime::set_file_mtime(path, FileTime::from_unix_time(modified, 0)).unwrap();
    }

    fn mtime(path: &Path) -> i64 {
        FileTime::from_last_modification_time(&fs::metadata(path).unwrap()).unix_seconds()
    }

    fn setup() -> (TempDir, SyncOptions) {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("src");
        let destination = dir.path().join("dst");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&destination).unwrap();
        let options = SyncOptions {
            source,
            destination,
            workers: 3,
        };
        (dir, options)
    }

    #[test]
    fn test_plan_missing_roots() {
        let (dir, options) = setup();

        let missing_source = plan(&dir.path().join("nope"), &options.destination);
        let missing_destination = plan(&options.source, &dir.path().join("nope"));

        assert!(matches!(missing_source, Err(EngineError::SourceNotFound(_))));
        assert!(matches!(
            missing_destination,
            Err(EngineError::DestinationNotFound(_))
        ));
    }

    #[test]
    fn test_plan_empty_destination() {
        let (_dir, options) = setup();
        write_file(&options.source.join("a.txt"), "aa", STAMP);
        write_file(&options.source.join("sub/b.txt"), "bbb", STAMP);

        let plan = plan(&options.source, &options.destination).unwrap();

        assert_eq!(plan.strategy, Strategy::EmptyDestination);
        assert_eq!(plan.source.file_count, 2);
        assert_eq!(plan.destination.file_count, 0);
        assert_eq!(plan.to_copy().total_size, 5);
    }

    #[test]
    fn test_synchronize_mirrors_tree() {
        let (_dir, options) = setup();
        write_file(&options.source.join("top.txt"), "top", STAMP);
        write_file(&options.source.join("a/b/nested.txt"), "nested", STAMP + 1);
        write_file(&options.source.join("a/sibling.txt"), "sibling", STAMP + 2);

        let report = synchronize(&options).unwrap();

        assert_eq!(report.files_copied, 3);
        assert_eq!(report.bytes_copied, 16);
        assert_eq!(report.workers, 3);
        assert_eq!(
            fs::read_to_string(options.destination.join("a/b/nested.txt")).unwrap(),
            "nested"
        );
        assert_eq!(mtime(&options.destination.join("a/sibling.txt")), STAMP + 2);
    }

    #[test]
    fn test_second_run_copies_nothing() {
        let (_dir, options) = setup();
        write_file(&options.source.join("one.txt"), "1", STAMP);
        write_file(&options.source.join("dir/two.txt"), "22", STAMP);
        write_file(&options.source.join("dir/deeper/three.txt"), "333", STAMP);

        synchronize(&options).unwrap();
        let second = plan(&options.source, &options.destination).unwrap();

        assert_eq!(second.strategy, Strategy::Positional);
        assert!(second.is_identical());
        assert_eq!(synchronize(&options).unwrap().files_copied, 0);
    }

    #[test]
    fn test_updates_newer_and_adds_missing() {
        let (_dir, options) = setup();
        write_file(&options.source.join("x.txt"), "new x", 50);
        write_file(&options.source.join("y.txt"), "y", 50);
        write_file(&options.destination.join("x.txt"), "old", 40);

        let plan = plan(&options.source, &options.destination).unwrap();
        assert_eq!(plan.strategy, Strategy::Reconcile);
        assert_eq!(plan.copy_list.len(), 2);

        let report = plan.execute(2, |_| {}).unwrap();

        assert_eq!(report.files_copied, 2);
        assert_eq!(
            fs::read_to_string(options.destination.join("x.txt")).unwrap(),
            "new x"
        );
        assert_eq!(mtime(&options.destination.join("x.txt")), 50);
        assert!(options.destination.join("y.txt").exists());
    }

    #[test]
    fn test_newer_destination_is_left_alone() {
        let (_dir, options) = setup();
        write_file(&options.source.join("x.txt"), "source", 50);
        write_file(&options.source.join("y.txt"), "y", 50);
        write_file(&options.destination.join("x.txt"), "destination", 60);

        let report = synchronize(&options).unwrap();

        assert_eq!(report.files_copied, 1);
        assert_eq!(
            fs::read_to_string(options.destination.join("x.txt")).unwrap(),
            "destination"
        );
    }

    #[test]
    fn test_trailing_slash_roots_map_cleanly() {
        let (dir, options) = setup();
        write_file(&options.source.join("a.txt"), "a", STAMP);
        let with_slash = |p: &Path| PathBuf::from(format!("{}/", p.display()));

        let options = SyncOptions {
            source: with_slash(&options.source),
            destination: with_slash(&options.destination),
            workers: 1,
        };
        let report = synchronize(&options).unwrap();

        assert_eq!(report.files_copied, 1);
        assert!(dir.path().join("dst/a.txt").exists());
    }

    #[test]
    fn test_synchronize_rejects_zero_workers() {
        let (_dir, mut options) = setup();
        write_file(&options.source.join("a.txt"), "a", STAMP);
        options.workers = 0;

        assert!(matches!(
            synchronize(&options),
            Err(EngineError::InvalidWorkerCount { requested: 0, .. })
        ));
    }
}
