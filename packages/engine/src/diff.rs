//! Manifest diffing - decide which source files must be copied.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use dsync_manifest::{FileRecord, Manifest};

use crate::roots::RootMap;

/// How two manifests are compared, picked from their file counts alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Destination is empty; copy everything.
    EmptyDestination,
    /// Same number of files; compare records pairwise by position.
    Positional,
    /// Different number of files; match records by mapped path.
    Reconcile,
}

impl Strategy {
    /// Pick a strategy from the source and destination file counts.
    #[must_use]
    pub const fn select(source_files: u64, destination_files: u64) -> Self {
        if destination_files == 0 {
            Self::EmptyDestination
        } else if source_files == destination_files {
            Self::Positional
        } else {
            Self::Reconcile
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDestination => write!(f, "empty destination"),
            Self::Positional => write!(f, "positional"),
            Self::Reconcile => write!(f, "reconcile"),
        }
    }
}

/// Compute the copy-list: source records that are missing from, or newer than,
/// the destination.
///
/// Returned records are fresh copies of source records with `copied` cleared.
/// A record whose timestamp equals its destination counterpart is up to date.
///
/// # Arguments
///
/// * `source` - Manifest walked from `roots.source()`
/// * `destination` - Manifest walked from `roots.destination()`
/// * `roots` - Mapping between the two roots
#[must_use]
pub fn diff(source: &Manifest, destination: &Manifest, roots: &RootMap) -> Manifest {
    let strategy = Strategy::select(
        source.count().file_count,
        destination.count().file_count,
    );

    log::debug!(
        "Diffing {} source files against {} destination files ({strategy})",
        source.len(),
        destination.len()
    );

    let copy_list = match strategy {
        Strategy::EmptyDestination => copy_all(source),
        Strategy::Positional => positional(source, destination, roots),
        Strategy::Reconcile => reconcile(source, destination, roots),
    };

    log::debug!("{} files need copying", copy_list.len());

    copy_list
}

fn copy_all(source: &Manifest) -> Manifest {
    source.iter().map(FileRecord::unclaimed).collect()
}

/// Pair records by index. Only accurate when both trees list files in the
/// same relative order.
fn positional(source: &Manifest, destination: &Manifest, roots: &RootMap) -> Manifest {
    source
        .iter()
        .zip(destination.iter())
        .filter(|(src, dst)| !is_up_to_date(src, dst, roots))
        .map(|(src, _)| src.unclaimed())
        .collect()
}

fn is_up_to_date(src: &FileRecord, dst: &FileRecord, roots: &RootMap) -> bool {
    let exists = roots
        .to_destination(&src.path)
        .is_some_and(|target| target.exists());

    exists && src.modified <= dst.modified
}

fn reconcile(source: &Manifest, destination: &Manifest, roots: &RootMap) -> Manifest {
    let mut copy_list = Manifest::new();

    // Files on both sides where the source is strictly newer
    for dst in destination {
        let Some(candidate) = roots.to_source(&dst.path) else {
            continue;
        };
        if let Some(src) = source.find(&candidate) {
            if dst.modified < src.modified {
                copy_list.push(src.unclaimed());
            }
        }
    }

    // Files the destination has never seen
    for src in source {
        let seen = roots
            .to_destination(&src.path)
            .is_some_and(|candidate| destination.find(&candidate).is_some());
        if !seen {
            copy_list.push(src.unclaimed());
        }
    }

    copy_list
}
