//! Destination directory materialization.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::Path;

use crate::error::CopyError;

/// Create every missing segment of a directory path, outermost first.
///
/// Existing segments are left alone. A segment that cannot be created is logged
/// and skipped; the file open that follows reports the real failure.
///
/// Returns the number of directories created.
pub fn create_dir_tree(dir: &Path) -> usize {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return 0;
    }

    let segments: Vec<&Path> = dir
        .ancestors()
        .filter(|segment| !segment.as_os_str().is_empty())
        .collect();

    let mut created = 0;
    for segment in segments.into_iter().rev() {
        if segment.exists() {
            continue;
        }

        match fs::create_dir(segment) {
            Ok(()) => {
                log::debug!("Created directory {}", segment.display());
                created += 1;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                let error = CopyError::CreateDirError {
                    path: segment.to_path_buf(),
                    io_error: e,
                };
                log::error!("{error}");
            }
        }
    }

    created
}
