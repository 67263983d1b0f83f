//! Recursive directory enumeration.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use filetime::FileTime;

use crate::error::WalkError;
use crate::record::{FileRecord, Manifest};

/// Longest path, in bytes, the walker accepts before giving up.
pub const MAX_PATH_LEN: usize = 4096;

/// Walk a directory tree and collect a record for every regular file.
///
/// Subdirectories are descended into; symlinks, devices, sockets and fifos are
/// skipped. Records come out in traversal order.
///
/// A root or subdirectory that cannot be listed is logged and treated as empty,
/// so the returned manifest may be partial.
///
/// # Errors
///
/// * If a path longer than [`MAX_PATH_LEN`] is encountered
/// * If a listed regular file cannot be stat'ed
pub fn walk(root: &Path) -> Result<Manifest, WalkError> {
    walk_with_limit(root, MAX_PATH_LEN, |dir, e| {
        log::warn!("Error opening directory {}: {e}", dir.display());
    })
}

fn walk_with_limit<F>(
    root: &Path,
    max_path_len: usize,
    mut on_unreadable: F,
) -> Result<Manifest, WalkError>
where
    F: FnMut(&Path, &jwalk::Error),
{
    log::debug!("Walking directory: {}", root.display());

    let mut manifest = Manifest::new();

    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            log::warn!("Error opening directory {}: not a directory", root.display());
            return Ok(manifest);
        }
        Err(e) => {
            log::warn!("Error opening directory {}: {e}", root.display());
            return Ok(manifest);
        }
    }

    for entry in jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
    {
        let mut entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Error opening directory: {e}");
                continue;
            }
        };

        let path = entry.path();

        // jwalk reports a directory it could not list on the directory's own entry
        if let Some(e) = entry.read_children_error.take() {
            on_unreadable(&path, &e);
        }

        if path == root {
            continue;
        }

        let len = path.as_os_str().len();
        if len > max_path_len {
            return Err(WalkError::PathTooLong {
                path,
                len,
                max: max_path_len,
            });
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            log::trace!("Skipping non-regular file {}", path.display());
            continue;
        }

        let metadata = fs::metadata(&path).map_err(|e| WalkError::Stat {
            path: path.clone(),
            io_error: e,
        })?;

        let modified = FileTime::from_last_modification_time(&metadata).unix_seconds();
        manifest.push(FileRecord::new(path, modified, metadata.len()));
    }

    log::debug!("Found {} files under {}", manifest.len(), root.display());

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sorted_paths(manifest: &Manifest) -> Vec<PathBuf> {
        let mut paths: Vec<_> = manifest.iter().map(|r| r.path.clone()).collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_walk_collects_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "aaa").unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("sub/b.txt"), "bb").unwrap();
        fs::write(dir.path().join("sub/deeper/c.txt"), "c").unwrap();

        let manifest = walk(dir.path()).unwrap();

        assert_eq!(
            sorted_paths(&manifest),
            vec![
                dir.path().join("a.txt"),
                dir.path().join("sub/b.txt"),
                dir.path().join("sub/deeper/c.txt"),
            ]
        );
        assert_eq!(manifest.count().total_size, 6);
        assert!(manifest.iter().all(|r| !r.copied));
    }

    #[test]
    fn test_walk_records_modification_time() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("stamped.txt");
        fs::write(&file, "x").unwrap();
        filetime::set_file_mtime(&file, FileTime::from_unix_time(1_600_000_000, 0)).unwrap();

        let manifest = walk(dir.path()).unwrap();

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.records()[0].modified, 1_600_000_000);
        assert_eq!(manifest.records()[0].size, 1);
    }

    #[test]
    fn test_walk_includes_hidden_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".hidden"), "h").unwrap();

        let manifest = walk(dir.path()).unwrap();

        assert_eq!(sorted_paths(&manifest), vec![dir.path().join(".hidden")]);
    }

    #[test]
    fn test_walk_empty_directories_produce_no_records() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("empty/nested")).unwrap();

        let manifest = walk(dir.path()).unwrap();

        assert!(manifest.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_symlinks() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.txt"), "r").unwrap();
        fs::create_dir(dir.path().join("real_dir")).unwrap();
        fs::write(dir.path().join("real_dir/inner.txt"), "i").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("real_dir"), dir.path().join("link_dir"))
            .unwrap();

        let manifest = walk(dir.path()).unwrap();

        assert_eq!(
            sorted_paths(&manifest),
            vec![dir.path().join("real.txt"), dir.path().join("real_dir/inner.txt")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_fifos() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("plain.txt"), "p").unwrap();
        let status = std::process::Command::new("mkfifo")
            .arg(dir.path().join("pipe"))
            .status()
            .unwrap();
        assert!(status.success());

        let manifest = walk(dir.path()).unwrap();

        assert_eq!(sorted_paths(&manifest), vec![dir.path().join("plain.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_reports_unreadable_subdirectory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), "h").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not stop root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut unreadable = Vec::new();
        let result = walk_with_limit(dir.path(), MAX_PATH_LEN, |path, _| {
            unreadable.push(path.to_path_buf());
        });

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let manifest = result.unwrap();
        assert_eq!(sorted_paths(&manifest), vec![dir.path().join("a.txt")]);
        assert_eq!(unreadable, vec![locked]);
    }

    #[test]
    fn test_walk_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();

        let manifest = walk(&dir.path().join("does-not-exist")).unwrap();

        assert!(manifest.is_empty());
    }

    #[test]
    fn test_walk_file_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "p").unwrap();

        let manifest = walk(&file).unwrap();

        assert!(manifest.is_empty());
    }

    #[test]
    fn test_walk_rejects_overlong_paths() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a-rather-long-file-name.txt"), "x").unwrap();
        let limit = dir.path().as_os_str().len() + 4;

        let result = walk_with_limit(dir.path(), limit, |_, _| {});

        assert!(matches!(
            result,
            Err(WalkError::PathTooLong { max, .. }) if max == limit
        ));
    }
}
