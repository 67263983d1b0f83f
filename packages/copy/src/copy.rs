//! Chunked file copying.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use filetime::FileTime;

use crate::error::CopyError;

/// Size of the buffer used to stream file contents.
pub const CHUNK_SIZE: usize = 256 * 1024;

/// Copy a file's bytes and stamp the target with the given modification time.
///
/// The target is created or truncated. Its parent directory must already exist.
/// If the copy fails after the target was created, the target is removed so a
/// truncated file never looks up to date.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path
/// * `modified` - Modification time to set on the target, in seconds since the Unix epoch
///
/// # Errors
///
/// * If the source cannot be opened
/// * If the target cannot be created
/// * If reading or writing fails partway through
/// * If the modification time cannot be set
pub fn copy_file(source: &Path, target: &Path, modified: i64) -> Result<u64, CopyError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    let mut input = File::open(source).map_err(|e| CopyError::OpenSource {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    let mut output = File::create(target).map_err(|e| CopyError::OpenDestination {
        path: target.to_path_buf(),
        io_error: e,
    })?;

    let bytes = match stream(&mut input, &mut output) {
        Ok(bytes) => bytes,
        Err(e) => {
            drop(output);
            discard(target);
            return Err(CopyError::Transfer {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            });
        }
    };

    drop(input);
    drop(output);

    if let Err(e) = filetime::set_file_mtime(target, FileTime::from_unix_time(modified, 0)) {
        discard(target);
        return Err(CopyError::SetModified {
            path: target.to_path_buf(),
            io_error: e,
        });
    }

    log::trace!("Copied {bytes} bytes to {}", target.display());

    Ok(bytes)
}

fn discard(target: &Path) {
    if let Err(e) = fs::remove_file(target) {
        log::error!("Failed to remove partial copy {}: {e}", target.display());
    }
}

fn stream<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<u64> {
    let mut buffer = vec![0_u8; CHUNK_SIZE];
    let mut total = 0_u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..read])?;
        total += read as u64;
    }

    writer.flush()?;
    Ok(total)
}
