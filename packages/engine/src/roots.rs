//! Mapping paths between the source and destination roots.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Normalized source and destination roots of one sync run.
///
/// Both roots are cleaned lexically once, so `dir/`, `./dir` and `dir/x/..`
/// all name the same root. Trees must be walked from [`RootMap::source`] and
/// [`RootMap::destination`] for prefix substitution to line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMap {
    source: PathBuf,
    destination: PathBuf,
}

impl RootMap {
    /// Create a mapping between two roots.
    #[must_use]
    pub fn new(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Self {
        Self {
            source: path_clean::clean(source.as_ref()),
            destination: path_clean::clean(destination.as_ref()),
        }
    }

    /// The normalized source root.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The normalized destination root.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Replace the source root prefix of `path` with the destination root.
    ///
    /// Returns `None` if `path` is not under the source root.
    #[must_use]
    pub fn to_destination(&self, path: &Path) -> Option<PathBuf> {
        rebase(path, &self.source, &self.destination)
    }

    /// Replace the destination root prefix of `path` with the source root.
    ///
    /// Returns `None` if `path` is not under the destination root.
    #[must_use]
    pub fn to_source(&self, path: &Path) -> Option<PathBuf> {
        rebase(path, &self.destination, &self.source)
    }
}

fn rebase(path: &Path, from: &Path, to: &Path) -> Option<PathBuf> {
    path.strip_prefix(from).ok().map(|relative| to.join(relative))
}
