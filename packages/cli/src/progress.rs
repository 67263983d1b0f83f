//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use dsync_engine::CopyProgress;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar manager for a sync run.
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a progress bar counting finished files.
    ///
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_copy_bar(&self, total: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {prefix:<8} [{bar:25.green/dim}] {pos}/{len} files {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("━━─"),
        );
        pb.set_prefix("Copying");
        pb
    }

    /// Move a bar to the given snapshot.
    pub fn update(bar: &ProgressBar, progress: &CopyProgress) {
        bar.set_position(progress.files_done());
        if progress.files_failed > 0 {
            bar.set_message(format!("({} failed)", progress.files_failed));
        }
    }
}
