//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;
use dsync_engine::SyncOptions;
use log::LevelFilter;

/// CLI arguments for dsync.
#[derive(Debug, Parser)]
#[command(
    name = "dsync",
    about = "Mirror a source directory into a destination, copying only new and newer files",
    version
)]
pub struct Args {
    /// Source directory name.
    #[arg(long = "src", short = 's', value_name = "DIR")]
    pub source: PathBuf,

    /// Destination directory name.
    #[arg(long = "dst", short = 'd', value_name = "DIR")]
    pub destination: PathBuf,

    /// Number of worker threads.
    #[arg(long, short = 't', value_name = "N", default_value_t = 2)]
    pub threads: usize,

    /// Show statistics about both trees and the files to copy.
    #[arg(long, short = 'i')]
    pub info: bool,

    /// Disable the progress bar (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Build engine options from the flags.
    #[must_use]
    pub fn to_options(&self) -> SyncOptions {
        SyncOptions {
            source: self.source.clone(),
            destination: self.destination.clone(),
            workers: self.threads,
        }
    }

    /// Default log level; `RUST_LOG` still overrides it.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_flags() {
        let args = Args::try_parse_from([
            "dsync",
            "--src=/data",
            "--dst",
            "/backup",
            "--threads=8",
            "--info",
        ])
        .unwrap();

        let options = args.to_options();
        assert_eq!(options.source, PathBuf::from("/data"));
        assert_eq!(options.destination, PathBuf::from("/backup"));
        assert_eq!(options.workers, 8);
        assert!(args.info);
        assert!(args.should_show_progress());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["dsync", "-s", "a", "-d", "b"]).unwrap();

        assert_eq!(args.threads, 2);
        assert!(!args.info);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_verbose_and_no_progress() {
        let args =
            Args::try_parse_from(["dsync", "-s", "a", "-d", "b", "-v", "--no-progress"]).unwrap();

        assert_eq!(args.log_level(), LevelFilter::Debug);
        assert!(!args.should_show_progress());
    }

    #[test]
    fn test_source_and_destination_are_required() {
        assert!(Args::try_parse_from(["dsync", "--src", "a"]).is_err());
        assert!(Args::try_parse_from(["dsync", "--dst", "b"]).is_err());
    }
}
