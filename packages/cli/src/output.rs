//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use bytesize::ByteSize;
use colored::Colorize;
use dsync_engine::{DirectoryCount, SyncReport};

/// Human-readable file count and size, e.g. `12 files (3.4 MB)`.
#[must_use]
pub fn format_count(count: &DirectoryCount) -> String {
    format!(
        "{} file{} ({})",
        count.file_count,
        if count.file_count == 1 { "" } else { "s" },
        ByteSize::b(count.total_size)
    )
}

/// Print statistics for one tree.
pub fn print_tree_info(label: &str, count: &DirectoryCount) {
    println!("{:<12} {}", label.cyan(), format_count(count));
}

/// Print what needs copying.
pub fn print_to_copy(count: &DirectoryCount) {
    println!("{:<12} {}\n", "To copy".cyan(), format_count(count).bold());
}

/// Print an informational message that ends the run.
pub fn print_notice(message: &str) {
    println!("{} {}", "•".dimmed(), message);
}

/// Print the outcome of a sync run.
pub fn print_summary(report: &SyncReport) {
    println!(
        "{} Copied {} file{} ({}) with {} worker{}",
        "✓".green(),
        report.files_copied,
        if report.files_copied == 1 { "" } else { "s" },
        ByteSize::b(report.bytes_copied),
        report.workers,
        if report.workers == 1 { "" } else { "s" }
    );

    if !report.is_clean() {
        print_warning(&format!(
            "{} file{} could not be copied",
            report.files_failed,
            if report.files_failed == 1 { "" } else { "s" }
        ));
        for failure in &report.failures {
            println!("  {} {}", "•".dimmed(), failure.reason.dimmed());
        }
    }
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_pluralizes() {
        let one = DirectoryCount {
            file_count: 1,
            total_size: 0,
        };
        let many = DirectoryCount {
            file_count: 3,
            total_size: 0,
        };

        assert!(format_count(&one).starts_with("1 file ("));
        assert!(format_count(&many).starts_with("3 files ("));
    }
}
