//! dsync CLI entry point.
//!
//! Mirrors a source directory into a destination directory, copying only files
//! that are missing or newer, with a fixed pool of worker threads.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;

use clap::Parser;

use args::Args;
use dsync_engine::plan;
use progress::ProgressManager;

fn main() {
    let args = Args::parse();

    // Set up logging; RUST_LOG overrides the flag-derived level
    pretty_env_logger::formatted_builder()
        .filter_level(args.log_level())
        .parse_env("RUST_LOG")
        .init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.to_options();

    // Walk both trees and work out what to copy
    let plan = plan(&options.source, &options.destination)?;

    if plan.source.is_empty() {
        output::print_notice("Source directory is empty. Nothing to do.");
        return Ok(());
    }

    if options.workers == 0 || options.workers as u64 > plan.source.file_count {
        output::print_warning(&format!(
            "Wrong number of threads: {} (source holds {} files). Nothing to do.",
            options.workers, plan.source.file_count
        ));
        return Ok(());
    }

    if args.info {
        output::print_tree_info("Source", &plan.source);
        output::print_tree_info("Destination", &plan.destination);
    }

    if plan.is_identical() {
        output::print_notice("The directories are identical. Nothing to do.");
        return Ok(());
    }

    if args.info {
        output::print_to_copy(&plan.to_copy());
    }

    // Never start more workers than there are files to copy
    let workers = options.workers.min(plan.copy_list.len());

    let progress_mgr = ProgressManager::new(args.should_show_progress());
    let bar = progress_mgr.create_copy_bar(plan.copy_list.len() as u64);

    let report = plan.execute(workers, |progress| {
        ProgressManager::update(&bar, progress);
    })?;

    bar.finish_and_clear();

    output::print_summary(&report);
    Ok(())
}
