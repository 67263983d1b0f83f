//! Directory synchronization engine.
//!
//! This crate mirrors a source tree into a destination tree, copying only files
//! that are missing or newer:
//!
//! * Root mapping between source and destination paths
//! * Manifest diffing with a strategy picked by file counts
//! * A shared work queue claimed under a single lock
//! * A fixed pool of copy workers draining the queue
//!
//! # Example
//!
//! ```rust,ignore
//! use dsync_engine::plan;
//!
//! // Walk both trees and diff them first (for reporting)
//! let plan = plan(source, destination)?;
//! println!("{} files to copy", plan.to_copy().file_count);
//!
//! let report = plan.execute(4, |progress| {
//!     println!("{}/{} files", progress.files_done(), progress.files_total);
//! })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod coordinator;
mod diff;
mod error;
mod plan;
mod queue;
mod roots;

pub use coordinator::{Coordinator, CopyFailure, SyncReport};
pub use diff::{Strategy, diff};
pub use dsync_copy::CopyProgress;
pub use dsync_manifest::{DirectoryCount, FileRecord, Manifest};
pub use error::EngineError;
pub use plan::{SyncOptions, SyncPlan, plan, synchronize};
pub use queue::{WorkQueue, next_unclaimed};
pub use roots::RootMap;
