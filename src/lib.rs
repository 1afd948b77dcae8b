//! # dirbundle
//!
//! `dirbundle` concatenates the source files below one or more directory trees into one plain-text
//! report per tree, producing a snapshot of a codebase that is easy to read or feed to an LLM.
//!
//! The work splits into three steps, each usable on its own:
//!
//! - [`resolve_targets`] turns a line of user input into root directories.
//! - [`TreeWalker`] lazily lists the matching files under a root, skipping excluded directories
//!   at any depth.
//! - [`ReportWriter`] streams those files into a banner-delimited report.
//!
//! [`Bundler`] ties them together and isolates failures per directory.
//!
//! # Features
//!
//! - `logging` (default): debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirbundle::{BundleBuilder, bundle};
//!
//! let options = BundleBuilder::new(".")
//!     .extension("rs")
//!     .exclude(vec!["target".into(), ".git".into()])
//!     .build();
//!
//! let result = bundle(options, "").expect("Failed to bundle");
//! for outcome in result.outcomes {
//!     match outcome.result {
//!         Ok(report) => println!("{}: {} files", report.output.display(), report.files),
//!         Err(e) => eprintln!("{}: {}", outcome.root.display(), e),
//!     }
//! }
//! ```

mod bundler;
mod error;
mod matcher;
mod options;
mod resolve;
mod types;
mod walker;
mod writer;

pub use bundler::{Bundler, bundle};
pub use error::{BundleError, ReadFailure};
pub use matcher::ExcludeMatcher;
pub use options::{
    BinaryDetection, BundleBuilder, BundleOptions, DEFAULT_EXCLUDED, DEFAULT_EXTENSION,
};
pub use resolve::{normalize, resolve_names, resolve_targets};
pub use types::{
    BatchResult, DirectoryOutcome, ReportSummary, Resolution, SkipReason, SkippedTarget,
};
pub use walker::TreeWalker;
pub use writer::ReportWriter;
