use crate::error::BundleError;
use std::path::PathBuf;

/// Why a requested target directory was left out of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The path does not exist or is not a directory.
    NotFound,
    /// The directory's basename is in the excluded set.
    Excluded,
}

/// A target the user named that will not be bundled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTarget {
    /// The absolute path the name resolved to.
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// The outcome of resolving user input into root directories.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Directories to bundle, in input order (or enumeration order for the "all" selection).
    pub targets: Vec<PathBuf>,
    /// Named entries that were dropped, in input order.
    pub skipped: Vec<SkippedTarget>,
}

/// Summary of one written report.
#[derive(Debug)]
pub struct ReportSummary {
    /// The report file.
    pub output: PathBuf,
    /// Number of matched files, including unreadable ones.
    pub files: usize,
    /// Number of matched files that got a diagnostic instead of their content.
    pub unreadable: usize,
}

/// Result of bundling a single root directory.
///
/// A failed directory does not stop the batch; the error is carried here instead.
#[derive(Debug)]
pub struct DirectoryOutcome {
    pub root: PathBuf,
    pub result: Result<ReportSummary, BundleError>,
}

/// Everything a batch run produced.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub skipped: Vec<SkippedTarget>,
    pub outcomes: Vec<DirectoryOutcome>,
}
