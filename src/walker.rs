//! Lazy directory walk with per-name subtree pruning.

use crate::matcher::ExcludeMatcher;
use ignore::{DirEntry, WalkBuilder};
use std::ffi::OsStr;
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing;

/// Iterator over the matching files below a root directory.
///
/// Backed by [`ignore::Walk`], which keeps its own stack of open directories, so arbitrarily deep
/// trees do not grow the call stack. Excluded directories are pruned in `filter_entry`, so
/// nothing below them is ever read. The root itself is not tested against the exclusion set.
/// Entries within a directory are visited by file name.
///
/// Directories that cannot be listed and entries that cannot be inspected are skipped.
pub struct TreeWalker {
    inner: ignore::Walk,
    extension: String,
}
impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>, matcher: &ExcludeMatcher, extension: &str) -> Self {
        let matcher = matcher.clone();
        let mut builder = WalkBuilder::new(root.into());
        builder
            .standard_filters(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_pruned(entry, &matcher));
        Self {
            inner: builder.build(),
            extension: extension.to_string(),
        }
    }
    fn is_match(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_some_and(|t| t.is_file())
            && entry.path().extension() == Some(OsStr::new(&self.extension))
    }
}
impl Iterator for TreeWalker {
    type Item = PathBuf;
    fn next(&mut self) -> Option<PathBuf> {
        loop {
            match self.inner.next()? {
                Ok(entry) if self.is_match(&entry) => return Some(entry.into_path()),
                Ok(_) => {}
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping unreadable entry: {}", _e);
                }
            }
        }
    }
}

fn is_pruned(entry: &DirEntry, matcher: &ExcludeMatcher) -> bool {
    let pruned = entry.depth() > 0
        && entry.file_type().is_some_and(|t| t.is_dir())
        && matcher.is_excluded(entry.path());
    #[cfg(feature = "logging")]
    if pruned {
        tracing::debug!("Excluded directory: {}", entry.path().display());
    }
    pruned
}
