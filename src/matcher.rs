//! Directory-name exclusion.

use crate::error::BundleError;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

/// Case-insensitive set of excluded directory basenames.
///
/// Names are compared literally, so `[id]` excludes exactly the directory called `[id]`.
/// Only the final path segment is ever tested.
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    names: HashSet<String>,
}
impl ExcludeMatcher {
    /// # Errors
    ///
    /// Rejects empty names and names containing a path separator; neither can be a basename.
    pub fn new(names: &[String]) -> Result<Self, BundleError> {
        let mut set = HashSet::with_capacity(names.len());
        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
                return Err(BundleError::InvalidExcludeName(name.clone()));
            }
            set.insert(trimmed.to_lowercase());
        }
        Ok(Self { names: set })
    }
    pub fn is_excluded_name(&self, name: &OsStr) -> bool {
        self.names.contains(&name.to_string_lossy().to_lowercase())
    }
    /// Tests the basename of `path`. Paths without one (such as `/`) are never excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.is_excluded_name(name))
    }
}
