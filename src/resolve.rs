//! Turning a line of user input into the list of root directories to bundle.

use crate::error::BundleError;
use crate::matcher::ExcludeMatcher;
use crate::types::{Resolution, SkipReason, SkippedTarget};
use std::fs;
use std::path::{Component, Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Resolves whitespace-separated directory names against `base_dir`.
///
/// Blank input selects every immediate subdirectory of `base_dir` whose name is not excluded;
/// excluded ones are dropped without a skip record. Otherwise each name is made absolute and
/// kept only if it is an existing directory with a non-excluded basename; the others are reported
/// in [`Resolution::skipped`].
///
/// # Errors
///
/// Fails only when `base_dir` cannot be made absolute or, for blank input, cannot be listed.
/// Individual entries of `base_dir` that cannot be read are skipped.
pub fn resolve_targets(
    input: &str,
    base_dir: &Path,
    matcher: &ExcludeMatcher,
) -> Result<Resolution, BundleError> {
    let names: Vec<&str> = input.split_whitespace().collect();
    resolve_names(&names, base_dir, matcher)
}

/// Like [`resolve_targets`], for names that are already split. An empty slice selects every
/// immediate subdirectory of `base_dir`.
pub fn resolve_names<S: AsRef<str>>(
    names: &[S],
    base_dir: &Path,
    matcher: &ExcludeMatcher,
) -> Result<Resolution, BundleError> {
    let base_dir = absolute(base_dir)?;
    if names.is_empty() {
        return all_subdirectories(&base_dir, matcher);
    }
    let mut resolution = Resolution {
        targets: Vec::with_capacity(names.len()),
        skipped: Vec::new(),
    };
    for name in names {
        let name: &str = name.as_ref();
        let path = normalize(&base_dir.join(name));
        let reason = if !path.is_dir() {
            Some(SkipReason::NotFound)
        } else if matcher.is_excluded(&path) {
            Some(SkipReason::Excluded)
        } else {
            None
        };
        match reason {
            Some(reason) => resolution.skipped.push(SkippedTarget { path, reason }),
            None => resolution.targets.push(path),
        }
    }
    Ok(resolution)
}

fn all_subdirectories(base_dir: &Path, matcher: &ExcludeMatcher) -> Result<Resolution, BundleError> {
    let entries = fs::read_dir(base_dir).map_err(|e| BundleError::io(base_dir, e))?;
    let mut targets = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if matcher.is_excluded(&path) {
            #[cfg(feature = "logging")]
            tracing::debug!("Excluded directory: {}", path.display());
            continue;
        }
        targets.push(path);
    }
    Ok(Resolution {
        targets,
        skipped: Vec::new(),
    })
}

/// Makes `path` absolute against the current directory and folds `.`/`..` lexically.
pub fn absolute(path: &Path) -> Result<PathBuf, BundleError> {
    let path = std::path::absolute(path).map_err(|e| BundleError::io(path, e))?;
    Ok(normalize(&path))
}

/// Lexical normalization: drops `.` segments and lets `..` remove the preceding segment.
/// Symbolic links are not resolved, so the result reads like the path the user typed.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
