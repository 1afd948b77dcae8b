use crate::error::BundleError;
use crate::matcher::ExcludeMatcher;
use crate::options::BundleOptions;
use crate::resolve::{absolute, resolve_names, resolve_targets};
use crate::types::{BatchResult, DirectoryOutcome, ReportSummary, Resolution};
use crate::walker::TreeWalker;
use crate::writer::ReportWriter;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

const REPORT_EXTENSION: &str = ".txt";
const FALLBACK_REPORT_NAME: &str = "root";

/// Validated options plus the compiled exclusion set.
#[derive(Debug, Clone)]
pub struct Bundler {
    options: BundleOptions,
    matcher: ExcludeMatcher,
    output_dir: PathBuf,
}
impl Bundler {
    /// # Errors
    ///
    /// Fails on an empty or path-like extension, an invalid excluded name, or an output
    /// directory that cannot be made absolute.
    pub fn new(options: BundleOptions) -> Result<Self, BundleError> {
        let ext = &options.extension;
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(BundleError::InvalidExtension(ext.clone()));
        }
        let matcher = ExcludeMatcher::new(&options.exclude)?;
        let output_dir = absolute(&options.output_dir)?;
        Ok(Self {
            options,
            matcher,
            output_dir,
        })
    }
    pub fn options(&self) -> &BundleOptions {
        &self.options
    }
    /// See [`resolve_targets`].
    pub fn resolve(&self, input: &str) -> Result<Resolution, BundleError> {
        resolve_targets(input, &self.options.base_dir, &self.matcher)
    }
    /// See [`resolve_names`].
    pub fn resolve_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Resolution, BundleError> {
        resolve_names(names, &self.options.base_dir, &self.matcher)
    }
    /// Lazily lists the matching files below `root`.
    pub fn walk(&self, root: impl Into<PathBuf>) -> TreeWalker {
        TreeWalker::new(root, &self.matcher, &self.options.extension)
    }
    /// `<output dir>/<root basename>.txt`.
    pub fn report_path(&self, root: &Path) -> PathBuf {
        let mut name = root
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(FALLBACK_REPORT_NAME));
        name.push(REPORT_EXTENSION);
        self.output_dir.join(name)
    }
    /// Walks `root` and writes its report.
    pub fn bundle_directory(&self, root: &Path) -> Result<ReportSummary, BundleError> {
        let root = absolute(root)?;
        let output = self.report_path(&root);
        #[cfg(feature = "logging")]
        tracing::debug!("Bundling {} into {}", root.display(), output.display());
        ReportWriter::new(&self.options.extension, self.options.binary_detection).write(
            &root,
            self.walk(&root),
            &output,
        )
    }
    /// Bundles each root in turn. A failing root yields a failed outcome; the rest still run.
    pub fn bundle_all<'a, I>(&'a self, roots: I) -> impl Iterator<Item = DirectoryOutcome> + 'a
    where
        I: IntoIterator<Item = PathBuf>,
        I::IntoIter: 'a,
    {
        roots.into_iter().map(move |root| {
            let result = self.bundle_directory(&root);
            #[cfg(feature = "logging")]
            if let Err(e) = &result {
                tracing::debug!("Bundling {} failed: {}", root.display(), e);
            }
            DirectoryOutcome { root, result }
        })
    }
}

/// Resolves `input` and bundles every resulting directory.
///
/// # Errors
///
/// Only option validation and target resolution are fatal; per-directory failures are
/// reported in [`BatchResult::outcomes`].
pub fn bundle(options: BundleOptions, input: &str) -> Result<BatchResult, BundleError> {
    let bundler = Bundler::new(options)?;
    let Resolution { targets, skipped } = bundler.resolve(input)?;
    let outcomes = bundler.bundle_all(targets).collect();
    Ok(BatchResult { skipped, outcomes })
}
