use std::path::PathBuf;

/// Directory names skipped wherever they appear, unless overridden.
pub const DEFAULT_EXCLUDED: &[&str] = &["bin", "obj"];
/// Extension of the files collected into a report, unless overridden.
pub const DEFAULT_EXTENSION: &str = "cs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryDetection {
    /// A NUL byte in the first block marks the file as binary.
    Simple,
    /// Delegates to `content_inspector`.
    Accurate,
    /// Every matched file is treated as text.
    #[default]
    None,
}
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Directory that relative target names (and the "all" selection) resolve against.
    pub base_dir: PathBuf,
    /// Directory reports are written into.
    pub output_dir: PathBuf,
    /// Target extension, without the leading dot. Compared case-sensitively.
    pub extension: String,
    /// Directory basenames, compared literally and case-insensitively.
    pub exclude: Vec<String>,
    pub binary_detection: BinaryDetection,
}
impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            binary_detection: BinaryDetection::None,
        }
    }
}
#[derive(Debug, Default)]
pub struct BundleBuilder {
    options: BundleOptions,
}
impl BundleBuilder {
    /// Starts from the defaults, with both the base and output directory set to `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            options: BundleOptions {
                output_dir: base_dir.clone(),
                base_dir,
                ..Default::default()
            },
        }
    }
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }
    pub fn extension(mut self, ext: impl AsRef<str>) -> Self {
        let ext = ext.as_ref().trim();
        self.options.extension = ext.strip_prefix('.').unwrap_or(ext).to_string();
        self
    }
    /// Replaces the excluded name set.
    pub fn exclude(mut self, names: Vec<String>) -> Self {
        self.options.exclude = names;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
