//! Report writing.
//!
//! A report is plain UTF-8 text (no byte-order mark): a three-line header naming the root and the
//! generation time, then one banner-delimited block per matched file. File contents are copied
//! verbatim; a file that cannot be read gets a one-line diagnostic in its block instead.

use crate::error::{BundleError, ReadFailure};
use crate::options::BinaryDetection;
use crate::types::ReportSummary;
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

pub const BANNER_WIDTH: usize = 120;
pub const FILE_PREFIX: &str = "FILE: ";
pub const FAILURE_PREFIX: &str = "[!] Failed to read file: ";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const SNIFF_LEN: usize = 4096;

#[derive(Debug, Clone, Copy)]
pub struct ReportWriter<'a> {
    extension: &'a str,
    binary_detection: BinaryDetection,
}
impl<'a> ReportWriter<'a> {
    pub fn new(extension: &'a str, binary_detection: BinaryDetection) -> Self {
        Self {
            extension,
            binary_detection,
        }
    }

    /// Creates or truncates `output` and writes the report for `root` from `files`.
    ///
    /// `files` is consumed lazily, one file at a time. If `output` itself shows up in `files`
    /// it is left out. The file handle is flushed and closed before this returns, on success
    /// and on failure alike.
    ///
    /// # Errors
    ///
    /// Fails if `output` cannot be created or written. Unreadable source files are not errors.
    pub fn write<I>(&self, root: &Path, files: I, output: &Path) -> Result<ReportSummary, BundleError>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let file = open_report(output).map_err(|e| BundleError::io(output, e))?;
        let mut out = BufWriter::new(file);
        let mut summary = ReportSummary {
            output: output.to_path_buf(),
            files: 0,
            unreadable: 0,
        };
        self.write_header(&mut out, root)
            .map_err(|e| BundleError::io(output, e))?;
        for path in files {
            if path == output {
                continue;
            }
            summary.files += 1;
            let readable = self
                .write_entry(&mut out, &path)
                .map_err(|e| BundleError::io(output, e))?;
            if !readable {
                summary.unreadable += 1;
            }
        }
        out.flush().map_err(|e| BundleError::io(output, e))?;
        Ok(summary)
    }

    fn write_header(&self, out: &mut impl Write, root: &Path) -> io::Result<()> {
        writeln!(
            out,
            "Bundle of .{} files for directory: {}",
            self.extension,
            root.display()
        )?;
        writeln!(out, "Date: {}", Local::now().format(TIMESTAMP_FORMAT))?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(out)
    }

    /// Writes one banner-delimited block. Returns whether the file's content made it in.
    fn write_entry(&self, out: &mut impl Write, path: &Path) -> io::Result<bool> {
        let rule = "#".repeat(BANNER_WIDTH);
        writeln!(out, "{}", rule)?;
        writeln!(out, "{}{}", FILE_PREFIX, path.display())?;
        writeln!(out, "{}", rule)?;
        let readable = match read_source(path, self.binary_detection) {
            Ok(content) => {
                out.write_all(content.as_bytes())?;
                writeln!(out)?;
                true
            }
            Err(failure) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Unreadable file {}: {}", path.display(), failure);
                writeln!(out, "{}{}: {}", FAILURE_PREFIX, failure.kind(), failure)?;
                false
            }
        };
        writeln!(out)?;
        Ok(readable)
    }
}

/// Reads a source file as UTF-8 text, minus a leading byte-order mark.
pub fn read_source(path: &Path, detection: BinaryDetection) -> Result<String, ReadFailure> {
    let mut bytes = fs::read(path)?;
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let is_binary = match detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        return Err(ReadFailure::Binary);
    }
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    Ok(String::from_utf8(bytes)?)
}

/// Opens the report for writing while still letting other processes read it.
fn open_report(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(windows)]
    {
        use std::os::windows::fs::OpenOptionsExt;
        const FILE_SHARE_READ: u32 = 0x0000_0001;
        options.share_mode(FILE_SHARE_READ);
    }
    options.open(path)
}
