//! Command-line interface for dirbundle.
//!
//! Asks for the directories to bundle (or takes them as arguments) and writes one
//! `<directory>.txt` report per directory into the current working directory.

use clap::Parser;
use dirbundle::{
    BinaryDetection, BundleBuilder, Bundler, DEFAULT_EXTENSION, DirectoryOutcome, SkipReason,
    SkippedTarget,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::exit;

/// dirbundle — concatenate a directory tree's source files into one text report
#[derive(Parser)]
#[command(name = "dirbundle", version, about, long_about = None)]
struct Cli {
    /// Directories to bundle; prompts on standard input when none are given
    dirs: Vec<String>,

    /// Extension of the files to collect (with or without the leading dot)
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Directory names to skip at any depth (can be repeated; replaces the default bin/obj)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Binary detection strategy
    #[arg(long, default_value = "none", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_bundler(self, base_dir: &Path) -> Result<(Bundler, Vec<String>), Box<dyn Error>> {
        let mut builder = BundleBuilder::new(base_dir)
            .extension(&self.extension)
            .binary_detection(self.binary_detection);
        if !self.exclude.is_empty() {
            builder = builder.exclude(self.exclude);
        }
        Ok((Bundler::new(builder.build())?, self.dirs))
    }
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let base_dir = std::env::current_dir()?;
    let (bundler, dirs) = cli.into_bundler(&base_dir)?;
    println!("Base directory: {}", base_dir.display());

    let resolution = if dirs.is_empty() {
        println!("Enter directory names separated by spaces (empty = all subdirectories):");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        bundler.resolve(&input)?
    } else {
        bundler.resolve_names(&dirs)?
    };

    for skipped in &resolution.skipped {
        print_skipped(skipped);
    }
    if resolution.targets.is_empty() {
        println!("Nothing to process: the directory list is empty.");
        return Ok(());
    }

    let ext = &bundler.options().extension;
    for outcome in bundler.bundle_all(resolution.targets) {
        print_outcome(&outcome, ext);
    }
    println!("Done.");
    Ok(())
}

fn print_skipped(skipped: &SkippedTarget) {
    match skipped.reason {
        SkipReason::NotFound => println!("[!] Directory not found: {}", skipped.path.display()),
        SkipReason::Excluded => {
            println!("[!] Directory skipped (excluded): {}", skipped.path.display())
        }
    }
}

fn print_outcome(outcome: &DirectoryOutcome, ext: &str) {
    let name = outcome
        .root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| outcome.root.display().to_string());
    match &outcome.result {
        Ok(report) => {
            println!("[{}] .{} files found: {}", name, ext, report.files);
            if report.unreadable > 0 {
                println!("[{}] unreadable files: {}", name, report.unreadable);
            }
            println!("[{}] output file: {}", name, report.output.display());
        }
        Err(e) => eprintln!("[{}] failed: {}", name, e),
    }
}
