use dirbundle::{BundleBuilder, Bundler, SkipReason, bundle};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn report_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".txt"))
        .collect()
}
fn banner_count(report: &str) -> usize {
    report.lines().filter(|l| l.starts_with("FILE: ")).count()
}
#[test]
fn integration_blank_input_bundles_every_subdirectory() {
    let base = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::create_dir_all(base.path().join("A")).unwrap();
    fs::create_dir_all(base.path().join("B")).unwrap();
    fs::create_dir_all(base.path().join("bin")).unwrap();
    fs::write(base.path().join("A/x.cs"), "hello").unwrap();
    fs::write(base.path().join("bin/y.cs"), "nope").unwrap();
    let options = BundleBuilder::new(base.path()).output_dir(out.path()).build();
    let result = bundle(options, "").unwrap();
    assert!(result.skipped.is_empty());
    assert_eq!(result.outcomes.len(), 2);
    assert!(result.outcomes.iter().all(|o| o.result.is_ok()));
    assert_eq!(
        report_names(out.path()),
        BTreeSet::from(["A.txt".to_string(), "B.txt".to_string()])
    );
    let a = fs::read_to_string(out.path().join("A.txt")).unwrap();
    assert_eq!(banner_count(&a), 1);
    let x = base.path().join("A").join("x.cs");
    assert!(a.contains(&format!("FILE: {}\n{}\nhello\n\n", x.display(), "#".repeat(120))));
    assert!(!a.contains("nope"));
    let b = fs::read_to_string(out.path().join("B.txt")).unwrap();
    assert_eq!(banner_count(&b), 0);
    assert_eq!(b.lines().count(), 4);
}
#[test]
fn integration_missing_names_write_nothing() {
    let base = tempdir().unwrap();
    let out = tempdir().unwrap();
    let options = BundleBuilder::new(base.path()).output_dir(out.path()).build();
    let result = bundle(options, "Missing NotReal").unwrap();
    assert_eq!(result.skipped.len(), 2);
    assert!(result.skipped.iter().all(|s| s.reason == SkipReason::NotFound));
    assert!(result.outcomes.is_empty());
    assert!(report_names(out.path()).is_empty());
}
#[test]
fn integration_empty_base_writes_nothing() {
    let base = tempdir().unwrap();
    let options = BundleBuilder::new(base.path()).build();
    let result = bundle(options, "\n").unwrap();
    assert!(result.outcomes.is_empty());
    assert!(report_names(base.path()).is_empty());
}
#[test]
fn integration_failed_directory_does_not_stop_batch() {
    let base = tempdir().unwrap();
    fs::create_dir_all(base.path().join("A")).unwrap();
    fs::create_dir_all(base.path().join("B")).unwrap();
    fs::write(base.path().join("B/b.cs"), "bee").unwrap();
    // A directory where A's report should go makes that report impossible to create.
    fs::create_dir_all(base.path().join("out/A.txt")).unwrap();
    let options = BundleBuilder::new(base.path())
        .output_dir(base.path().join("out"))
        .build();
    let result = bundle(options, "A B").unwrap();
    assert_eq!(result.outcomes.len(), 2);
    assert!(result.outcomes[0].result.is_err());
    let report = result.outcomes[1].result.as_ref().unwrap();
    assert_eq!(report.files, 1);
    let b = fs::read_to_string(&report.output).unwrap();
    assert!(b.contains("bee"));
}
#[test]
fn integration_custom_extension_and_exclusions() {
    let base = tempdir().unwrap();
    fs::create_dir_all(base.path().join("proj/src")).unwrap();
    fs::create_dir_all(base.path().join("proj/target/debug")).unwrap();
    fs::create_dir_all(base.path().join("proj/bin")).unwrap();
    fs::write(base.path().join("proj/src/main.rs"), "fn main() {}").unwrap();
    fs::write(base.path().join("proj/target/debug/build.rs"), "// generated").unwrap();
    fs::write(base.path().join("proj/bin/tool.rs"), "// kept").unwrap();
    fs::write(base.path().join("proj/src/skip.cs"), "class X {}").unwrap();
    let options = BundleBuilder::new(base.path())
        .extension(".rs")
        .exclude(vec!["TARGET".into()])
        .build();
    let bundler = Bundler::new(options).unwrap();
    let report = bundler.bundle_directory(&base.path().join("proj")).unwrap();
    assert_eq!(report.files, 2);
    let text = fs::read_to_string(&report.output).unwrap();
    assert!(text.starts_with("Bundle of .rs files for directory: "));
    assert!(text.contains("fn main() {}"));
    assert!(text.contains("// kept"));
    assert!(!text.contains("// generated"));
    assert!(!text.contains("class X"));
}
#[test]
fn integration_report_never_includes_itself() {
    let base = tempdir().unwrap();
    let root = base.path().join("notes");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "note").unwrap();
    let options = BundleBuilder::new(base.path())
        .output_dir(&root)
        .extension("txt")
        .build();
    let bundler = Bundler::new(options).unwrap();
    let report = bundler.bundle_directory(&root).unwrap();
    assert_eq!(report.output, root.join("notes.txt"));
    assert_eq!(report.files, 1);
    let text = fs::read_to_string(&report.output).unwrap();
    assert_eq!(banner_count(&text), 1);
}
#[test]
fn integration_walk_is_lazy_and_finite() {
    let base = tempdir().unwrap();
    let mut dir = base.path().to_path_buf();
    for i in 0..200 {
        dir.push(format!("d{}", i));
    }
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("deep.cs"), "deep").unwrap();
    let bundler = Bundler::new(BundleBuilder::new(base.path()).build()).unwrap();
    let mut walk = bundler.walk(base.path());
    assert_eq!(walk.next(), Some(dir.join("deep.cs")));
    assert_eq!(walk.next(), None);
}
