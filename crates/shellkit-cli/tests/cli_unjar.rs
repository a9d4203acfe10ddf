use std::fs;
use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

#[allow(deprecated)]
fn unjar_cmd() -> Command {
    Command::cargo_bin("unjar").unwrap()
}

fn write_zip(path: &Path, name: &str, data: &[u8]) {
    let mut writer = zip::ZipWriter::new(fs::File::create(path).unwrap());
    writer.start_file(name, SimpleFileOptions::default()).unwrap();
    writer.write_all(data).unwrap();
    writer.finish().unwrap();
}

#[test]
fn test_unpacks_nested_archives_and_lists_them_sorted() {
    let tmp = TempDir::new().unwrap();
    let root = fs::canonicalize(tmp.path()).unwrap();

    let staging = TempDir::new().unwrap();
    let inner = staging.path().join("inner.jar");
    write_zip(&inner, "META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n");
    write_zip(&root.join("app.zip"), "inner.jar", &fs::read(&inner).unwrap());

    let expected = format!(
        "Done:\n  {}\n  {}\n",
        root.join("app.zip").display(),
        root.join("inner.jar").display()
    );
    unjar_cmd()
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::eq(expected));

    assert!(root.join("META-INF/MANIFEST.MF").is_file());
}

#[test]
fn test_nothing_to_unpack() {
    let tmp = TempDir::new().unwrap();

    unjar_cmd()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::eq("Done:\n"));
}

#[test]
fn test_corrupt_archive_is_reported_not_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("broken.jar"), "nope").unwrap();

    unjar_cmd()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("broken.jar"))
        .stderr(predicate::str::contains("Archive error"));
}
