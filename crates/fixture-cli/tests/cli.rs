//! End-to-end tests for the `random-data` and `random-files` binaries.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn random_data(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_random-data"))
        .args(args)
        .output()
        .unwrap()
}

fn random_files(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_random-files"))
        .args(args)
        .output()
        .unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_random_data_size_and_seed() {
    let first = random_data(&["--size", "100", "--seed", "5"]);
    assert!(first.status.success());
    assert_eq!(first.stdout.len(), 100);

    let again = random_data(&["--size", "100", "--seed", "5"]);
    assert_eq!(first.stdout, again.stdout);

    let other = random_data(&["--size", "100", "--seed", "6"]);
    assert_ne!(first.stdout, other.stdout);
}

#[test]
fn test_random_data_b64() {
    let raw = random_data(&["--size", "100", "--seed", "11"]);
    let encoded = random_data(&["--size", "100", "--seed", "11", "--b64"]);
    assert!(encoded.status.success());

    let text = String::from_utf8(encoded.stdout).unwrap();
    assert!(text.ends_with('\n'));
    assert_eq!(text.trim_end(), STANDARD.encode(&raw.stdout));
}

#[test]
fn test_random_data_requires_size() {
    for args in [&[][..], &["--size", "0"][..], &["--size", "-4"][..]] {
        let out = random_data(args);
        assert_eq!(out.status.code(), Some(1), "args: {:?}", args);
        assert!(out.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.starts_with("error: missing value for size"), "{}", stderr);
        assert!(stderr.contains("Usage"));
    }
}

#[test]
fn test_random_files_listing() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("foo");
    let out = random_files(&[
        "--depth",
        "2",
        "--dirs",
        "5",
        "--files",
        "3",
        "--seed",
        "1",
        path_arg(&root),
    ]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 23);
    assert_eq!(stdout.lines().filter(|l| l.ends_with('/')).count(), 5);
}

#[test]
fn test_random_files_quiet() {
    let tmp = TempDir::new().unwrap();
    let out = random_files(&["-q", "--depth", "1", "--files", "4", path_arg(tmp.path())]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 4);
}

#[test]
fn test_random_files_fixed_size() {
    let tmp = TempDir::new().unwrap();
    let out = random_files(&[
        "-q",
        "--depth",
        "1",
        "--files",
        "3",
        "--filesize",
        "10",
        "--random-size=false",
        path_arg(tmp.path()),
    ]);
    assert!(out.status.success());
    for entry in fs::read_dir(tmp.path()).unwrap() {
        assert_eq!(entry.unwrap().metadata().unwrap().len(), 10);
    }
}

#[test]
fn test_random_files_config_file_with_override() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("tree.yml");
    fs::write(&config, "depth: 1\nfiles: 2\nseed: 8\n").unwrap();
    let root = tmp.path().join("root");

    let out = random_files(&["--config", path_arg(&config), "--files", "4", path_arg(&root)]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().lines().count(), 4);
}

#[test]
fn test_random_files_without_paths() {
    let out = random_files(&["--depth", "2"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: must provide at least 1 root directory path"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_random_files_invalid_config() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("never");
    let out = random_files(&["--depth", "0", path_arg(&root)]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("depth out of range"), "{}", stderr);
    assert!(!root.exists());
}

#[test]
fn test_random_files_name_bounds() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("names");
    let out = random_files(&[
        "--depth",
        "1",
        "--files",
        "5",
        "--name-min",
        "2",
        "--name-max",
        "2",
        path_arg(&root),
    ]);
    assert!(out.status.success());
    for entry in fs::read_dir(&root).unwrap() {
        assert_eq!(entry.unwrap().file_name().len(), 2);
    }
}

#[test]
fn test_random_files_debug_log_on_stderr() {
    let tmp = TempDir::new().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_random-files"))
        .env("RUST_LOG", "debug")
        .args(["--depth", "1", "--files", "1", path_arg(tmp.path())])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("resolved hierarchy config"), "{}", stderr);
    assert_eq!(String::from_utf8(out.stdout).unwrap().lines().count(), 1);
}
