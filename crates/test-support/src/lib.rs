//! Fixture helpers shared by the skip-rm test suites.
//!
//! Everything here panics on I/O failure; it is only linked into tests.

use std::fs;
use std::path::{Path, PathBuf};

pub use tempfile::TempDir;

/// Creates a fresh scratch directory that is removed on drop.
#[must_use]
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create scratch directory")
}

/// Writes `lines` to `dir/name`, one per line, and returns the file path.
///
/// Every line, including the last, is terminated by `\n`. Empty entries
/// produce blank lines.
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    write_file(dir, name, &contents)
}

/// Writes raw `contents` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture parent directory");
    }
    fs::write(&path, contents).expect("write fixture file");
    path
}

/// Writes a skip-rm configuration document to `dir/skip-rm.conf`.
pub fn write_config(dir: &Path, json: &str) -> PathBuf {
    write_file(dir, "skip-rm.conf", json)
}
