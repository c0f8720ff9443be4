//! Resolves the ordered set of test cases to run.
//!
//! Two entry points: explicit file names from the command line, or a scan of
//! the test root for sources with the configured extension. Each test is
//! judged independently, so scan order only affects report order; results
//! are sorted to keep runs deterministic.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::HarnessConfig;
use crate::errors::HarnessError;

/// One source file to compile and run. Identity is the path; the display
/// name is the file's base name, used only for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub path: PathBuf,
    pub display_name: String,
}

impl TestCase {
    pub fn new(path: PathBuf) -> Self {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, display_name }
    }
}

/// Resolves explicitly named tests against the test root.
///
/// Argument order and duplicates are preserved. Existence is not checked
/// here; a missing file surfaces as a per-case outcome, not a fault.
pub fn resolve_named(names: &[String], config: &HarnessConfig) -> Vec<TestCase> {
    names
        .iter()
        .map(|name| TestCase::new(config.test_root.join(name)))
        .collect()
}

/// Scans the test root for source files with the configured extension.
///
/// Only files directly inside the root are considered. The list is sorted
/// by path so repeated runs report in the same order.
pub fn discover_all(config: &HarnessConfig) -> Result<Vec<TestCase>, HarnessError> {
    let mut cases = Vec::new();
    for entry in WalkDir::new(&config.test_root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| HarnessError::TestRootUnreadable {
            path: config.test_root.clone(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop")),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if !has_extension(entry.path(), &config.source_ext) {
            continue;
        }
        cases.push(TestCase::new(entry.path().to_path_buf()));
    }
    cases.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(cases)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}
