//! Fixed contract values shared by every harness component.
//!
//! The compiler and the artifact it produces are external collaborators;
//! everything the harness knows about them lives here so that tests can
//! substitute their own paths.

use std::path::PathBuf;

/// Width added to the longest test name when computing the report column.
pub const DEFAULT_NAME_MARGIN: usize = 3;

/// Locations and names that make up the harness's contract with the
/// external compiler and its generated artifact.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Directory holding the test sources.
    pub test_root: PathBuf,
    /// Extension (without the dot) identifying test sources under the root.
    pub source_ext: String,
    /// Compiler executable to invoke once per test case.
    pub compiler: PathBuf,
    /// Value passed to the compiler's `--lib-dir` flag.
    pub lib_dir: PathBuf,
    /// Executable the compiler writes on success, overwritten per case.
    pub artifact: PathBuf,
    /// Padding between the longest test name and the outcome column.
    pub name_margin: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            test_root: PathBuf::from("tests/auto"),
            source_ext: "u".to_string(),
            compiler: PathBuf::from("./compiler"),
            lib_dir: PathBuf::from("lib"),
            artifact: PathBuf::from("./output"),
            name_margin: DEFAULT_NAME_MARGIN,
        }
    }
}
