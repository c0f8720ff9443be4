//! Harness-level faults.
//!
//! Misbehavior of the compiler or of a compiled artifact is *data*, folded
//! into an [`Outcome`](crate::outcome::Outcome) and reported per test case.
//! Only conditions that make the rest of the run untrustworthy are promoted
//! to a `HarnessError` and abort with a diagnostic.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// The test root could not be enumerated at discovery time.
    #[error("failed to read test directory '{path}': {source}")]
    #[diagnostic(
        code(run_tests::discovery),
        help("check that the directory exists and is readable")
    )]
    TestRootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A child process could not be started at all. Distinct from a child
    /// that starts and then fails, which is classified, not propagated.
    #[error("failed to run '{program}': {source}")]
    #[diagnostic(
        code(run_tests::spawn),
        help("check that the executable exists and is runnable from the current directory")
    )]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Captured artifact output was not valid UTF-8. Classification needs
    /// text, so this aborts rather than mis-reporting the case.
    #[error("output of '{program}' is not valid UTF-8: {source}")]
    #[diagnostic(code(run_tests::decode))]
    Decode {
        program: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The report stream itself could not be written.
    #[error("failed to write report: {0}")]
    #[diagnostic(code(run_tests::report))]
    Report(#[from] io::Error),
}
