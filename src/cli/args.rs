//! Defines the command-line arguments for the harness.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "run-tests",
    version,
    about = "Compile and run every test case, reporting one outcome per file."
)]
pub struct HarnessArgs {
    /// Test file names under the test root. With no names, every test
    /// source in the root is run.
    pub files: Vec<String>,
}
