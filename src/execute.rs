//! Runs the compiled artifact and records what it did.
//!
//! The artifact's contract: run with no arguments and no input, it prints
//! `PASS` or `FAIL` and exits normally. Everything else it might do
//! (crash, stay silent, print garbage) is recorded here and classified
//! later.

use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::process::{ProcessRunner, Termination};

/// Observed behavior of one artifact run: its combined output, decoded and
/// trimmed, and how the process ended.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub output: String,
    pub termination: Termination,
}

impl ExecutionResult {
    pub fn signal(&self) -> Option<i32> {
        self.termination.signal()
    }
}

/// Runs the artifact the previous compile step produced, blocking until it
/// terminates. Output that is not valid UTF-8 aborts the whole run rather
/// than being silently mis-classified.
pub fn run_artifact(
    config: &HarnessConfig,
    runner: &dyn ProcessRunner,
) -> Result<ExecutionResult, HarnessError> {
    let captured = runner.run(&config.artifact, &[])?;
    let text = std::str::from_utf8(&captured.output).map_err(|source| HarnessError::Decode {
        program: config.artifact.display().to_string(),
        source,
    })?;
    Ok(ExecutionResult {
        output: text.trim().to_string(),
        termination: captured.termination,
    })
}
