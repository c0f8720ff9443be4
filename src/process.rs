//! The seam between the harness and real child processes.
//!
//! Both the compiler and the compiled artifact are reached through the
//! [`ProcessRunner`] trait, so the harness's own tests can substitute fake
//! compiler/artifact behavior without spawning anything.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::errors::HarnessError;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with the given status code.
    Exited(i32),
    /// Killed by the given signal number.
    Signaled(i32),
}

impl Termination {
    pub fn signal(&self) -> Option<i32> {
        match self {
            Termination::Signaled(sig) => Some(*sig),
            Termination::Exited(_) => None,
        }
    }
}

/// Combined output and termination status of one finished child process.
#[derive(Debug, Clone)]
pub struct Captured {
    /// stdout and stderr, captured as one buffer.
    pub output: Vec<u8>,
    pub termination: Termination,
}

/// Runs a command to completion with no input attached, capturing its
/// combined output and how it terminated.
pub trait ProcessRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<Captured, HarnessError>;
}

/// The real runner: spawns via `std::process::Command` and blocks until
/// the child exits.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<Captured, HarnessError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HarnessError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        // stdout first, then stderr. The contracts only ever ask whether
        // the combined buffer is empty or equals a single trimmed word, so
        // interleaving does not need to be preserved.
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        Ok(Captured {
            output: combined,
            termination: termination_of(&output.status),
        })
    }
}

fn termination_of(status: &ExitStatus) -> Termination {
    match status.code() {
        Some(code) => Termination::Exited(code),
        None => Termination::Signaled(signal_of(status)),
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(0)
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> i32 {
    0
}
