//! The closed outcome taxonomy and the classifier that produces it.

use std::path::PathBuf;

use crate::compile::CompileResult;
use crate::execute::ExecutionResult;
use crate::process::Termination;

/// The classified result of attempting to compile and run one test case.
/// Exactly one is produced per discovered case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Artifact printed `PASS`.
    Pass,
    /// Artifact printed `FAIL`.
    Fail,
    /// Compiler produced output, so the artifact was never run.
    CompileError,
    /// Artifact was killed by the given signal.
    ExecutionError(i32),
    /// Artifact exited normally but printed nothing.
    NoOutput,
    /// Artifact printed something other than `PASS` or `FAIL`.
    UnexpectedOutput,
    /// The named source file does not exist; nothing was compiled.
    MissingFile(PathBuf),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

/// Maps captured compile/run behavior to an [`Outcome`].
///
/// Pure, first match wins:
/// 1. compiler output non-empty -> `CompileError`
/// 2. artifact killed by signal -> `ExecutionError(signal)`
/// 3. trimmed output `PASS` -> `Pass`
/// 4. trimmed output `FAIL` -> `Fail`
/// 5. trimmed output empty -> `NoOutput`
/// 6. anything else -> `UnexpectedOutput`
///
/// `MissingFile` is decided before compilation and never reaches here.
pub fn classify(compile: &CompileResult, execution: Option<&ExecutionResult>) -> Outcome {
    if !compile.is_success() {
        return Outcome::CompileError;
    }
    let Some(execution) = execution else {
        // A clean compile is always followed by a run; an absent record
        // can only mean the artifact produced nothing to judge.
        return Outcome::NoOutput;
    };
    if let Termination::Signaled(sig) = execution.termination {
        return Outcome::ExecutionError(sig);
    }
    match execution.output.as_str() {
        "PASS" => Outcome::Pass,
        "FAIL" => Outcome::Fail,
        "" => Outcome::NoOutput,
        _ => Outcome::UnexpectedOutput,
    }
}
