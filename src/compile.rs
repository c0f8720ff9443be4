//! Drives the external compiler for one test case.
//!
//! The compiler's contract: invoked with a fixed flag list and the test
//! source as the final argument, it stays silent on success and writes the
//! runnable artifact to the working directory. Any output at all, on either
//! stream, means the compile failed; its exit code is never inspected.

use std::ffi::OsString;

use crate::config::HarnessConfig;
use crate::discovery::TestCase;
use crate::errors::HarnessError;
use crate::process::ProcessRunner;

const TAIL_RECURSION_FLAG: &str = "--eliminate-tail-recursion";
const LIB_DIR_FLAG: &str = "--lib-dir";

/// Captured compiler output for one test case.
#[derive(Debug, Clone)]
pub struct CompileResult {
    pub raw_output: Vec<u8>,
}

impl CompileResult {
    /// Success is silence: any captured byte marks the compile as failed.
    pub fn is_success(&self) -> bool {
        self.raw_output.is_empty()
    }
}

/// Invokes the compiler on the test case's source file, blocking until it
/// exits, and returns whatever it printed.
pub fn compile(
    case: &TestCase,
    config: &HarnessConfig,
    runner: &dyn ProcessRunner,
) -> Result<CompileResult, HarnessError> {
    let args = vec![
        OsString::from(TAIL_RECURSION_FLAG),
        OsString::from(LIB_DIR_FLAG),
        config.lib_dir.clone().into_os_string(),
        case.path.clone().into_os_string(),
    ];
    let captured = runner.run(&config.compiler, &args)?;
    Ok(CompileResult {
        raw_output: captured.output,
    })
}
